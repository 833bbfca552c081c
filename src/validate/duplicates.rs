//! Tree-wide name checks: legality of every component and
//! case-insensitive collisions within each directory level.
//!
//! Both checks walk the tree with an explicit work stack rather than call
//! recursion: tree depth is attacker-controlled, and the ingestion depth
//! bound does not cover trees built programmatically by the host.
//!
//! Both support two modes. Passing `Some(&mut Vec)` collects every
//! offending relative path for user-facing diagnostics; passing `None`
//! short-circuits on the first problem, for hot-path admission checks.

use crate::tree::node::DirNode;
use crate::validate::name::filename_legal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// Per-key collision bookkeeping: the first occurrence's path is kept so
/// it can be reported exactly once, on the first collision for its key.
enum SeenState {
    Seen(String),
    Reported,
}

/// Check that every file and subdirectory name in the tree is legal.
///
/// The root's own name is not checked; callers usually pass the add-on's
/// enclosing root directory, whose single child carries the add-on name.
/// Offending entries are reported as `/`-joined relative paths, with a
/// trailing `/` for directories.
///
/// Returns true iff no illegal name was found.
pub fn check_names_legal(root: &DirNode, mut badlist: Option<&mut Vec<String>>) -> bool {
    let mut stack: Vec<(&DirNode, String)> = vec![(root, String::new())];
    let mut clean = true;

    while let Some((dir, prefix)) = stack.pop() {
        for file in &dir.files {
            if !filename_legal(&file.name) {
                match badlist.as_mut() {
                    Some(list) => {
                        list.push(format!("{}{}", prefix, file.name));
                        clean = false;
                    }
                    None => return false,
                }
            }
        }

        for sub in dir.dirs.iter().rev() {
            let sub_prefix = format!("{}{}/", prefix, sub.name);
            if !filename_legal(&sub.name) {
                match badlist.as_mut() {
                    Some(list) => {
                        list.push(sub_prefix.clone());
                        clean = false;
                    }
                    None => return false,
                }
            }
            stack.push((sub, sub_prefix));
        }
    }

    if !clean {
        if let Some(list) = badlist.as_deref() {
            debug!(offenders = list.len(), "tree contains illegal names");
        }
    }

    clean
}

/// Detect names that collide under ASCII case folding within the same
/// directory level. Files and subdirectories share one namespace.
///
/// On the first collision for a key, both the originally-seen path and
/// the collider are reported; later collisions for the same key report
/// only the new path. Collided subdirectories are still recursed into,
/// each under its own original-case prefix.
///
/// Returns true iff no collision was found.
pub fn check_case_insensitive_duplicates(
    root: &DirNode,
    mut badlist: Option<&mut Vec<String>>,
) -> bool {
    let mut stack: Vec<(&DirNode, String)> = vec![(root, String::new())];
    let mut clean = true;

    while let Some((dir, prefix)) = stack.pop() {
        let mut seen: HashMap<String, SeenState> = HashMap::new();

        let names = dir
            .files
            .iter()
            .map(|f| f.name.as_str())
            .chain(dir.dirs.iter().map(|d| d.name.as_str()));

        for name in names {
            let lowercase = name.to_ascii_lowercase();
            let with_prefix = format!("{}{}", prefix, name);

            match seen.entry(lowercase) {
                Entry::Vacant(slot) => {
                    slot.insert(SeenState::Seen(with_prefix));
                }
                Entry::Occupied(mut slot) => match badlist.as_mut() {
                    Some(list) => {
                        let state = slot.get_mut();
                        if let SeenState::Seen(original) = state {
                            list.push(std::mem::take(original));
                            *state = SeenState::Reported;
                        }
                        list.push(with_prefix);
                        clean = false;
                    }
                    None => return false,
                },
            }
        }

        for sub in dir.dirs.iter().rev() {
            stack.push((sub, format!("{}{}/", prefix, sub.name)));
        }
    }

    if !clean {
        if let Some(list) = badlist.as_deref() {
            debug!(offenders = list.len(), "tree contains case-colliding names");
        }
    }

    clean
}
