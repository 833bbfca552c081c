//! Tree diffing keyed by content hash
//!
//! Hash lists ship "what content exists" without shipping content;
//! containment and directed difference both compare files by
//! (name, digest), never byte-for-byte. All traversals here recurse to
//! the tree's depth, which ingestion bounds at
//! [`MAX_TREE_DEPTH`](crate::types::MAX_TREE_DEPTH).

use crate::tree::hasher::{comp_file_hash, file_hash};
use crate::tree::node::{DirNode, FileNode};
use tracing::trace;

/// Build the hash list of a tree: same shape, file contents replaced by
/// their digests. Child order is preserved from the input, so output
/// order is deterministic.
pub fn write_hashlist(data: &DirNode) -> DirNode {
    let mut hashlist = DirNode::new(data.name.clone());

    for f in &data.files {
        hashlist.files.push(FileNode {
            name: f.name.clone(),
            contents: Vec::new(),
            hash: Some(file_hash(f)),
        });
    }

    for d in &data.dirs {
        hashlist.dirs.push(write_hashlist(d));
    }

    hashlist
}

/// Whether every file in `to` has a same-named, same-digest counterpart
/// in `from`, recursively. Asymmetric: extra content in `from` is never
/// checked.
///
/// A subdirectory of `to` with no counterpart in `from` is compared
/// against a synthetic empty directory, so it is contained only if it
/// holds no files anywhere.
pub fn contains_hashlist(from: &DirNode, to: &DirNode) -> bool {
    for f in &to.files {
        if !from.files.iter().any(|d| comp_file_hash(f, d)) {
            return false;
        }
    }

    for d in &to.dirs {
        match from.find_dir(&d.name) {
            Some(origin_dir) => {
                if !contains_hashlist(origin_dir, d) {
                    return false;
                }
            }
            None => {
                // The case of empty new subdirectories
                let dummy_dir = DirNode::new(d.name.clone());
                if !contains_hashlist(&dummy_dir, d) {
                    return false;
                }
            }
        }
    }

    true
}

/// Directed difference: the subtree of `to` whose files have no
/// (name, digest) counterpart in `from`.
///
/// Subdirectories are attached only when their recursive diff reports
/// changes, so unchanged subtrees never produce empty directory entries.
/// With `with_content`, included files carry contents and digest (add
/// lists); without, they are stripped to their name (remove lists only
/// identify what to delete).
///
/// Returns the difference tree and whether anything was attached.
pub fn write_difference(from: &DirNode, to: &DirNode, with_content: bool) -> (DirNode, bool) {
    let mut pack = DirNode::new(to.name.clone());
    let mut has_changes = false;

    for f in &to.files {
        if !from.files.iter().any(|d| comp_file_hash(f, d)) {
            trace!(name = %f.name, with_content, "file differs");
            let file = if with_content {
                FileNode {
                    name: f.name.clone(),
                    contents: f.contents.clone(),
                    hash: Some(file_hash(f)),
                }
            } else {
                FileNode::named(f.name.clone())
            };
            pack.files.push(file);
            has_changes = true;
        }
    }

    for d in &to.dirs {
        let (dir, changed) = match from.find_dir(&d.name) {
            Some(origin_dir) => write_difference(origin_dir, d, with_content),
            None => {
                let dummy_dir = DirNode::new(d.name.clone());
                write_difference(&dummy_dir, d, with_content)
            }
        };
        if changed {
            pack.dirs.push(dir);
            has_changes = true;
        }
    }

    (pack, has_changes)
}
