//! Integration tests for admission checks over whole add-on trees

use addon_sync::{
    addon_name_legal, check_case_insensitive_duplicates, check_names_legal, filename_legal,
    DirNode, FileNode,
};

fn addon_tree() -> DirNode {
    // Root [dir] holds a single subdir named after the add-on, the way
    // upload pipelines hand trees over.
    let mut addon = DirNode::new("Legend_of_the_Invincibles");
    addon.files.push(FileNode::new("_main.cfg", b"[textdomain]".to_vec()));

    let mut units = DirNode::new("units");
    units.files.push(FileNode::new("knight.cfg", b"[unit_type]".to_vec()));
    addon.dirs.push(units);

    let mut root = DirNode::new("");
    root.dirs.push(addon);
    root
}

/// Known acceptance and rejection vectors for single filenames
#[test]
fn test_filename_vectors() {
    for good in ["readme.txt", "CONTROL.cfg", "a-b_c.1"] {
        assert!(filename_legal(good), "{good:?} should be legal");
    }
    for bad in ["", "a.", "a..b", "CON", "con.txt", "COM1.backup", "CONOUT$"] {
        assert!(!filename_legal(bad), "{bad:?} should be illegal");
    }
    assert!(!filename_legal(&"x".repeat(256)));
}

#[test]
fn test_addon_name_vectors() {
    assert!(addon_name_legal("Legend_of_the_Invincibles"));
    assert!(addon_name_legal("AtS-2"));
    assert!(!addon_name_legal("After the Storm"));
    assert!(!addon_name_legal(""));
}

#[test]
fn test_clean_tree_passes_both_checks() {
    let tree = addon_tree();

    let mut badlist = Vec::new();
    assert!(check_names_legal(&tree, Some(&mut badlist)));
    assert!(badlist.is_empty());
    assert!(check_case_insensitive_duplicates(&tree, Some(&mut badlist)));
    assert!(badlist.is_empty());
}

#[test]
fn test_illegal_names_reported_with_addon_prefix() {
    let mut tree = addon_tree();
    tree.dirs[0]
        .files
        .push(FileNode::named("~illegalfilename1"));

    let mut badlist = Vec::new();
    assert!(!check_names_legal(&tree, Some(&mut badlist)));
    assert_eq!(
        badlist,
        vec!["Legend_of_the_Invincibles/~illegalfilename1"]
    );
}

#[test]
fn test_fail_fast_mode_gives_no_diagnostics() {
    let mut tree = addon_tree();
    tree.dirs[0].files.push(FileNode::named("nul.dat"));

    assert!(!check_names_legal(&tree, None));
}

#[test]
fn test_case_duplicates_reported_with_both_spellings() {
    let mut tree = addon_tree();
    tree.dirs[0].files.push(FileNode::named("Readme.txt"));
    tree.dirs[0].files.push(FileNode::named("readme.TXT"));

    let mut badlist = Vec::new();
    assert!(!check_case_insensitive_duplicates(&tree, Some(&mut badlist)));
    assert!(badlist.contains(&"Legend_of_the_Invincibles/Readme.txt".to_string()));
    assert!(badlist.contains(&"Legend_of_the_Invincibles/readme.TXT".to_string()));
}

#[test]
fn test_both_checks_are_independent() {
    // A name can be illegal AND collide; each check reports on its own.
    let mut tree = addon_tree();
    tree.dirs[0].files.push(FileNode::named("CON"));
    tree.dirs[0].files.push(FileNode::named("con"));

    let mut illegal = Vec::new();
    assert!(!check_names_legal(&tree, Some(&mut illegal)));
    assert_eq!(illegal.len(), 2);

    let mut collided = Vec::new();
    assert!(!check_case_insensitive_duplicates(&tree, Some(&mut collided)));
    assert_eq!(collided.len(), 2);
}
