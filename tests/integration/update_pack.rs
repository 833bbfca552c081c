//! Integration tests for update pack assembly between tree snapshots

use addon_sync::{make_update_pack, DirNode, FileNode};

fn base_snapshot() -> DirNode {
    let mut root = DirNode::new("Addon");
    root.files.push(FileNode::new("_main.cfg", b"[campaign]".to_vec()));
    root.files.push(FileNode::new("old.cfg", b"old content".to_vec()));

    let mut sub = DirNode::new("sub");
    sub.files.push(FileNode::new("kept.cfg", b"kept".to_vec()));
    root.dirs.push(sub);
    root
}

#[test]
fn test_equal_snapshots_yield_empty_pack() {
    let from = base_snapshot();
    let to = base_snapshot();

    let pack = make_update_pack(&from, &to);
    assert!(pack.is_empty());
    assert!(pack.addlist.files.is_empty() && pack.addlist.dirs.is_empty());
    assert!(pack.removelist.files.is_empty() && pack.removelist.dirs.is_empty());
}

#[test]
fn test_added_file_in_subdirectory() {
    let from = base_snapshot();
    let mut to = base_snapshot();
    to.dirs[0]
        .files
        .push(FileNode::new("new.cfg", b"new content".to_vec()));

    let pack = make_update_pack(&from, &to);

    // Exactly sub/new.cfg, with content and digest.
    assert!(pack.removelist.is_empty());
    assert!(pack.addlist.files.is_empty());
    assert_eq!(pack.addlist.dirs.len(), 1);
    let sub = &pack.addlist.dirs[0];
    assert_eq!(sub.name, "sub");
    assert_eq!(sub.files.len(), 1);
    assert_eq!(sub.files[0].name, "new.cfg");
    assert_eq!(sub.files[0].contents, b"new content");
    assert!(sub.files[0].hash.is_some());
    // The unchanged kept.cfg is not re-shipped.
    assert!(sub.files.iter().all(|f| f.name != "kept.cfg"));
}

#[test]
fn test_removed_file_listed_without_content() {
    let from = base_snapshot();
    let mut to = base_snapshot();
    to.files.retain(|f| f.name != "old.cfg");

    let pack = make_update_pack(&from, &to);

    assert!(pack.addlist.is_empty());
    assert_eq!(pack.removelist.files.len(), 1);
    assert_eq!(pack.removelist.files[0].name, "old.cfg");
    assert!(pack.removelist.files[0].contents.is_empty());
    assert!(pack.removelist.files[0].hash.is_none());
    assert!(pack.removelist.dirs.is_empty());
}

#[test]
fn test_content_change_appears_in_both_lists() {
    let from = base_snapshot();
    let mut to = base_snapshot();
    to.dirs[0].files[0].contents = b"rewritten".to_vec();

    let pack = make_update_pack(&from, &to);

    let removed = &pack.removelist.dirs[0].files[0];
    assert_eq!(removed.name, "kept.cfg");
    assert!(removed.contents.is_empty());

    let added = &pack.addlist.dirs[0].files[0];
    assert_eq!(added.name, "kept.cfg");
    assert_eq!(added.contents, b"rewritten");
}

#[test]
fn test_removed_directory_subtree() {
    let from = base_snapshot();
    let mut to = base_snapshot();
    to.dirs.clear();

    let pack = make_update_pack(&from, &to);

    assert!(pack.addlist.is_empty());
    assert_eq!(pack.removelist.dirs.len(), 1);
    assert_eq!(pack.removelist.dirs[0].name, "sub");
    assert_eq!(pack.removelist.dirs[0].files[0].name, "kept.cfg");
}

#[test]
fn test_rename_is_delete_plus_add() {
    let from = base_snapshot();
    let mut to = base_snapshot();
    to.files[1].name = "renamed.cfg".to_string();

    let pack = make_update_pack(&from, &to);

    assert_eq!(pack.removelist.files[0].name, "old.cfg");
    assert_eq!(pack.addlist.files[0].name, "renamed.cfg");
    assert_eq!(pack.addlist.files[0].contents, b"old content");
}
