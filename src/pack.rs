//! Update pack assembly.
//!
//! An update pack is the minimal delta that brings a client's copy of an
//! add-on in sync with the server's: a remove list (what to delete, names
//! only) and an add list (what to fetch, with contents and digests).

use crate::diff::write_difference;
use crate::tree::node::DirNode;
use tracing::debug;

/// The add/remove delta between two snapshots of one add-on tree.
///
/// Built fresh per diff operation; no state is shared across calls.
#[derive(Debug, Clone)]
pub struct UpdatePack {
    /// Paths present in the old tree but absent (by name and digest) from
    /// the new one. Entries carry no contents.
    pub removelist: DirNode,
    /// Paths present in the new tree but absent from the old one, with
    /// full contents and digests.
    pub addlist: DirNode,
}

impl UpdatePack {
    /// True when the two snapshots describe identical content.
    pub fn is_empty(&self) -> bool {
        self.removelist.is_empty() && self.addlist.is_empty()
    }
}

/// Compute the update pack taking a client from `from` to `to`.
///
/// The remove list diffs in the swapped direction (new against old):
/// what the old tree has that the new one lacks is what the client must
/// delete. Because identity is (name, digest) and not name alone, a file
/// whose content changed appears in both lists, once per version.
pub fn make_update_pack(from: &DirNode, to: &DirNode) -> UpdatePack {
    let (removelist, removed) = write_difference(to, from, false);
    let (addlist, added) = write_difference(from, to, true);

    debug!(removed, added, "built update pack");

    UpdatePack {
        removelist,
        addlist,
    }
}
