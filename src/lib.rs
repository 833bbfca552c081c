//! addon-sync: Validation and Delta Synchronization for Add-on Packages
//!
//! Checks untrusted add-on directory trees for cross-platform filesystem
//! safety (reserved device names, illegal characters, case-insensitive
//! duplicates) and computes minimal update packs (add/remove deltas keyed
//! by content hash) between two snapshots of the same tree.

pub mod codec;
pub mod config;
pub mod diff;
pub mod error;
pub mod kind;
pub mod logging;
pub mod pack;
pub mod tree;
pub mod types;
pub mod validate;

pub use codec::{encode_binary, unencode_binary};
pub use diff::{contains_hashlist, write_hashlist};
pub use kind::AddonKind;
pub use pack::{make_update_pack, UpdatePack};
pub use tree::node::{DirNode, FileNode};
pub use validate::duplicates::{check_case_insensitive_duplicates, check_names_legal};
pub use validate::name::{addon_name_legal, filename_bytes_legal, filename_legal};

/// Default TCP port of the enclosing content-distribution service.
pub const DEFAULT_SERVER_PORT: u16 = 15015;
