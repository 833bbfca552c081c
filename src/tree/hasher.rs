//! Content hashing for file nodes using MD5
//!
//! The digest string (base64-encoded MD5) is the unit of equality for
//! diffing: two files are the same iff name and digest match. Content is
//! never compared byte-for-byte once digests exist, trading a negligible
//! collision risk for diff speed at add-on content scale.

use crate::tree::node::FileNode;
use crate::types::Digest;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use md5::{Digest as _, Md5};

/// Compute the content digest of raw file bytes.
pub fn file_hash_raw(contents: &[u8]) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(contents);
    BASE64.encode(hasher.finalize())
}

/// Digest of a file node: the cached `hash` attribute when present,
/// otherwise computed fresh from `contents`.
///
/// Does not write the computed digest back; caching is the hash-list
/// builder's responsibility.
pub fn file_hash(file: &FileNode) -> Digest {
    match &file.hash {
        Some(hash) if !hash.is_empty() => hash.clone(),
        _ => file_hash_raw(&file.contents),
    }
}

/// True iff both name and content digest match.
pub fn comp_file_hash(file_a: &FileNode, file_b: &FileNode) -> bool {
    file_a.name == file_b.name && file_hash(file_a) == file_hash(file_b)
}
