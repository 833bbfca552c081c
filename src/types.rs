//! Shared type aliases and tree-wide limits.

/// Base64-encoded MD5 digest of a file's contents.
pub type Digest = String;

/// Maximum directory nesting accepted at ingestion.
///
/// Tree depth is untrusted input; bounding it once at the boundary keeps
/// every recursive traversal in the crate within a known stack budget.
pub const MAX_TREE_DEPTH: usize = 128;
