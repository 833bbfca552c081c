//! Typed add-on tree nodes.
//!
//! The host application hands us a dynamically-typed ordered attribute
//! tree; parsing it once into these two fixed shapes removes the whole
//! "missing attribute at use site" failure class from the rest of the
//! crate. Child order is insertion order, as in the host container.
//! Name uniqueness within a level is NOT an invariant of these types;
//! detecting collisions is the duplicate detector's job.

/// A file inside an add-on package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    /// Raw file bytes. Empty for hash-list and remove-list entries.
    pub contents: Vec<u8>,
    /// Cached content digest, if one was shipped with the tree.
    pub hash: Option<String>,
}

impl FileNode {
    /// File with contents and no cached digest.
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
            hash: None,
        }
    }

    /// Bare entry carrying only a name (remove-list form).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: Vec::new(),
            hash: None,
        }
    }
}

/// A directory inside an add-on package.
///
/// Files and subdirectories are kept in separate ordered lists, matching
/// the host container's same-tagged child ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirNode {
    pub name: String,
    pub files: Vec<FileNode>,
    pub dirs: Vec<DirNode>,
}

impl DirNode {
    /// Empty directory with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// First subdirectory whose name matches, in insertion order.
    pub fn find_dir(&self, name: &str) -> Option<&DirNode> {
        self.dirs.iter().find(|d| d.name == name)
    }

    /// First file whose name matches, in insertion order.
    pub fn find_file(&self, name: &str) -> Option<&FileNode> {
        self.files.iter().find(|f| f.name == name)
    }

    /// True when the directory has no files and no subdirectories.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }

    /// Depth of the deepest nesting under this node, counting this node
    /// as 1. Iterative so adversarially deep trees cannot overflow the
    /// call stack while being measured.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack: Vec<(&DirNode, usize)> = vec![(self, 1)];
        while let Some((dir, level)) = stack.pop() {
            max_depth = max_depth.max(level);
            for child in &dir.dirs {
                stack.push((child, level + 1));
            }
        }
        max_depth
    }
}
