//! Parse-once ingestion boundary for host attribute trees.
//!
//! The host container serializes a directory as an object with a `name`
//! attribute plus `file` and `dir` child arrays, file contents carried
//! base64-encoded. Everything structural is checked here, exactly once:
//! downstream code never looks up an attribute that might be missing.
//!
//! Nesting depth is untrusted; anything deeper than
//! [`MAX_TREE_DEPTH`](crate::types::MAX_TREE_DEPTH) is rejected before
//! recursing further, so the parse itself stays within a fixed stack
//! budget.

use crate::error::TreeError;
use crate::tree::node::{DirNode, FileNode};
use crate::types::MAX_TREE_DEPTH;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde_json::Value;
use tracing::trace;

/// Parse a host directory value into a typed [`DirNode`].
pub fn dir_from_value(value: &Value) -> Result<DirNode, TreeError> {
    parse_dir(value, 1)
}

fn parse_dir(value: &Value, depth: usize) -> Result<DirNode, TreeError> {
    if depth > MAX_TREE_DEPTH {
        return Err(TreeError::TooDeep(MAX_TREE_DEPTH));
    }

    let obj = match value {
        Value::Object(map) => map,
        other => return Err(TreeError::NotADirectory(json_kind(other))),
    };

    let mut dir = DirNode::new(name_attribute(obj)?);

    if let Some(files) = obj.get("file") {
        let files = files
            .as_array()
            .ok_or(TreeError::BadAttribute("file"))?;
        for file in files {
            dir.files.push(parse_file(file)?);
        }
    }

    if let Some(dirs) = obj.get("dir") {
        let dirs = dirs.as_array().ok_or(TreeError::BadAttribute("dir"))?;
        for child in dirs {
            dir.dirs.push(parse_dir(child, depth + 1)?);
        }
    }

    trace!(
        name = %dir.name,
        files = dir.files.len(),
        dirs = dir.dirs.len(),
        "ingested directory"
    );

    Ok(dir)
}

fn parse_file(value: &Value) -> Result<FileNode, TreeError> {
    let obj = match value {
        Value::Object(map) => map,
        other => return Err(TreeError::NotADirectory(json_kind(other))),
    };

    let mut file = FileNode::named(name_attribute(obj)?);

    if let Some(contents) = obj.get("contents") {
        let encoded = contents
            .as_str()
            .ok_or(TreeError::BadAttribute("contents"))?;
        file.contents = BASE64
            .decode(encoded)
            .map_err(|e| TreeError::InvalidContents(e.to_string()))?;
    }

    if let Some(hash) = obj.get("hash") {
        let hash = hash.as_str().ok_or(TreeError::BadAttribute("hash"))?;
        if !hash.is_empty() {
            file.hash = Some(hash.to_string());
        }
    }

    Ok(file)
}

fn name_attribute(obj: &serde_json::Map<String, Value>) -> Result<String, TreeError> {
    match obj.get("name") {
        Some(Value::String(name)) => Ok(name.clone()),
        Some(_) => Err(TreeError::BadAttribute("name")),
        None => Err(TreeError::MissingName),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
