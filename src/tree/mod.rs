//! Add-on Directory Tree
//!
//! Typed representation of an add-on package: a directory tree of files
//! with binary contents and optional cached content digests. Trees enter
//! the crate through [`ingest`], which validates structure and bounds
//! nesting depth once at the boundary.

pub mod hasher;
pub mod ingest;
pub mod node;
