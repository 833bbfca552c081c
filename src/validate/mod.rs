//! Admission checks for untrusted add-on trees
//!
//! Two independent layers: per-name legality (reserved device names,
//! illegal characters, encoding) and per-level case-insensitive duplicate
//! detection. Both run over the same tree and both support a collect-all
//! diagnostic mode and a fail-fast mode.

pub mod duplicates;
pub mod name;
