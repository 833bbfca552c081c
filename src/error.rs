//! Error types for the add-on validation and synchronization crate.
//!
//! Validation outcomes (illegal names, case duplicates) are deliberately
//! NOT errors: untrusted input fails those checks routinely, so they are
//! surfaced as booleans and diagnostic path lists. The error types here
//! cover the ingestion boundary (malformed host trees) and configuration.

use thiserror::Error;

/// Errors raised while parsing a host attribute tree into typed nodes.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Node is missing its name attribute")]
    MissingName,

    #[error("Attribute {0:?} has the wrong type")]
    BadAttribute(&'static str),

    #[error("File contents are not valid base64: {0}")]
    InvalidContents(String),

    #[error("Tree nesting exceeds the maximum depth of {0}")]
    TooDeep(usize),

    #[error("Expected a directory object, found {0}")]
    NotADirectory(&'static str),
}

/// Configuration and logging-setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Invalid log directive: {0}")]
    LogDirective(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}
