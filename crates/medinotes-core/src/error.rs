//! Error Types

use thiserror::Error;

use crate::landing::Branch;

/// Result type alias for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Build configuration errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Unrecognized `output` value
    #[error("Unknown output mode: {0} (expected \"export\" or \"server\")")]
    UnknownOutput(String),

    /// A boolean option could not be parsed
    #[error("Invalid value for {key}: {value}")]
    InvalidFlag { key: &'static str, value: String },

    /// Static export cannot run an image optimizer at serve time
    #[error("Static export requires images.unoptimized = true")]
    OptimizedImagesInExport,
}

/// A rendered landing document that breaks the branch contract
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConsistencyError {
    /// Expected branch marker count differs from the two action slots
    #[error("Expected {expected} in both action slots, found {found} marker(s)")]
    MissingBranch { expected: Branch, found: usize },

    /// A marker for a branch other than the current one was rendered
    #[error("Rendered {unexpected} branch while in {expected} state")]
    ForeignBranch { expected: Branch, unexpected: Branch },

    /// A control that belongs to another branch was rendered
    #[error("Control {control:?} must not appear in {branch} state")]
    UnexpectedControl { branch: Branch, control: &'static str },

    /// A control required by the current branch is missing
    #[error("Control {control:?} is missing in {branch} state")]
    MissingControl { branch: Branch, control: &'static str },

    /// Unconditional content is missing
    #[error("Static content missing: {0:?}")]
    MissingContent(String),
}
