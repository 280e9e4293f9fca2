//! Error types and handling for trendctl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Settings file errors
//! - [`section`]: Missing sections and keys in the edited files
//! - [`input`]: Operator input validation errors
//! - [`tool`]: External editor / job runner errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod input;
pub mod section;
pub mod tool;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for trendctl operations
#[derive(Error, Diagnostic, Debug)]
pub enum TrendctlError {
    // Settings errors
    #[error("Settings file not found: {path}")]
    #[diagnostic(
        code(trendctl::config::not_found),
        help("Check the --settings path or unset TRENDCTL_SETTINGS to use the defaults")
    )]
    SettingsNotFound { path: String },

    #[error("Failed to parse settings file: {path}: {reason}")]
    #[diagnostic(code(trendctl::config::parse_failed))]
    SettingsParseFailed { path: String, reason: String },

    // Section / key errors
    #[error("Section '{section}' not found in {path}")]
    #[diagnostic(
        code(trendctl::section::not_found),
        help("The configuration file needs a top-level '{section}:' list")
    )]
    SectionNotFound { section: String, path: String },

    #[error("Key '{key}' not found")]
    #[diagnostic(
        code(trendctl::section::key_not_found),
        help("Only existing keys can be updated; add the key to the file first")
    )]
    KeyNotFound { key: String },

    // Operator input errors
    #[error("Invalid input: {message}")]
    #[diagnostic(code(trendctl::input::invalid))]
    InvalidInput { message: String },

    #[error("Platform '{id}' already exists")]
    #[diagnostic(
        code(trendctl::input::duplicate_platform),
        help("Platform ids must be unique within the platforms section")
    )]
    DuplicatePlatform { id: String },

    // External tool errors
    #[error("'{tool}' is not installed")]
    #[diagnostic(
        code(trendctl::tool::missing),
        help("Install it or point the `editor` setting / $EDITOR at another program")
    )]
    ExternalToolMissing { tool: String },

    #[error("Failed to launch '{tool}': {reason}")]
    #[diagnostic(code(trendctl::tool::failed))]
    ExternalToolFailed { tool: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(trendctl::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(trendctl::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(trendctl::fs::io_error))]
    IoError { message: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(trendctl::input::cancelled))]
    Cancelled,
}

impl From<std::io::Error> for TrendctlError {
    fn from(err: std::io::Error) -> Self {
        TrendctlError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for TrendctlError {
    fn from(err: serde_yaml::Error) -> Self {
        TrendctlError::SettingsParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TrendctlError {
    fn from(err: serde_json::Error) -> Self {
        TrendctlError::IoError {
            message: format!("JSON output failed: {err}"),
        }
    }
}

impl From<inquire::InquireError> for TrendctlError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => TrendctlError::Cancelled,
            other => TrendctlError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TrendctlError>;
