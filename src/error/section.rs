//! Missing section and key errors

use super::TrendctlError;

/// Creates a section not found error
pub fn not_found(section: impl Into<String>, path: impl Into<String>) -> TrendctlError {
    TrendctlError::SectionNotFound {
        section: section.into(),
        path: path.into(),
    }
}

/// Creates a key not found error
pub fn key_not_found(key: impl Into<String>) -> TrendctlError {
    TrendctlError::KeyNotFound { key: key.into() }
}
