//! Operator input errors

use super::TrendctlError;

/// Creates an invalid input error
pub fn invalid(message: impl Into<String>) -> TrendctlError {
    TrendctlError::InvalidInput {
        message: message.into(),
    }
}

/// Creates a duplicate platform id error
pub fn duplicate_platform(id: impl Into<String>) -> TrendctlError {
    TrendctlError::DuplicatePlatform { id: id.into() }
}
