//! Settings file errors

use super::TrendctlError;

/// Creates a settings not found error
pub fn not_found(path: impl Into<String>) -> TrendctlError {
    TrendctlError::SettingsNotFound { path: path.into() }
}

/// Creates a settings parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> TrendctlError {
    TrendctlError::SettingsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
