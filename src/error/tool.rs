//! External tool errors

use super::TrendctlError;

/// Creates an error for a tool binary that is not installed
pub fn missing(tool: impl Into<String>) -> TrendctlError {
    TrendctlError::ExternalToolMissing { tool: tool.into() }
}

/// Creates an error for a tool that could not be started
pub fn launch_failed(tool: impl Into<String>, reason: impl Into<String>) -> TrendctlError {
    TrendctlError::ExternalToolFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}
