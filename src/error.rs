//! Custom error types for Patchgrid
//!
//! This module provides a unified error type that can be used throughout
//! the application and is compatible with Tauri's command error handling.

use thiserror::Error;

/// Main error type for Patchgrid operations
#[derive(Error, Debug)]
pub enum PatchgridError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors surfaced by the Tauri runtime
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dialog errors
    #[error("Dialog error: {0}")]
    Dialog(String),

    /// Platform-specific errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// General errors with a message
    #[error("{0}")]
    General(String),
}

impl PatchgridError {
    /// Create a dialog error
    pub fn dialog(msg: impl Into<String>) -> Self {
        Self::Dialog(msg.into())
    }

    /// Create a platform error
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }
}

/// Convert PatchgridError to String for Tauri command compatibility
impl From<PatchgridError> for String {
    fn from(err: PatchgridError) -> Self {
        err.to_string()
    }
}

/// Convert String errors to PatchgridError
impl From<String> for PatchgridError {
    fn from(s: String) -> Self {
        Self::General(s)
    }
}

/// Convert &str errors to PatchgridError
impl From<&str> for PatchgridError {
    fn from(s: &str) -> Self {
        Self::General(s.to_string())
    }
}

/// Result type alias using PatchgridError
pub type Result<T> = std::result::Result<T, PatchgridError>;

/// Serialize PatchgridError for Tauri
impl serde::Serialize for PatchgridError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error() {
        let err = PatchgridError::platform("no signal support");
        assert_eq!(err.to_string(), "Platform error: no signal support");
    }

    #[test]
    fn test_error_to_string_conversion() {
        let err = PatchgridError::dialog("parent window gone");
        let s: String = err.into();
        assert_eq!(s, "Dialog error: parent window gone");
    }

    #[test]
    fn test_string_to_error_conversion() {
        let err: PatchgridError = "something went wrong".into();
        assert_eq!(err.to_string(), "something went wrong");
    }
}
