//! Platform detection and process environment
//!
//! This module determines the host platform family once and resolves the
//! process environment (temp dir, home dir, executable search path) that the
//! rest of the glue layer relies on.
//!
//! Platform-specific behavior elsewhere in the crate branches on the single
//! [`PlatformFamily`] value rather than per-OS boolean flags, so the answer
//! cannot be internally inconsistent.

pub mod env;

pub use env::{process_environment, ProcessEnvironment};

use serde::{Deserialize, Serialize};

/// The OS family the process is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Linux,
    MacOs,
    Windows,
    Haiku,
    Other,
}

impl PlatformFamily {
    /// The family of the compile-time target.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "haiku") {
            Self::Haiku
        } else {
            Self::Other
        }
    }

    /// Classify a raw platform identifier string.
    ///
    /// Accepts the identifiers commonly reported by runtimes and build
    /// systems ("darwin", "linux-gnu", "win32", "haiku", ...). Anything
    /// unrecognized maps to [`PlatformFamily::Other`].
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier == "darwin" {
            Self::MacOs
        } else if identifier.contains("haiku") {
            Self::Haiku
        } else if identifier.contains("linux") {
            Self::Linux
        } else if matches!(identifier, "win32" | "win64" | "cygwin" | "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    /// True on Unix-like families where POSIX signal delivery is available.
    pub fn has_signals(self) -> bool {
        matches!(self, Self::Linux | Self::MacOs | Self::Haiku)
    }
}
