//! UTF-8 text file helpers
//!
//! Thin wrappers over std::fs that fix the encoding to UTF-8 and expand a
//! leading tilde. I/O failures (permissions, missing paths, invalid data)
//! propagate to the caller unmodified.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::{PatchgridError, Result};

/// Read a file as UTF-8 text
///
/// # Arguments
/// * `path` - Path to read, `~/`-prefixed paths allowed
///
/// # Returns
/// The file contents as a string
pub fn read_text(path: &str) -> Result<String> {
    let path = expand_tilde(path);
    fs::read_to_string(&path).map_err(PatchgridError::Io)
}

/// Write a string to a file as UTF-8 text
///
/// Creates parent directories if they do not exist.
///
/// # Arguments
/// * `path` - Path to write, `~/`-prefixed paths allowed
/// * `contents` - Text to write
pub fn write_text(path: &str, contents: &str) -> Result<()> {
    let path = expand_tilde(path);

    if let Some(parent) = Path::new(&path).parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(PatchgridError::Io)?;
        }
    }

    fs::write(&path, contents).map_err(PatchgridError::Io)
}

/// Open a file for buffered text reading
pub fn open_text(path: &str) -> Result<BufReader<File>> {
    let path = expand_tilde(path);
    let file = File::open(&path).map_err(PatchgridError::Io)?;
    Ok(BufReader::new(file))
}

/// Open (or create) a file for buffered text writing, truncating it
pub fn create_text(path: &str) -> Result<BufWriter<File>> {
    let path = expand_tilde(path);
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(PatchgridError::Io)?;
    Ok(BufWriter::new(file))
}

/// Expand tilde (~) to the user's home directory
fn expand_tilde(path: &str) -> String {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped).to_string_lossy().to_string();
        }
    } else if path == "~" {
        if let Some(home) = home_dir() {
            return home.to_string_lossy().to_string();
        }
    }
    path.to_string()
}

/// Get the user's home directory
///
/// Uses the `home` crate on macOS, falls back to directories crate otherwise
fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home::home_dir()
    }
    #[cfg(not(target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
    }
}
