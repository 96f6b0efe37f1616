//! Shared utilities for Patchgrid
//!
//! Small stateless helpers used across the application: string folding and
//! decoding, "one or many" normalization, and UTF-8 text file access.

pub mod fs;
pub mod list;
pub mod strings;

pub use list::OneOrMany;
pub use strings::{ascii_fold, is_number, lossy_string};
