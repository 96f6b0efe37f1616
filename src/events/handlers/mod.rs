//! Event handlers consuming the application event bus.

pub mod frontend;
pub mod window;
