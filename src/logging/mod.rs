//! Structured logging for Patchgrid
//!
//! This module sets up tracing-based logging with configurable levels and
//! outputs, and owns the process-wide debug mode toggled by the CLI flag.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Process-wide debug mode, set once at startup from the command line.
static DEBUG: AtomicBool = AtomicBool::new(false);

/// Returns true if any of `-d`, `-debug` or `--debug` appears in `args`.
///
/// This is the only flag the glue layer parses; everything else on the
/// command line belongs to the application proper.
pub fn debug_flag_present<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .any(|arg| matches!(arg.as_ref(), "-d" | "-debug" | "--debug"))
}

/// Enable or disable process-wide debug mode
pub fn set_debug(enabled: bool) {
    DEBUG.store(enabled, Ordering::Relaxed);
}

/// Whether debug mode was requested at startup
pub fn debug_enabled() -> bool {
    DEBUG.load(Ordering::Relaxed)
}

/// Initialize the logging system
///
/// This sets up tracing with:
/// - Environment-based filtering via RUST_LOG env var
/// - Default level of DEBUG when the debug flag was given, INFO otherwise
/// - Console output with timestamps and target information
///
/// # Example
/// ```ignore
/// use patchgrid_lib::logging;
/// logging::init();
/// tracing::info!("Application started");
/// ```
pub fn init() {
    let default_level = if debug_enabled() {
        "patchgrid=debug,debug"
    } else {
        "patchgrid=info,warn"
    };

    // Allow override via RUST_LOG environment variable
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Initialize logging for tests
///
/// Similar to `init()` but with a test-friendly configuration.
/// Uses try_init() to avoid panicking if called multiple times.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_does_not_panic() {
        init_test();
    }

    #[test]
    fn test_debug_flag_variants() {
        assert!(debug_flag_present(["-d"]));
        assert!(debug_flag_present(["-debug"]));
        assert!(debug_flag_present(["--debug"]));
        assert!(debug_flag_present(["patchgrid", "--debug", "other"]));
    }

    #[test]
    fn test_debug_flag_absent() {
        assert!(!debug_flag_present(["patchgrid"]));
        assert!(!debug_flag_present(["--verbose", "-x"]));
        assert!(!debug_flag_present(Vec::<String>::new()));
    }
}
