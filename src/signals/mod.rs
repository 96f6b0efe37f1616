//! OS signal bridge
//!
//! Translates POSIX signals into application events. The bridge is attached
//! to the running app exactly once at startup; after that, SIGINT/SIGTERM
//! request termination, SIGUSR2 requests a window restore, and SIGUSR1 is
//! surfaced to the application with no default action.
//!
//! Signal delivery happens on whatever context the runtime gives us, so the
//! listeners do the minimum possible: emit a tagged event onto the bus and
//! nothing else. Window work is done by the event handlers on the runtime.
//! Emission is best-effort and never raises.

use once_cell::sync::OnceCell;
use tauri::AppHandle;

use crate::events::{AppEvent, EventEmitter};

/// Single-registration bridge between OS signals and the event bus.
///
/// Holds the only process-wide window reference in the crate: an
/// [`AppHandle`] set exactly once by [`SignalBridge::attach`] and read-only
/// afterwards.
#[derive(Default)]
pub struct SignalBridge {
    app: OnceCell<AppHandle>,
}

impl SignalBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the bridge has been attached to a running application.
    pub fn is_registered(&self) -> bool {
        self.app.get().is_some()
    }

    /// Attach the bridge to the running application.
    ///
    /// Stores the app handle and, on platforms with POSIX signal delivery,
    /// installs listeners for SIGINT, SIGTERM, SIGUSR1 and SIGUSR2. On
    /// other platforms only the handle is stored and the bridge is inert.
    ///
    /// Returns true if this call performed the registration. A second
    /// attach is a warning and a no-op, never an error.
    pub fn attach(&self, app: &AppHandle) -> bool {
        if self.app.set(app.clone()).is_err() {
            tracing::warn!("signal bridge already attached, ignoring");
            return false;
        }

        #[cfg(unix)]
        install_signal_listeners(app.clone());

        #[cfg(not(unix))]
        tracing::debug!("OS signal delivery not available on this platform");

        true
    }
}

#[cfg(unix)]
fn install_signal_listeners(app: AppHandle) {
    use tokio::signal::unix::SignalKind;

    spawn_listener(app.clone(), SignalKind::interrupt(), AppEvent::TerminateRequested);
    spawn_listener(app.clone(), SignalKind::terminate(), AppEvent::TerminateRequested);
    spawn_listener(app.clone(), SignalKind::user_defined1(), AppEvent::UserSignal1);
    spawn_listener(app, SignalKind::user_defined2(), AppEvent::RestoreRequested);
}

/// Spawn a listener that emits `event` every time `kind` is delivered.
///
/// Failing to install a listener is logged and absorbed; the rest of the
/// bridge keeps working.
#[cfg(unix)]
fn spawn_listener(app: AppHandle, kind: tokio::signal::unix::SignalKind, event: AppEvent) {
    use tokio::signal::unix::signal;

    tauri::async_runtime::spawn(async move {
        let mut stream = match signal(kind) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!(signal = kind.as_raw_value(), "failed to install signal listener: {}", e);
                return;
            }
        };

        while stream.recv().await.is_some() {
            tracing::debug!(signal = kind.as_raw_value(), "OS signal received");
            app.emit_event(event.clone());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_starts_unregistered() {
        let bridge = SignalBridge::new();
        assert!(!bridge.is_registered());
    }
}
