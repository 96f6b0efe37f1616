//! Application event types for the event bus system.
//!
//! Events follow a namespaced pattern and are emitted by the signal bridge
//! (and, later, by commands) to notify other parts of the system.

use serde::{Deserialize, Serialize};

/// Application events that flow through the event bus.
///
/// The signal bridge translates OS signals into these; the window handler
/// and the frontend forwarder consume them on the event loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AppEvent {
    /// The application was asked to shut down (SIGINT/SIGTERM or an
    /// explicit quit request).
    TerminateRequested,
    /// The main window should be brought back (SIGUSR2).
    RestoreRequested,
    /// SIGUSR1 arrived. No built-in handler; the hosting application
    /// decides what it means.
    UserSignal1,
}

impl AppEvent {
    /// Short human-readable description for logs.
    pub fn description(&self) -> &'static str {
        match self {
            Self::TerminateRequested => "terminate requested",
            Self::RestoreRequested => "window restore requested",
            Self::UserSignal1 => "user signal 1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_serialize_with_tag() {
        let json = serde_json::to_string(&AppEvent::TerminateRequested).unwrap();
        assert_eq!(json, r#"{"type":"terminate-requested"}"#);

        let json = serde_json::to_string(&AppEvent::UserSignal1).unwrap();
        assert_eq!(json, r#"{"type":"user-signal1"}"#);
    }
}
