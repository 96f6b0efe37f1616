//! Event bus system for decoupled communication between app components.
//!
//! The event bus is how asynchronous inputs (OS signals in particular) reach
//! the GUI safely: producers only enqueue a tagged event, and all window
//! manipulation happens in handler tasks on the runtime, never in the
//! producer's context.
//!
//! # Example
//!
//! ```rust,ignore
//! // In the signal bridge:
//! app_handle.emit_event(AppEvent::RestoreRequested);
//!
//! // The window handler will restore the main window on the event loop.
//! ```

pub mod handlers;
pub mod types;

pub use types::AppEvent;

use tauri::{AppHandle, Manager};
use tokio::sync::broadcast;

/// Capacity of the event channel.
/// Events beyond this will cause receivers to lag.
const CHANNEL_CAPACITY: usize = 64;

/// The central event bus for application-wide event distribution.
///
/// Uses a broadcast channel to allow multiple subscribers to receive
/// all events. Events are fire-and-forget - emitting never blocks.
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Emit an event to all subscribers.
    ///
    /// This is non-blocking and will not fail even if there are no
    /// subscribers, which makes it safe to call from any context.
    pub fn emit(&self, event: AppEvent) {
        tracing::trace!("Event emitted: {}", event.description());
        // Ignore send errors - it's fine if no one is listening
        let _ = self.sender.send(event);
    }

    /// Subscribe to events.
    ///
    /// Returns a receiver that will receive all events emitted after
    /// subscription. If the receiver falls behind by more than
    /// CHANNEL_CAPACITY events, it will receive a Lagged error with the
    /// number of skipped events.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Initialize and start all event handlers.
///
/// This should be called during app startup after the EventBus is registered
/// in app state. Each handler runs in its own async task.
pub fn start_event_handlers(app_handle: AppHandle) {
    let event_bus = match app_handle.try_state::<EventBus>() {
        Some(bus) => bus,
        None => {
            tracing::error!("EventBus not found in app state - cannot start handlers");
            return;
        }
    };

    tracing::info!("Starting event handlers...");

    // Window handler - applies terminate/restore requests to the main window
    handlers::window::start_handler(app_handle.clone(), event_bus.subscribe());

    // Frontend forwarder - forwards events to the Tauri event system for UI
    handlers::frontend::start_handler(app_handle.clone(), event_bus.subscribe());

    tracing::info!("Event handlers started");
}

/// Helper trait for easily emitting events from anywhere with access to
/// AppHandle.
pub trait EventEmitter {
    /// Emit an event through the event bus.
    fn emit_event(&self, event: AppEvent);
}

impl EventEmitter for AppHandle {
    fn emit_event(&self, event: AppEvent) {
        if let Some(event_bus) = self.try_state::<EventBus>() {
            event_bus.emit(event);
        } else {
            tracing::warn!(
                "EventBus not available, event dropped: {}",
                event.description()
            );
        }
    }
}
