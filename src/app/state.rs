//! Application state initialization
//!
//! This module handles initializing managed state (event bus, signal
//! bridge, icon resolver) and wiring the startup pieces together.

use tauri::{App, Manager};

use crate::events::EventBus;
use crate::icons::IconResolver;
use crate::platform;
use crate::signals::SignalBridge;

/// Initialize all managed state for the application
pub fn init_state(app: &App) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the process environment up front so startup logs carry it
    let env = platform::process_environment();
    tracing::debug!(
        platform = ?env.platform,
        temp = %env.temp_dir.display(),
        home = %env.home_dir.display(),
        "process environment resolved"
    );

    app.manage(EventBus::new());
    app.manage(IconResolver::from_environment(env));
    app.manage(SignalBridge::new());

    Ok(())
}

/// Start event handlers and attach the signal bridge.
///
/// Handlers subscribe to the bus first so nothing emitted by the bridge is
/// lost.
pub fn start_background_services(app: &App) {
    crate::events::start_event_handlers(app.handle().clone());

    if let Some(bridge) = app.try_state::<SignalBridge>() {
        bridge.attach(app.handle());
    } else {
        tracing::error!("SignalBridge not initialized");
    }
}
