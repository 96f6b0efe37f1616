//! Patchgrid - a JACK patchbay desktop app
//!
//! This library is the shared glue layer: platform and environment
//! resolution, string/codec helpers, native dialog wrappers, OS-signal
//! bridging and icon assignment, plus the Tauri entry point that wires it
//! all together.

mod app;
mod commands;
pub mod dialogs;
pub mod error;
pub mod events;
pub mod icons;
pub mod logging;
pub mod platform;
pub mod signals;
pub mod utils;

use app::{handle_run_event, handle_window_event, register_plugins};

/// Application version, shared with the frontend.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    logging::init();
    tracing::info!(version = VERSION, "Starting Patchgrid application");

    register_plugins(tauri::Builder::default())
        .setup(|app| {
            // Initialize state
            app::init_state(app)?;

            // Start event handlers and the signal bridge
            app::start_background_services(app);

            Ok(())
        })
        .on_window_event(handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // Dialogs
            commands::choose_directory,
            commands::confirm_dialog,
            // Environment
            commands::get_environment,
            commands::debug_enabled,
            // Icons
            commands::get_action_icons,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(handle_run_event);
}
