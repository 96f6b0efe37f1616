//! Tauri commands exposing the glue layer to the frontend panels.

use std::collections::HashMap;

use tauri::{AppHandle, Emitter, State};

use crate::dialogs::{self, ConfirmButton, ConfirmOptions};
use crate::icons::actions::{apply_icons, IconScope, IconTarget};
use crate::icons::{IconResolver, IconSource};
use crate::platform::{self, ProcessEnvironment};

/// Event carrying the path chosen in the directory picker, so the
/// requesting text field can update itself.
pub const DIRECTORY_CHOSEN_EVENT: &str = "directory-chosen";

/// Show the directory picker seeded with `current`.
///
/// On confirmation the chosen path is pushed to the frontend via the
/// "directory-chosen" event and returned; on cancellation nothing is
/// emitted and `None` is returned.
#[tauri::command]
pub async fn choose_directory(app: AppHandle, current: String) -> Option<String> {
    let emitter = app.clone();
    dialogs::choose_directory(&app, &current, |path| {
        if let Err(e) = emitter.emit(DIRECTORY_CHOSEN_EVENT, path) {
            tracing::warn!("failed to deliver chosen directory: {}", e);
        }
    })
    .map(|path| path.to_string_lossy().to_string())
}

/// Show a modal confirmation dialog and return the pressed button.
#[tauri::command]
pub async fn confirm_dialog(app: AppHandle, options: ConfirmOptions) -> ConfirmButton {
    dialogs::confirm(&app, options)
}

/// The process environment resolved at startup.
#[tauri::command]
pub fn get_environment() -> ProcessEnvironment {
    platform::process_environment().clone()
}

/// Whether the process was started with the debug flag.
#[tauri::command]
pub fn debug_enabled() -> bool {
    crate::logging::debug_enabled()
}

/// Resolve the action icons for the requested feature areas.
///
/// Returns member name to icon source, ready for the panels to bind to
/// their toolbar and menu actions.
#[tauri::command]
pub fn get_action_icons(
    resolver: State<'_, IconResolver>,
    scopes: Vec<IconScope>,
) -> HashMap<String, IconSource> {
    #[derive(Default)]
    struct Collector(HashMap<String, IconSource>);

    impl IconTarget for Collector {
        fn set_action_icon(&mut self, member: &str, icon: &IconSource) {
            self.0.insert(member.to_string(), icon.clone());
        }
    }

    let mut collector = Collector::default();
    apply_icons(&mut collector, &scopes, &resolver);
    collector.0
}
