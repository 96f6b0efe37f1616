//! Native dialog wrappers
//!
//! Blocking wrappers over the dialog plugin: a choose-existing-directory
//! picker and a modal confirmation box. Both block the calling thread until
//! the user responds, so call them from command handlers, not from the main
//! thread.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

/// Severity icon for the confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    #[default]
    Info,
    Warning,
    Error,
}

/// The button set offered by the confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmButtons {
    #[default]
    YesNo,
    OkCancel,
    Ok,
}

/// Which button the user pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmButton {
    Yes,
    No,
    Ok,
    Cancel,
}

/// Options for [`confirm`]. Defaults to a Yes/No question with No as the
/// default button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmOptions {
    #[serde(default)]
    pub kind: DialogKind,
    pub title: String,
    pub text: String,
    /// Optional secondary text shown under the main text.
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub buttons: ConfirmButtons,
    /// Carried for callers; honored where the dialog backend supports a
    /// default button.
    #[serde(default = "default_button")]
    pub default_button: ConfirmButton,
}

fn default_button() -> ConfirmButton {
    ConfirmButton::No
}

/// Present a native choose-existing-directory dialog.
///
/// The dialog is seeded with `current`. On confirmation the chosen path is
/// handed to `sink` (typically a text-field setter) and returned; on
/// cancellation `sink` is not called and `None` is returned.
pub fn choose_directory(
    app: &AppHandle,
    current: &str,
    sink: impl FnOnce(&str),
) -> Option<PathBuf> {
    let mut builder = app.dialog().file().set_title("Set Path");
    if !current.is_empty() {
        builder = builder.set_directory(current);
    }

    let chosen = builder.blocking_pick_folder()?.into_path().ok()?;
    sink(&chosen.to_string_lossy());
    Some(chosen)
}

/// Show a blocking modal confirmation dialog and return the pressed button.
pub fn confirm(app: &AppHandle, options: ConfirmOptions) -> ConfirmButton {
    let ConfirmOptions {
        kind,
        title,
        text,
        detail,
        buttons,
        // The dialog backend exposes no default-button control.
        default_button: _,
    } = options;

    let pressed = app
        .dialog()
        .message(compose_text(&text, &detail))
        .title(title)
        .kind(match kind {
            DialogKind::Info => MessageDialogKind::Info,
            DialogKind::Warning => MessageDialogKind::Warning,
            DialogKind::Error => MessageDialogKind::Error,
        })
        .buttons(match buttons {
            ConfirmButtons::YesNo => MessageDialogButtons::YesNo,
            ConfirmButtons::OkCancel => MessageDialogButtons::OkCancel,
            ConfirmButtons::Ok => MessageDialogButtons::Ok,
        })
        .blocking_show();

    map_choice(buttons, pressed)
}

/// The dialog backend has a single message body; the secondary text goes
/// under the main text separated by a blank line.
fn compose_text(text: &str, detail: &str) -> String {
    if detail.is_empty() {
        text.to_string()
    } else {
        format!("{text}\n\n{detail}")
    }
}

fn map_choice(buttons: ConfirmButtons, pressed: bool) -> ConfirmButton {
    match (buttons, pressed) {
        (ConfirmButtons::YesNo, true) => ConfirmButton::Yes,
        (ConfirmButtons::YesNo, false) => ConfirmButton::No,
        (ConfirmButtons::OkCancel, true) => ConfirmButton::Ok,
        (ConfirmButtons::OkCancel, false) => ConfirmButton::Cancel,
        (ConfirmButtons::Ok, _) => ConfirmButton::Ok,
    }
}
