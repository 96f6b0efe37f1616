//! Window lifecycle handler.
//!
//! Applies terminate and restore requests from the event bus to the main
//! window. This is the only place signal-driven events touch the window,
//! and it always runs on the runtime, never in signal context.

use tauri::{AppHandle, Manager};
use tokio::sync::broadcast;

use crate::events::AppEvent;

/// The window operations the handler needs.
///
/// Modeled as a capability so the handling logic stays independent of the
/// toolkit: the production impl drives the Tauri main window, tests drive a
/// recorder. Every operation is best-effort; failures are absorbed by the
/// implementation.
pub trait WindowControl {
    fn hide(&self);
    fn close(&self);
    fn quit(&self);
    fn is_maximized(&self) -> bool;
    fn show_maximized(&self);
    fn show_normal(&self);
}

/// Shut the application down: hide the window, close it, quit the loop.
pub fn handle_terminate(window: &impl WindowControl) {
    window.hide();
    window.close();
    window.quit();
}

/// Bring the main window back, preserving its maximized state.
pub fn handle_restore(window: &impl WindowControl) {
    if window.is_maximized() {
        window.show_maximized();
    } else {
        window.show_normal();
    }
}

/// [`WindowControl`] over the Tauri main window.
pub struct MainWindow {
    app: AppHandle,
}

impl MainWindow {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn window(&self) -> Option<tauri::WebviewWindow> {
        let window = self.app.get_webview_window("main");
        if window.is_none() {
            tracing::warn!("main window not found");
        }
        window
    }
}

impl WindowControl for MainWindow {
    fn hide(&self) {
        if let Some(window) = self.window() {
            let _ = window.hide();
        }
    }

    fn close(&self) {
        if let Some(window) = self.window() {
            let _ = window.close();
        }
    }

    fn quit(&self) {
        self.app.exit(0);
    }

    fn is_maximized(&self) -> bool {
        self.window()
            .and_then(|window| window.is_maximized().ok())
            .unwrap_or(false)
    }

    fn show_maximized(&self) {
        if let Some(window) = self.window() {
            let _ = window.unminimize();
            let _ = window.maximize();
            let _ = window.show();
            let _ = window.set_focus();
        }
    }

    fn show_normal(&self) {
        if let Some(window) = self.window() {
            let _ = window.unminimize();
            let _ = window.show();
            let _ = window.set_focus();
        }
    }
}

/// Start the window lifecycle handler.
///
/// Listens to the event bus and applies terminate/restore requests to the
/// main window. UserSignal1 is deliberately left alone here; the frontend
/// forwarder makes it observable to the application.
pub fn start_handler(app_handle: AppHandle, mut receiver: broadcast::Receiver<AppEvent>) {
    tracing::debug!("Starting window lifecycle handler");

    tauri::async_runtime::spawn(async move {
        let window = MainWindow::new(app_handle);
        loop {
            match receiver.recv().await {
                Ok(AppEvent::TerminateRequested) => handle_terminate(&window),
                Ok(AppEvent::RestoreRequested) => handle_restore(&window),
                Ok(AppEvent::UserSignal1) => {
                    tracing::debug!("user signal 1 received, no default action");
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("window handler lagged {} events", n);
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, stopping window handler");
                    break;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWindow {
        calls: RefCell<Vec<&'static str>>,
        maximized: bool,
    }

    impl WindowControl for RecordingWindow {
        fn hide(&self) {
            self.calls.borrow_mut().push("hide");
        }
        fn close(&self) {
            self.calls.borrow_mut().push("close");
        }
        fn quit(&self) {
            self.calls.borrow_mut().push("quit");
        }
        fn is_maximized(&self) -> bool {
            self.maximized
        }
        fn show_maximized(&self) {
            self.calls.borrow_mut().push("show_maximized");
        }
        fn show_normal(&self) {
            self.calls.borrow_mut().push("show_normal");
        }
    }

    #[test]
    fn test_terminate_hides_closes_then_quits() {
        let window = RecordingWindow::default();
        handle_terminate(&window);
        assert_eq!(*window.calls.borrow(), vec!["hide", "close", "quit"]);
    }

    #[test]
    fn test_restore_maximized_window_stays_maximized() {
        let window = RecordingWindow {
            maximized: true,
            ..Default::default()
        };
        handle_restore(&window);
        assert_eq!(*window.calls.borrow(), vec!["show_maximized"]);
    }

    #[test]
    fn test_restore_plain_window_shows_normal() {
        let window = RecordingWindow::default();
        handle_restore(&window);
        assert_eq!(*window.calls.borrow(), vec!["show_normal"]);
    }
}
