// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::analysis::AnalysisOutcome;
use crate::domain::session::DragEvent;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::results;
use crate::ui::upload;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Upload(upload::Message),
    Results(results::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving the progress bar and toast expiry.
    Tick(Instant),
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file is hovering over, or has left, the window.
    Drag(DragEvent),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The scheduled analysis finished.
    AnalysisFinished(AnalysisOutcome),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to preselect on startup.
    pub file_path: Option<String>,
    /// Optional analysis delay override, in milliseconds.
    /// Takes precedence over `[analysis] delay_ms` in settings.toml.
    pub delay_ms: Option<u64>,
}
