// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers borrow the pieces of [`App`](super::App) they need through an
//! [`UpdateContext`] and return the follow-up [`Task`].

use super::Message;
use crate::analysis::{AnalysisJob, AnalysisOutcome, AnalysisProgress};
use crate::application::port::NutritionAnalyzer;
use crate::config::{self, Config};
use crate::domain::session::{DragEvent, Session};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, extensions::IMAGE_EXTENSIONS};
use crate::ui::header;
use crate::ui::notifications::{self, Notification};
use crate::ui::results;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use iced::task::Handle;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Mutable borrows of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub session: &'a mut Session,
    pub analyzer: &'a Arc<dyn NutritionAnalyzer>,
    pub analysis_delay: Duration,
    pub max_file_size_bytes: u64,
    pub analysis_task: &'a mut Option<Handle>,
    pub progress: &'a mut Option<AnalysisProgress>,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Aborts the in-flight analysis task, if any.
    fn abort_analysis(&mut self) {
        if let Some(handle) = self.analysis_task.take() {
            handle.abort();
        }
        *self.progress = None;
    }

    fn persist_config(&mut self) {
        if let Err(err) = config::save(self.config) {
            tracing::warn!(error = %err, "failed to save config");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message, *ctx.theme_mode) {
        header::Event::LanguageChanged(locale) => {
            if ctx.i18n.set_locale(locale.clone()) {
                tracing::info!(locale = %locale, "language changed");
                ctx.config.general.language = Some(locale.to_string());
                ctx.persist_config();
            }
        }
        header::Event::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            ctx.persist_config();
        }
    }
    Task::none()
}

pub fn handle_upload_message(ctx: &mut UpdateContext<'_>, message: upload::Message) -> Task<Message> {
    match message {
        upload::Message::ChooseFile => handle_open_file_dialog(),
        upload::Message::Analyze => start_analysis(ctx),
        upload::Message::Reset => {
            reset(ctx);
            Task::none()
        }
        upload::Message::Cancel => {
            if let Some(ticket) = ctx.session.cancel_analysis() {
                tracing::info!(ticket = ticket.value(), "analysis cancelled");
                ctx.notifications
                    .push(Notification::info("notification-analysis-cancelled"));
            }
            ctx.abort_analysis();
            Task::none()
        }
    }
}

pub fn handle_results_message(ctx: &mut UpdateContext<'_>, message: results::Message) -> Task<Message> {
    match message {
        results::Message::NewAnalysis => {
            reset(ctx);
            Task::none()
        }
    }
}

fn reset(ctx: &mut UpdateContext<'_>) {
    if let Some(ticket) = ctx.session.reset() {
        tracing::debug!(ticket = ticket.value(), "pending analysis dropped by reset");
    }
    ctx.abort_analysis();
}

/// Starts an analysis of the selected image.
///
/// Does nothing when no image is selected or an analysis is already running.
pub fn start_analysis(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(ticket) = ctx.session.begin_analysis() else {
        return Task::none();
    };
    let Some(image) = ctx.session.selected_file().cloned() else {
        return Task::none();
    };

    tracing::info!(
        ticket = ticket.value(),
        file = image.file_name(),
        delay = ?ctx.analysis_delay,
        "analysis started"
    );

    let job = AnalysisJob::new(ticket, image, ctx.analysis_delay, Arc::clone(ctx.analyzer));
    *ctx.progress = Some(AnalysisProgress::new(Instant::now(), ctx.analysis_delay));

    let (task, handle) = Task::perform(job.run(), Message::AnalysisFinished).abortable();
    *ctx.analysis_task = Some(handle.abort_on_drop());
    task
}

pub fn handle_analysis_finished(ctx: &mut UpdateContext<'_>, outcome: AnalysisOutcome) -> Task<Message> {
    let ticket = outcome.ticket;
    let applied = match outcome.result {
        Ok(result) => {
            let applied = ctx.session.complete_analysis(ticket, result);
            if applied {
                ctx.notifications
                    .push(Notification::success("notification-analysis-complete"));
            }
            applied
        }
        Err(err) => {
            let applied = ctx.session.fail_analysis(ticket);
            if applied {
                tracing::warn!(ticket = ticket.value(), error = %err, "analysis failed");
                ctx.notifications
                    .push(Notification::from_error(&Error::from(err)));
            }
            applied
        }
    };

    if applied {
        *ctx.analysis_task = None;
        *ctx.progress = None;
    } else {
        tracing::debug!(ticket = ticket.value(), "ignoring stale analysis result");
    }
    Task::none()
}

/// Opens the system file dialog filtered to accepted image formats.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

pub fn handle_open_file_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    // None: user cancelled the dialog
    if let Some(path) = path {
        accept_path(ctx, path, false);
    }
    Task::none()
}

pub fn handle_drag(ctx: &mut UpdateContext<'_>, event: DragEvent) -> Task<Message> {
    ctx.session.handle_drag_event(event);
    Task::none()
}

pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    accept_path(ctx, path, true);
    Task::none()
}

/// Validates `path` and hands it to the session.
///
/// Rejected files leave the current selection untouched and raise a toast.
pub fn accept_path(ctx: &mut UpdateContext<'_>, path: PathBuf, dropped: bool) {
    match media::inspect(&path, ctx.max_file_size_bytes) {
        Ok(image) => {
            tracing::info!(file = image.file_name(), size = image.size_bytes(), "image selected");
            let cancelled = if dropped {
                ctx.session.handle_drop(image)
            } else {
                ctx.session.select_file(image)
            };
            if let Some(ticket) = cancelled {
                tracing::debug!(ticket = ticket.value(), "analysis superseded by new selection");
                ctx.abort_analysis();
            }
            ctx.notifications.clear_rejections();
        }
        Err(err) => {
            if dropped {
                ctx.session.handle_drag_event(DragEvent::Leave);
            }
            tracing::warn!(path = %path.display(), error = %err, "file rejected");
            ctx.notifications.push(Notification::from_error(&err));
        }
    }
}

pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: iced::window::Id) -> Task<Message> {
    ctx.abort_analysis();
    iced::window::close(id)
}
