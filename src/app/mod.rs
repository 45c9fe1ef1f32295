// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the session state machine, the analyzer,
//! localization and persisted preferences, and translates messages into side
//! effects like config persistence or scheduled analysis runs.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::analysis::AnalysisProgress;
use crate::application::port::NutritionAnalyzer;
use crate::config::{self, Config, MAX_ANALYSIS_DELAY_MS};
use crate::domain::session::Session;
use crate::i18n::fluent::I18n;
use crate::infrastructure::FixedAnalyzer;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: Session,
    analyzer: Arc<dyn NutritionAnalyzer>,
    analysis_delay: Duration,
    max_file_size_bytes: u64,
    /// Handle of the in-flight analysis task; dropping it aborts the task.
    analysis_task: Option<iced::task::Handle>,
    progress: Option<AnalysisProgress>,
    /// Time of the latest tick, used to render progress.
    now: Instant,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", self.session.phase())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are handled by the app so a running analysis can be
/// aborted before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted config and CLI flags,
    /// using the built-in [`FixedAnalyzer`].
    fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_analyzer(flags, Arc::new(FixedAnalyzer))
    }

    /// Like [`App::new`] with a caller-supplied analyzer.
    pub fn with_analyzer(
        flags: Flags,
        analyzer: Arc<dyn NutritionAnalyzer>,
    ) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let analysis_delay = match flags.delay_ms {
            Some(ms) => Duration::from_millis(ms.min(MAX_ANALYSIS_DELAY_MS)),
            None => config.analysis.delay(),
        };

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            max_file_size_bytes: config.analysis.max_file_size_bytes(),
            config,
            session: Session::new(),
            analyzer,
            analysis_delay,
            analysis_task: None,
            progress: None,
            now: Instant::now(),
            notifications: notifications::Manager::new(),
        };

        tracing::debug!(
            analyzer = app.analyzer.name(),
            delay = ?app.analysis_delay,
            "application initialized"
        );

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        if let Some(path) = flags.file_path {
            let mut ctx = app.update_context();
            update::accept_path(&mut ctx, PathBuf::from(path), false);
        }

        (app, Task::none())
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            session: &mut self.session,
            analyzer: &self.analyzer,
            analysis_delay: self.analysis_delay,
            max_file_size_bytes: self.max_file_size_bytes,
            analysis_task: &mut self.analysis_task,
            progress: &mut self.progress,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.selected_file() {
            Some(image) => format!("{} - {app_name}", image.file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.session.is_analyzing(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.now = now;
                self.notifications.tick(now);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            message => {
                let mut ctx = self.update_context();
                match message {
                    Message::Header(msg) => update::handle_header_message(&mut ctx, msg),
                    Message::Upload(msg) => update::handle_upload_message(&mut ctx, msg),
                    Message::Results(msg) => update::handle_results_message(&mut ctx, msg),
                    Message::OpenFileDialogResult(path) => {
                        update::handle_open_file_dialog_result(&mut ctx, path)
                    }
                    Message::Drag(event) => update::handle_drag(&mut ctx, event),
                    Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
                    Message::AnalysisFinished(outcome) => {
                        update::handle_analysis_finished(&mut ctx, outcome)
                    }
                    Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
                    Message::Tick(_) | Message::Notification(_) => Task::none(),
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let progress = self
            .progress
            .map_or(0.0, |progress| progress.fraction_at(self.now));

        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            progress,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
        })
    }
}
