// SPDX-License-Identifier: MPL-2.0
//! Scheduled analysis runs.
//!
//! An [`AnalysisJob`] waits for a fixed delay and then asks the injected
//! [`NutritionAnalyzer`] for a result. The application runs the job as an
//! abortable task; the ticket carried through to [`AnalysisOutcome`] lets
//! the session drop completions that raced an abort.

use crate::application::port::analyzer::{AnalysisError, NutritionAnalyzer};
use crate::config::DEFAULT_ANALYSIS_DELAY_MS;
use crate::domain::intake::SelectedImage;
use crate::domain::nutrition::AnalysisResult;
use crate::domain::session::AnalysisTicket;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Delay before an analysis completes when nothing overrides it.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(DEFAULT_ANALYSIS_DELAY_MS);

/// Result of one finished job.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub ticket: AnalysisTicket,
    pub result: Result<AnalysisResult, AnalysisError>,
}

/// One pending analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisJob {
    ticket: AnalysisTicket,
    image: SelectedImage,
    delay: Duration,
    analyzer: Arc<dyn NutritionAnalyzer>,
}

impl AnalysisJob {
    #[must_use]
    pub fn new(
        ticket: AnalysisTicket,
        image: SelectedImage,
        delay: Duration,
        analyzer: Arc<dyn NutritionAnalyzer>,
    ) -> Self {
        Self {
            ticket,
            image,
            delay,
            analyzer,
        }
    }

    /// Waits for the configured delay, then runs the analyzer.
    pub async fn run(self) -> AnalysisOutcome {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(
            ticket = self.ticket.value(),
            analyzer = self.analyzer.name(),
            file = self.image.file_name(),
            "running analyzer"
        );
        let result = self.analyzer.analyze(&self.image);
        AnalysisOutcome {
            ticket: self.ticket,
            result,
        }
    }
}

/// Wall-clock progress of a running analysis, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisProgress {
    started_at: Instant,
    delay: Duration,
}

impl AnalysisProgress {
    #[must_use]
    pub fn new(started_at: Instant, delay: Duration) -> Self {
        Self { started_at, delay }
    }

    /// Fraction of the delay elapsed at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction_at(&self, now: Instant) -> f32 {
        if self.delay.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
    }
}
