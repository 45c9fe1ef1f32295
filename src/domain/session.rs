// SPDX-License-Identifier: MPL-2.0
//! Per-window analysis session.
//!
//! The session is a small finite-state machine:
//!
//! ```text
//! Empty ──select──▶ FileSelected ──begin──▶ Analyzing ──complete──▶ ResultsShown
//!   ▲                    ▲  ▲                  │  │                      │
//!   └────── reset ───────┼──┼──────────────────┘  └─ fail / cancel ─┐    │
//!                        │  └───────────────────────────────────────┘    │
//!                        └──────────────── select ───────────────────────┘
//! ```
//!
//! Drag hovering is tracked separately and overlays any phase. Each call to
//! [`Session::begin_analysis`] hands out a fresh [`AnalysisTicket`]; a
//! completion is applied only while that ticket is still the pending one,
//! so a late timer can never resurrect results for a cleared or replaced
//! selection.

use super::intake::SelectedImage;
use super::nutrition::AnalysisResult;

/// Identifier of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisTicket(u64);

impl AnalysisTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Kind of drag gesture reported by the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Over,
    Leave,
}

/// Where the session currently is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    FileSelected {
        image: SelectedImage,
    },
    Analyzing {
        image: SelectedImage,
        ticket: AnalysisTicket,
    },
    ResultsShown {
        image: SelectedImage,
        result: AnalysisResult,
    },
}

impl Phase {
    /// Returns the image carried by this phase, if any.
    #[must_use]
    pub fn image(&self) -> Option<&SelectedImage> {
        match self {
            Phase::Empty => None,
            Phase::FileSelected { image }
            | Phase::Analyzing { image, .. }
            | Phase::ResultsShown { image, .. } => Some(image),
        }
    }

    fn into_image(self) -> Option<SelectedImage> {
        match self {
            Phase::Empty => None,
            Phase::FileSelected { image }
            | Phase::Analyzing { image, .. }
            | Phase::ResultsShown { image, .. } => Some(image),
        }
    }
}

/// Mutable state of one view instance.
#[derive(Debug, Clone, Default)]
pub struct Session {
    phase: Phase,
    drag_active: bool,
    issued_tickets: u64,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn selected_file(&self) -> Option<&SelectedImage> {
        self.phase.image()
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        matches!(self.phase, Phase::Analyzing { .. })
    }

    #[must_use]
    pub fn show_results(&self) -> bool {
        matches!(self.phase, Phase::ResultsShown { .. })
    }

    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Returns the completed analysis, if results are shown.
    #[must_use]
    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::ResultsShown { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Returns the ticket of the running analysis, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<AnalysisTicket> {
        match &self.phase {
            Phase::Analyzing { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Replaces the selection with `image`.
    ///
    /// Any running analysis is abandoned and shown results are dropped. The
    /// abandoned ticket is returned so the caller can abort its task.
    pub fn select_file(&mut self, image: SelectedImage) -> Option<AnalysisTicket> {
        let cancelled = self.pending_ticket();
        self.phase = Phase::FileSelected { image };
        cancelled
    }

    /// Tracks the hover state of a drag gesture over the drop target.
    pub fn handle_drag_event(&mut self, event: DragEvent) {
        self.drag_active = matches!(event, DragEvent::Enter | DragEvent::Over);
    }

    /// Selects a dropped image and ends the drag gesture in one step.
    pub fn handle_drop(&mut self, image: SelectedImage) -> Option<AnalysisTicket> {
        self.drag_active = false;
        self.select_file(image)
    }

    /// Starts analysing the selected image.
    ///
    /// Returns `None` without touching the state when nothing is selected or
    /// an analysis is already running. Starting from shown results re-runs
    /// the analysis for the same image.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.is_analyzing() {
            return None;
        }
        let image = std::mem::take(&mut self.phase).into_image()?;
        self.issued_tickets += 1;
        let ticket = AnalysisTicket(self.issued_tickets);
        self.phase = Phase::Analyzing { image, ticket };
        Some(ticket)
    }

    /// Shows `result` if `ticket` belongs to the running analysis.
    ///
    /// Returns `false` and leaves the session untouched for stale tickets.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket, result: AnalysisResult) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        if let Some(image) = std::mem::take(&mut self.phase).into_image() {
            self.phase = Phase::ResultsShown { image, result };
        }
        true
    }

    /// Returns to the selected image after a failed analysis.
    ///
    /// Returns `false` and leaves the session untouched for stale tickets.
    pub fn fail_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        if self.pending_ticket() != Some(ticket) {
            return false;
        }
        self.back_to_selection();
        true
    }

    /// Stops the running analysis, keeping the selected image.
    pub fn cancel_analysis(&mut self) -> Option<AnalysisTicket> {
        let cancelled = self.pending_ticket()?;
        self.back_to_selection();
        Some(cancelled)
    }

    /// Clears the selection and any results. Drag state is kept.
    pub fn reset(&mut self) -> Option<AnalysisTicket> {
        let cancelled = self.pending_ticket();
        self.phase = Phase::Empty;
        cancelled
    }

    fn back_to_selection(&mut self) {
        self.phase = match std::mem::take(&mut self.phase).into_image() {
            Some(image) => Phase::FileSelected { image },
            None => Phase::Empty,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::ImageKind;
    use crate::domain::nutrition::{ConfidencePercent, Macros};
    use proptest::prelude::*;

    fn image(name: &str) -> SelectedImage {
        SelectedImage::new(format!("/photos/{name}"), 1024, ImageKind::Jpeg)
    }

    fn result() -> AnalysisResult {
        AnalysisResult {
            dish: "dish".into(),
            portion_g: 100,
            calories_kcal: 100,
            macros: Macros::default(),
            confidence: ConfidencePercent::new(50),
            items: Vec::new(),
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.phase(), &Phase::Empty);
        assert!(session.selected_file().is_none());
        assert!(!session.is_analyzing());
        assert!(!session.show_results());
        assert!(!session.drag_active());
    }

    #[test]
    fn select_file_only_sets_selection() {
        let mut session = Session::new();
        session.handle_drag_event(DragEvent::Enter);
        assert!(session.select_file(image("a.jpg")).is_none());

        assert_eq!(session.selected_file(), Some(&image("a.jpg")));
        assert!(session.drag_active());
        assert!(!session.is_analyzing());
        assert!(!session.show_results());
    }

    #[test]
    fn select_file_replaces_prior_selection() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        session.select_file(image("b.png"));
        assert_eq!(session.selected_file().map(SelectedImage::file_name), Some("b.png"));
    }

    #[test]
    fn begin_analysis_without_file_is_noop() {
        let mut session = Session::new();
        session.handle_drag_event(DragEvent::Over);
        let before = session.clone();

        assert!(session.begin_analysis().is_none());
        assert_eq!(session.phase(), before.phase());
        assert_eq!(session.drag_active(), before.drag_active());
    }

    #[test]
    fn begin_analysis_while_analyzing_is_noop() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let first = session.begin_analysis().expect("analysis should start");

        assert!(session.begin_analysis().is_none());
        assert_eq!(session.pending_ticket(), Some(first));
    }

    #[test]
    fn analysis_flow_reaches_results() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");

        assert!(session.is_analyzing());
        assert!(!session.show_results());

        assert!(session.complete_analysis(ticket, result()));
        assert!(!session.is_analyzing());
        assert!(session.show_results());
        assert_eq!(session.result(), Some(&result()));
        assert_eq!(session.selected_file().map(SelectedImage::file_name), Some("a.jpg"));
    }

    #[test]
    fn reset_clears_everything_but_drag() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");
        session.handle_drag_event(DragEvent::Enter);

        assert_eq!(session.reset(), Some(ticket));
        assert!(session.selected_file().is_none());
        assert!(!session.is_analyzing());
        assert!(!session.show_results());
        assert!(session.drag_active());
    }

    #[test]
    fn completion_after_reset_is_discarded() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");
        session.reset();

        assert!(!session.complete_analysis(ticket, result()));
        assert_eq!(session.phase(), &Phase::Empty);
    }

    #[test]
    fn completion_after_reselection_is_discarded() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");

        assert_eq!(session.select_file(image("b.jpg")), Some(ticket));
        assert!(!session.complete_analysis(ticket, result()));
        assert_eq!(
            session.phase(),
            &Phase::FileSelected {
                image: image("b.jpg")
            }
        );
    }

    #[test]
    fn completion_of_earlier_run_is_discarded() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let first = session.begin_analysis().expect("analysis should start");
        session.cancel_analysis();
        let second = session.begin_analysis().expect("analysis should restart");

        assert_ne!(first, second);
        assert!(!session.complete_analysis(first, result()));
        assert!(session.is_analyzing());
        assert!(session.complete_analysis(second, result()));
    }

    #[test]
    fn failure_returns_to_selection() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");

        assert!(session.fail_analysis(ticket));
        assert_eq!(
            session.phase(),
            &Phase::FileSelected {
                image: image("a.jpg")
            }
        );
        assert!(!session.fail_analysis(ticket));
    }

    #[test]
    fn cancel_without_analysis_is_noop() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        assert!(session.cancel_analysis().is_none());
        assert!(session.selected_file().is_some());
    }

    #[test]
    fn selecting_from_results_drops_them() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");
        session.complete_analysis(ticket, result());

        session.select_file(image("b.jpg"));
        assert!(!session.show_results());
        assert!(session.result().is_none());
    }

    #[test]
    fn rerun_from_results() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        let ticket = session.begin_analysis().expect("analysis should start");
        session.complete_analysis(ticket, result());

        assert!(session.begin_analysis().is_some());
        assert!(session.is_analyzing());
        assert!(!session.show_results());
    }

    #[test]
    fn drag_enter_then_leave() {
        let mut session = Session::new();
        session.handle_drag_event(DragEvent::Enter);
        assert!(session.drag_active());
        session.handle_drag_event(DragEvent::Over);
        assert!(session.drag_active());
        session.handle_drag_event(DragEvent::Leave);
        assert!(!session.drag_active());
    }

    #[test]
    fn drag_does_not_touch_phase() {
        let mut session = Session::new();
        session.select_file(image("a.jpg"));
        session.handle_drag_event(DragEvent::Enter);
        session.handle_drag_event(DragEvent::Leave);
        assert_eq!(
            session.phase(),
            &Phase::FileSelected {
                image: image("a.jpg")
            }
        );
    }

    #[test]
    fn drop_selects_and_clears_drag() {
        let mut session = Session::new();
        session.handle_drag_event(DragEvent::Enter);
        session.handle_drop(image("dropped.png"));

        assert_eq!(
            session.selected_file().map(SelectedImage::file_name),
            Some("dropped.png")
        );
        assert!(!session.drag_active());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Select(u8),
        Drop(u8),
        Drag(u8),
        Begin,
        Complete(u64),
        CompletePending,
        Fail(u64),
        Cancel,
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Select),
            any::<u8>().prop_map(Op::Drop),
            (0u8..3).prop_map(Op::Drag),
            Just(Op::Begin),
            (0u64..8).prop_map(Op::Complete),
            Just(Op::CompletePending),
            (0u64..8).prop_map(Op::Fail),
            Just(Op::Cancel),
            Just(Op::Reset),
        ]
    }

    fn apply(session: &mut Session, op: &Op) {
        match op {
            Op::Select(n) => {
                session.select_file(image(&format!("{n}.jpg")));
            }
            Op::Drop(n) => {
                session.handle_drop(image(&format!("{n}.png")));
            }
            Op::Drag(kind) => session.handle_drag_event(match kind {
                0 => DragEvent::Enter,
                1 => DragEvent::Over,
                _ => DragEvent::Leave,
            }),
            Op::Begin => {
                session.begin_analysis();
            }
            Op::Complete(raw) => {
                session.complete_analysis(AnalysisTicket(*raw), result());
            }
            Op::CompletePending => {
                if let Some(ticket) = session.pending_ticket() {
                    session.complete_analysis(ticket, result());
                }
            }
            Op::Fail(raw) => {
                session.fail_analysis(AnalysisTicket(*raw));
            }
            Op::Cancel => {
                session.cancel_analysis();
            }
            Op::Reset => {
                session.reset();
            }
        }
    }

    proptest! {
        /// Property: analyzing and showing results never overlap.
        #[test]
        fn analyzing_and_results_are_exclusive(ops in prop::collection::vec(op(), 0..64)) {
            let mut session = Session::new();
            for op in &ops {
                apply(&mut session, op);
                prop_assert!(!(session.is_analyzing() && session.show_results()));
                if session.show_results() || session.is_analyzing() {
                    prop_assert!(session.selected_file().is_some());
                }
            }
        }

        /// Property: reset always yields an empty phase.
        #[test]
        fn reset_always_empties(ops in prop::collection::vec(op(), 0..32)) {
            let mut session = Session::new();
            for op in &ops {
                apply(&mut session, op);
            }
            let drag = session.drag_active();
            session.reset();
            prop_assert_eq!(session.phase(), &Phase::Empty);
            prop_assert_eq!(session.drag_active(), drag);
        }
    }
}
