// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events are mapped onto session messages here. Dropped
//! files never reach any other handler, so the platform has no default
//! drop action left to run.

use super::Message;
use crate::domain::session::DragEvent;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Refresh interval for the progress bar and toast expiry.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Maps a native event to an application message.
///
/// Windowing backends report one hover event per file when a drag enters
/// and nothing while it moves, so [`DragEvent::Over`] is never produced here.
fn map_event(event: event::Event, window_id: window::Id) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::FileHovered(_)) => {
            Some(Message::Drag(DragEvent::Enter))
        }
        event::Event::Window(window::Event::FilesHoveredLeft) => {
            Some(Message::Drag(DragEvent::Leave))
        }
        event::Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| map_event(event, window_id))
}

/// Ticks only while something on screen depends on elapsed time.
pub fn create_tick_subscription(is_analyzing: bool, has_notifications: bool) -> Subscription<Message> {
    if is_analyzing || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn window_event(event: window::Event) -> Option<Message> {
        map_event(event::Event::Window(event), window::Id::unique())
    }

    #[test]
    fn hover_maps_to_drag_enter() {
        let message = window_event(window::Event::FileHovered(PathBuf::from("a.jpg")));
        assert!(matches!(message, Some(Message::Drag(DragEvent::Enter))));
    }

    #[test]
    fn hover_left_maps_to_drag_leave() {
        let message = window_event(window::Event::FilesHoveredLeft);
        assert!(matches!(message, Some(Message::Drag(DragEvent::Leave))));
    }

    #[test]
    fn drop_carries_path() {
        let message = window_event(window::Event::FileDropped(PathBuf::from("meal.png")));
        match message {
            Some(Message::FileDropped(path)) => assert_eq!(path, PathBuf::from("meal.png")),
            other => panic!("expected FileDropped, got {other:?}"),
        }
    }

    #[test]
    fn unrelated_events_are_ignored() {
        assert!(window_event(window::Event::Focused).is_none());
    }
}
