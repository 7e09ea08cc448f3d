//! Event-to-notification routing.
//!
//! [`NotificationRouter`] subscribes to the UI event bus and turns the
//! events that warrant user feedback into toasts on a shared
//! [`NotificationCenter`]. Events without a toast mapping (e.g. per-field
//! validation) are ignored — the field feedback renders inline instead.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::bus::{
    UiEvent, EVENT_ACTION_APPLIED, EVENT_CONNECT_REQUESTED, EVENT_FORM_ACCEPTED,
    EVENT_FORM_REJECTED, EVENT_GOAL_ADDED, EVENT_GOAL_COMPLETED, EVENT_SEARCH_PERFORMED,
    EVENT_SUBMISSION_COMPLETED,
};
use crate::notification::{
    NotificationCenter, NotificationLevel, DEFAULT_DURATION_MS, SEARCH_FEEDBACK_DURATION_MS,
};

/// Duration for the redirecting toast shown after a completed submission.
const REDIRECT_TOAST_DURATION_MS: i64 = 2000;

/// Routes UI events to toast notifications.
pub struct NotificationRouter {
    center: Arc<Mutex<NotificationCenter>>,
}

impl NotificationRouter {
    /// Create a router posting into the given center.
    pub fn new(center: Arc<Mutex<NotificationCenter>>) -> Self {
        Self { center }
    }

    /// Run the routing loop.
    ///
    /// Subscribes to the event bus via `receiver` and processes each event.
    /// The loop exits when the channel is closed (i.e. every
    /// [`EventBus`](crate::bus::EventBus) handle is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<UiEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.route_event(&event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Map one event to a toast, if its type calls for one.
    fn route_event(&self, event: &UiEvent) {
        let Some((level, message, duration_ms)) = toast_for(event) else {
            return;
        };
        match self.center.lock() {
            Ok(mut center) => {
                center.post_with_duration(level, message, duration_ms, event.timestamp);
            }
            Err(_) => tracing::error!("Notification center lock poisoned, toast dropped"),
        }
    }
}

/// The toast an event produces: level, message, display duration.
///
/// Returns `None` for event types that render inline rather than as toasts,
/// and for unknown event types.
fn toast_for(event: &UiEvent) -> Option<(NotificationLevel, String, i64)> {
    match event.event_type.as_str() {
        EVENT_FORM_REJECTED => Some((
            NotificationLevel::Error,
            "Please correct the errors in the form before submitting".to_string(),
            DEFAULT_DURATION_MS,
        )),
        EVENT_FORM_ACCEPTED => Some((
            NotificationLevel::Success,
            "All fields are valid! Proceeding with registration...".to_string(),
            DEFAULT_DURATION_MS,
        )),
        EVENT_SUBMISSION_COMPLETED => Some((
            NotificationLevel::Success,
            "Registration successful! Redirecting...".to_string(),
            REDIRECT_TOAST_DURATION_MS,
        )),
        EVENT_ACTION_APPLIED => {
            let message = event.payload.get("message")?.as_str()?.to_string();
            let level = event
                .payload
                .get("level")
                .and_then(|value| serde_json::from_value(value.clone()).ok())
                .unwrap_or(NotificationLevel::Info);
            Some((level, message, DEFAULT_DURATION_MS))
        }
        EVENT_SEARCH_PERFORMED => {
            let query = event.payload.get("query")?.as_str()?;
            if query.is_empty() {
                return None;
            }
            Some((
                NotificationLevel::Info,
                format!("Searching for: {query}"),
                SEARCH_FEEDBACK_DURATION_MS,
            ))
        }
        EVENT_CONNECT_REQUESTED => {
            let mentor = event.payload.get("mentor")?.as_str()?;
            Some((
                NotificationLevel::Success,
                format!("Connection request sent to {mentor}!"),
                DEFAULT_DURATION_MS,
            ))
        }
        EVENT_GOAL_ADDED => Some((
            NotificationLevel::Success,
            "New goal added!".to_string(),
            DEFAULT_DURATION_MS,
        )),
        EVENT_GOAL_COMPLETED => Some((
            NotificationLevel::Success,
            "Goal marked as complete!".to_string(),
            DEFAULT_DURATION_MS,
        )),
        // Unknown event types (and inline-only ones) produce no toast.
        _ => None,
    }
}
