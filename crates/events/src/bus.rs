//! In-process UI event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`UiEvent`]s. It is
//! designed to be shared via `Arc<EventBus>` across the shell.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// Event type names
// ---------------------------------------------------------------------------

/// A single field was validated on input or blur.
pub const EVENT_FIELD_VALIDATED: &str = "field.validated";

/// A form-level validation pass failed.
pub const EVENT_FORM_REJECTED: &str = "form.rejected";

/// A form-level validation pass succeeded.
pub const EVENT_FORM_ACCEPTED: &str = "form.accepted";

/// The transport finished delivering a submission.
pub const EVENT_SUBMISSION_COMPLETED: &str = "submission.completed";

/// A dashboard control action was applied.
pub const EVENT_ACTION_APPLIED: &str = "action.applied";

/// The mentor list was filtered by a search query.
pub const EVENT_SEARCH_PERFORMED: &str = "search.performed";

/// A connect request was sent from a match card.
pub const EVENT_CONNECT_REQUESTED: &str = "connect.requested";

/// A goal was added to the goal list.
pub const EVENT_GOAL_ADDED: &str = "goal.added";

/// A goal was marked complete.
pub const EVENT_GOAL_COMPLETED: &str = "goal.completed";

// ---------------------------------------------------------------------------
// UiEvent
// ---------------------------------------------------------------------------

/// A UI event raised somewhere in the shell.
///
/// Constructed via [`UiEvent::new`] and enriched with the builder methods
/// [`with_form`](UiEvent::with_form), [`with_field`](UiEvent::with_field),
/// and [`with_payload`](UiEvent::with_payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiEvent {
    /// Dot-separated event name, e.g. `"form.rejected"`.
    pub event_type: String,

    /// Optional form name the event belongs to.
    pub form: Option<String>,

    /// Optional field id the event belongs to.
    pub field: Option<String>,

    /// Free-form JSON payload carrying event-specific data.
    pub payload: serde_json::Value,

    /// When the event was raised (UTC).
    pub timestamp: DateTime<Utc>,
}

impl UiEvent {
    /// Create a new event with only the required `event_type`.
    ///
    /// All optional fields default to `None` / empty object.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            form: None,
            field: None,
            payload: serde_json::Value::Object(Default::default()),
            timestamp: Utc::now(),
        }
    }

    /// Attach the originating form.
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    /// Attach the originating field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the JSON payload for the event.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 256;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`UiEvent`].
pub struct EventBus {
    sender: broadcast::Sender<UiEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: UiEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<UiEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
