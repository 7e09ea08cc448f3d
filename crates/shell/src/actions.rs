//! Button-action simulations.
//!
//! Mirrors the dashboard's accept/reject/delete/block/request/join/complete
//! controls. Each action describes what happens to the clicked control, the
//! row that hosts it, and which toast it raises. Destructive or
//! irreversible actions are gated on an explicit confirmation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use mentorconnect_events::bus::{UiEvent, EVENT_ACTION_APPLIED};
use mentorconnect_events::NotificationLevel;

/// Simulated latency before a joined session reports success.
pub const JOIN_SESSION_DELAY_MS: u64 = 1500;

/// The clickable request/goal controls on the dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    Accept,
    Reject,
    Delete,
    Block,
    Request,
    JoinSession,
    MarkComplete,
}

/// What happens to the table row or list item hosting the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowEffect {
    Unchanged,
    /// Faded out with a rejected marker appended.
    Dimmed,
    /// Slid out and removed from the page.
    Removed,
}

/// The control and page updates an applied action produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    /// New label for the clicked control; `None` keeps the current label.
    pub control_label: Option<String>,
    pub control_disabled: bool,
    pub row_effect: RowEffect,
    pub toast_level: NotificationLevel,
    pub toast_message: String,
}

impl ActionOutcome {
    /// The bus event announcing this outcome.
    ///
    /// The router turns it into the toast described by `toast_level` and
    /// `toast_message`.
    pub fn as_event(&self) -> UiEvent {
        UiEvent::new(EVENT_ACTION_APPLIED).with_payload(json!({
            "action": self.kind,
            "message": self.toast_message,
            "level": self.toast_level,
        }))
    }
}

impl ActionKind {
    /// Whether the shell asks "Are you sure?" before applying.
    pub fn requires_confirmation(&self) -> bool {
        matches!(
            self,
            ActionKind::Accept
                | ActionKind::Reject
                | ActionKind::Delete
                | ActionKind::Block
                | ActionKind::MarkComplete
        )
    }

    /// Apply the action.
    ///
    /// Returns `None` when a required confirmation was declined; the page
    /// is left untouched.
    pub fn apply(&self, confirmed: bool) -> Option<ActionOutcome> {
        if self.requires_confirmation() && !confirmed {
            return None;
        }

        let outcome = match self {
            ActionKind::Accept => ActionOutcome {
                kind: *self,
                control_label: Some("Accepted".to_string()),
                control_disabled: true,
                row_effect: RowEffect::Unchanged,
                toast_level: NotificationLevel::Success,
                toast_message: "Request accepted successfully!".to_string(),
            },
            ActionKind::Reject => ActionOutcome {
                kind: *self,
                control_label: None,
                control_disabled: true,
                row_effect: RowEffect::Dimmed,
                toast_level: NotificationLevel::Info,
                toast_message: "Request rejected".to_string(),
            },
            ActionKind::Delete => ActionOutcome {
                kind: *self,
                control_label: None,
                control_disabled: true,
                row_effect: RowEffect::Removed,
                toast_level: NotificationLevel::Success,
                toast_message: "Item deleted successfully".to_string(),
            },
            ActionKind::Block => ActionOutcome {
                kind: *self,
                control_label: Some("Blocked".to_string()),
                control_disabled: true,
                row_effect: RowEffect::Unchanged,
                toast_level: NotificationLevel::Success,
                toast_message: "User blocked successfully".to_string(),
            },
            ActionKind::Request => ActionOutcome {
                kind: *self,
                control_label: Some("Requested".to_string()),
                control_disabled: true,
                row_effect: RowEffect::Unchanged,
                toast_level: NotificationLevel::Success,
                toast_message: "Session request sent!".to_string(),
            },
            ActionKind::JoinSession => ActionOutcome {
                kind: *self,
                control_label: None,
                control_disabled: false,
                row_effect: RowEffect::Unchanged,
                toast_level: NotificationLevel::Info,
                toast_message: "Joining session...".to_string(),
            },
            ActionKind::MarkComplete => ActionOutcome {
                kind: *self,
                control_label: Some("Completed".to_string()),
                control_disabled: true,
                row_effect: RowEffect::Unchanged,
                toast_level: NotificationLevel::Success,
                toast_message: "Goal marked as complete!".to_string(),
            },
        };
        Some(outcome)
    }
}

/// Wait out the simulated join delay, then return the success toast.
///
/// The immediate "Joining session..." toast comes from
/// [`ActionKind::JoinSession`]'s outcome; this is the follow-up.
pub async fn join_session_result() -> (NotificationLevel, String) {
    tokio::time::sleep(Duration::from_millis(JOIN_SESSION_DELAY_MS)).await;
    (
        NotificationLevel::Success,
        "Session joined successfully!".to_string(),
    )
}
