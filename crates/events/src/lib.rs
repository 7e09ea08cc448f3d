//! MentorConnect UI event and notification infrastructure.
//!
//! Building blocks the shell uses for visual feedback:
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`UiEvent`] — the canonical UI event envelope.
//! - [`NotificationCenter`] — transient toast notifications with
//!   duration-based expiry.
//! - [`NotificationRouter`] — background task mapping UI events to toasts.
//! - [`RefreshTicker`] — periodic update-check notifications.

pub mod bus;
pub mod notification;
pub mod refresh;
pub mod router;

pub use bus::{EventBus, UiEvent};
pub use notification::{Notification, NotificationCenter, NotificationLevel};
pub use refresh::RefreshTicker;
pub use router::NotificationRouter;
