//! Field validation verdict type.

use serde::{Deserialize, Serialize};

/// The outcome of validating a single field's value.
///
/// A verdict is advisory: `message` is human-readable text for display next
/// to the field, not a machine-actionable error code. Passing verdicts also
/// carry a message (e.g. the password strength hint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    /// Build a passing verdict with an informational message.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            valid: true,
            message: message.into(),
        }
    }

    /// Build a failing verdict with an error message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}
