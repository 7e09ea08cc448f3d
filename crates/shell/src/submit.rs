//! Simulated submission flow.
//!
//! On an all-valid form the shell disables the submit control, swaps in a
//! processing label, hands the payload to the transport, and resolves the
//! destination page. The transport is a trait so the timer-backed
//! simulation can later be replaced by a real submission path without
//! touching validation.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use mentorconnect_events::bus::{
    EventBus, UiEvent, EVENT_FORM_ACCEPTED, EVENT_FORM_REJECTED, EVENT_SUBMISSION_COMPLETED,
};

use crate::error::ShellResult;
use crate::form::{FormReport, FormValidator};
use crate::navigation::landing_page_for_role;

/// Default simulated latency for registration submissions.
pub const REGISTRATION_DELAY_MS: u64 = 1500;

/// Default simulated latency for login and goal submissions.
pub const LOGIN_DELAY_MS: u64 = 1000;

/// Submit control state while a submission is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    /// The processing state shown while the transport runs, e.g.
    /// "Registering...".
    pub fn processing(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}

/// Where a submission delivers its payload.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    /// Deliver a serialized form payload.
    async fn submit(&self, form: &str, payload: serde_json::Value) -> ShellResult<()>;
}

/// Blanket impl: `Arc<T>` delivers by delegating to the inner transport, so a
/// shared transport can be used wherever a `SubmitTransport` is expected.
#[async_trait]
impl<T: SubmitTransport + ?Sized> SubmitTransport for Arc<T> {
    async fn submit(&self, form: &str, payload: serde_json::Value) -> ShellResult<()> {
        (**self).submit(form, payload).await
    }
}

/// Timer-backed stand-in for a real submission path.
///
/// Sleeps for the configured delay, then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The registration page's 1.5-second simulation.
    pub fn registration() -> Self {
        Self::new(Duration::from_millis(REGISTRATION_DELAY_MS))
    }

    /// The login and goals pages' 1-second simulation.
    pub fn login() -> Self {
        Self::new(Duration::from_millis(LOGIN_DELAY_MS))
    }
}

#[async_trait]
impl SubmitTransport for SimulatedTransport {
    async fn submit(&self, form: &str, _payload: serde_json::Value) -> ShellResult<()> {
        tokio::time::sleep(self.delay).await;
        tracing::debug!(
            form,
            delay_ms = self.delay.as_millis() as u64,
            "Simulated submission completed"
        );
        Ok(())
    }
}

/// Result of driving one submit click end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Validation failed; the report names the first field to focus.
    Rejected { report: FormReport },
    /// The transport accepted the payload; navigate to `destination`.
    Accepted {
        destination: String,
        button: SubmitButton,
    },
}

/// Drives validation, the processing state, the transport, and navigation
/// for one form.
pub struct SubmissionFlow<T: SubmitTransport> {
    validator: FormValidator,
    transport: T,
    bus: Arc<EventBus>,
    processing_label: String,
}

impl<T: SubmitTransport> SubmissionFlow<T> {
    pub fn new(
        validator: FormValidator,
        transport: T,
        bus: Arc<EventBus>,
        processing_label: impl Into<String>,
    ) -> Self {
        Self {
            validator,
            transport,
            bus,
            processing_label: processing_label.into(),
        }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Handle a submit click.
    ///
    /// An invalid form short-circuits before the transport is touched. A
    /// valid one is delivered, then resolved to the landing page for the
    /// `role` value read from the page.
    pub async fn submit(
        &self,
        values: &HashMap<String, String>,
        role: Option<&str>,
    ) -> ShellResult<SubmitOutcome> {
        let report = self.validator.validate_form(values);
        let form = report.form.clone();

        if !report.is_valid() {
            tracing::warn!(
                form = %form,
                first_invalid = ?report.first_invalid,
                "Form rejected"
            );
            self.bus.publish(UiEvent::new(EVENT_FORM_REJECTED).with_form(&form));
            return Ok(SubmitOutcome::Rejected { report });
        }

        self.bus.publish(UiEvent::new(EVENT_FORM_ACCEPTED).with_form(&form));

        let button = SubmitButton::processing(&self.processing_label);
        let payload = json!({ "fields": values, "role": role });
        self.transport.submit(&form, payload).await?;

        let destination = landing_page_for_role(role).to_string();
        self.bus.publish(
            UiEvent::new(EVENT_SUBMISSION_COMPLETED)
                .with_form(&form)
                .with_payload(json!({ "destination": destination })),
        );
        tracing::info!(form = %form, %destination, "Submission completed");

        Ok(SubmitOutcome::Accepted {
            destination,
            button,
        })
    }
}
