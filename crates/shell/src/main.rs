use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mentorconnect_core::{roles, RuleEngine};
use mentorconnect_events::bus::{EventBus, UiEvent, EVENT_FIELD_VALIDATED, EVENT_SEARCH_PERFORMED};
use mentorconnect_events::{NotificationCenter, NotificationRouter, RefreshTicker};
use mentorconnect_shell::actions::ActionKind;
use mentorconnect_shell::binding::registration_schema;
use mentorconnect_shell::config::ShellConfig;
use mentorconnect_shell::form::FormValidator;
use mentorconnect_shell::matching::{filter_by_domain, MatchCard};
use mentorconnect_shell::submit::{SimulatedTransport, SubmissionFlow, SubmitOutcome};
use mentorconnect_shell::ShellError;

#[tokio::main]
async fn main() -> Result<(), ShellError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mentorconnect_shell=debug,mentorconnect_events=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ShellConfig::from_env()?;
    tracing::info!(
        submit_delay_ms = config.submit_delay_ms,
        refresh_interval_secs = config.refresh_interval_secs,
        "Loaded shell configuration"
    );

    // --- Toast center + event routing ---
    let center = Arc::new(Mutex::new(NotificationCenter::new()));
    let bus = Arc::new(EventBus::default());
    let router = NotificationRouter::new(Arc::clone(&center));
    let router_handle = tokio::spawn(router.run(bus.subscribe()));

    // --- Periodic update checks (schedule / requests pages) ---
    let refresh_cancel = CancellationToken::new();
    let ticker = RefreshTicker::with_interval(
        Arc::clone(&center),
        Duration::from_secs(config.refresh_interval_secs),
    );
    let ticker_handle = tokio::spawn(ticker.run(refresh_cancel.clone()));

    // --- Registration form wired to the rule engine ---
    let engine = RuleEngine::with_numbering_plan(config.numbering_plan.clone());
    let validator = FormValidator::new(registration_schema(), engine);

    // A blur on the email field, rendered inline (no toast).
    let outcome = validator.validate_field("email", "alexander@example.com")?;
    bus.publish(
        UiEvent::new(EVENT_FIELD_VALIDATED)
            .with_form("registration")
            .with_field(&outcome.field_id),
    );
    tracing::info!(field = %outcome.field_id, state = ?outcome.state, "Field feedback rendered");

    // The submit click.
    let flow = SubmissionFlow::new(
        validator,
        SimulatedTransport::new(Duration::from_millis(config.submit_delay_ms)),
        Arc::clone(&bus),
        "Registering...",
    );

    match flow.submit(&sample_registration(), Some(roles::ROLE_MENTEE)).await? {
        SubmitOutcome::Accepted {
            destination,
            button,
        } => {
            tracing::info!(%destination, label = %button.label, "Registration accepted");
        }
        SubmitOutcome::Rejected { report } => {
            for outcome in report.outcomes.iter().filter(|o| !o.verdict.valid) {
                tracing::warn!(
                    field = %outcome.field_id,
                    message = %outcome.verdict.message,
                    "Field invalid"
                );
            }
        }
    }

    // --- Dashboard: a confirmed accept on a session request ---
    if let Some(outcome) = ActionKind::Accept.apply(true) {
        bus.publish(outcome.as_event());
        tracing::info!(
            label = ?outcome.control_label,
            disabled = outcome.control_disabled,
            "Action applied"
        );
    }

    // --- Match page: domain filter + a search toast ---
    let cards = sample_cards();
    let visible = filter_by_domain(&cards, "data-science");
    tracing::info!(total = cards.len(), visible = visible.len(), "Match cards filtered");
    bus.publish(
        UiEvent::new(EVENT_SEARCH_PERFORMED).with_payload(serde_json::json!({"query": "priya"})),
    );

    // --- Drain background tasks, then show what the toast center holds ---
    refresh_cancel.cancel();
    let _ = ticker_handle.await;
    drop(flow);
    drop(bus);
    let _ = router_handle.await;

    let now = chrono::Utc::now();
    match center.lock() {
        Ok(center) => {
            for toast in center.active(now) {
                tracing::info!(level = ?toast.level, message = %toast.message, "Toast");
            }
        }
        Err(_) => tracing::error!("Notification center lock poisoned"),
    }

    tracing::info!("Shell demo complete");
    Ok(())
}

/// A filled-in registration form.
fn sample_registration() -> HashMap<String, String> {
    [
        ("first-name", "Alexander"),
        ("last-name", "Bennett"),
        ("email", "alexander@example.com"),
        ("password", "Mentor2026"),
        ("mobile", "98765-43210"),
        ("address", "221B Baker Street, London"),
    ]
    .into_iter()
    .map(|(id, value)| (id.to_string(), value.to_string()))
    .collect()
}

/// The match page's demo cards.
fn sample_cards() -> Vec<MatchCard> {
    vec![
        MatchCard {
            mentor: "Priya Sharma".to_string(),
            domain: "data-science".to_string(),
            summary: "10 years in ML platforms".to_string(),
        },
        MatchCard {
            mentor: "Diego Torres".to_string(),
            domain: "web-development".to_string(),
            summary: "Frontend architecture and design systems".to_string(),
        },
    ]
}
