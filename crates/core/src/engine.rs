//! The field validation rule engine.
//!
//! [`RuleEngine`] maps a field kind and raw value to a
//! [`Verdict`](crate::verdict::Verdict). Each call is independent and
//! reentrant; the engine holds only immutable policy configuration.

use chrono::Utc;

use crate::kind::FieldKind;
use crate::policy::NumberingPlan;
use crate::rules;
use crate::types::Timestamp;
use crate::verdict::Verdict;

/// Pure, deterministic field validator.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    numbering_plan: NumberingPlan,
}

impl RuleEngine {
    /// Create an engine with a specific mobile numbering plan.
    pub fn with_numbering_plan(numbering_plan: NumberingPlan) -> Self {
        Self { numbering_plan }
    }

    /// The active mobile numbering plan.
    pub fn numbering_plan(&self) -> &NumberingPlan {
        &self.numbering_plan
    }

    /// Validate a raw field value against the rule for `kind`.
    ///
    /// The value is trimmed once before rule evaluation. `session-time`
    /// compares against the moment of the call; tests that need a fixed
    /// clock should use [`validate_at`](RuleEngine::validate_at).
    pub fn validate(&self, kind: FieldKind, raw: &str) -> Verdict {
        self.validate_at(kind, raw, Utc::now())
    }

    /// Validate with an explicit "now" for time-dependent rules.
    pub fn validate_at(&self, kind: FieldKind, raw: &str, now: Timestamp) -> Verdict {
        let value = raw.trim();
        match kind {
            FieldKind::FirstName => rules::name::first_name(value),
            FieldKind::LastName => rules::name::last_name(value),
            FieldKind::Email => rules::email::email(value),
            FieldKind::Password => rules::password::password(value),
            FieldKind::Mobile => rules::mobile::mobile(value, &self.numbering_plan),
            FieldKind::Address => rules::address::address(value),
            FieldKind::ShortGoal => rules::goals::short_goal(value),
            FieldKind::LongGoal => rules::goals::long_goal(value),
            FieldKind::Required => rules::required::required(value),
            FieldKind::SessionTime => rules::datetime::session_time(value, now),
        }
    }
}
