//! Whole-form evaluation.
//!
//! [`FormValidator`] walks a schema's declared fields, asks the rule engine
//! for a verdict on each value, and aggregates the outcomes into a
//! [`FormReport`]. The report's `first_invalid` drives focus: the shell
//! scrolls to and focuses the first failing field, in schema order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use mentorconnect_core::types::Timestamp;
use mentorconnect_core::{RuleEngine, Verdict};

use crate::binding::{FieldBinding, FormSchema};
use crate::error::{ShellError, ShellResult};

/// Visual state a field control should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldState {
    /// No feedback shown (initial state, or cleared when the field regains
    /// focus).
    Neutral,
    /// Success styling with the verdict message beside the control.
    Valid,
    /// Error styling with the verdict message beside the control.
    Invalid,
}

/// Verdict plus rendering state for a single field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOutcome {
    pub field_id: String,
    pub verdict: Verdict,
    pub state: FieldState,
}

impl FieldOutcome {
    fn from_verdict(binding: &FieldBinding, verdict: Verdict) -> Self {
        let state = if verdict.valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        Self {
            field_id: binding.id.clone(),
            verdict,
            state,
        }
    }

    /// The feedback-free outcome a field returns to on focus.
    pub fn cleared(field_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            verdict: Verdict::pass(""),
            state: FieldState::Neutral,
        }
    }
}

/// Aggregate result of validating every bound field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormReport {
    pub form: String,
    /// Per-field outcomes in schema order.
    pub outcomes: Vec<FieldOutcome>,
    /// First invalid field in schema order; the shell focuses it.
    pub first_invalid: Option<String>,
}

impl FormReport {
    /// Whether every field validated.
    pub fn is_valid(&self) -> bool {
        self.first_invalid.is_none()
    }

    /// Look up a field's outcome by id.
    pub fn outcome(&self, field_id: &str) -> Option<&FieldOutcome> {
        self.outcomes.iter().find(|outcome| outcome.field_id == field_id)
    }
}

/// Validates form values against a schema using the rule engine.
#[derive(Debug, Clone)]
pub struct FormValidator {
    schema: FormSchema,
    engine: RuleEngine,
}

impl FormValidator {
    pub fn new(schema: FormSchema, engine: RuleEngine) -> Self {
        Self { schema, engine }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validate a single field, as on input or blur.
    ///
    /// Fails with [`ShellError::UnknownField`] for an id the schema does
    /// not declare — a wiring mistake, not user input.
    pub fn validate_field(&self, field_id: &str, value: &str) -> ShellResult<FieldOutcome> {
        let binding = self
            .schema
            .binding(field_id)
            .ok_or_else(|| ShellError::UnknownField(field_id.to_string()))?;
        let verdict = self.engine.validate(binding.kind, value);
        tracing::debug!(
            field = %binding.id,
            valid = verdict.valid,
            "Field validated"
        );
        Ok(FieldOutcome::from_verdict(binding, verdict))
    }

    /// Validate every declared field, as on submit.
    ///
    /// Fields missing from `values` validate as empty strings, matching a
    /// browser form where untouched inputs submit empty values.
    pub fn validate_form(&self, values: &HashMap<String, String>) -> FormReport {
        self.validate_form_at(values, chrono::Utc::now())
    }

    /// Validate with an explicit clock for time-dependent fields.
    pub fn validate_form_at(
        &self,
        values: &HashMap<String, String>,
        now: Timestamp,
    ) -> FormReport {
        let mut outcomes = Vec::with_capacity(self.schema.len());
        let mut first_invalid = None;

        for binding in self.schema.fields() {
            let raw = values.get(&binding.id).map(String::as_str).unwrap_or("");
            let verdict = self.engine.validate_at(binding.kind, raw, now);
            if !verdict.valid && first_invalid.is_none() {
                first_invalid = Some(binding.id.clone());
            }
            outcomes.push(FieldOutcome::from_verdict(binding, verdict));
        }

        FormReport {
            form: self.schema.name.clone(),
            outcomes,
            first_invalid,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::binding::registration_schema;

    use super::*;

    fn validator() -> FormValidator {
        FormValidator::new(registration_schema(), RuleEngine::default())
    }

    fn valid_values() -> HashMap<String, String> {
        [
            ("first-name", "Alexander"),
            ("last-name", "Bennett"),
            ("email", "alexander@example.com"),
            ("password", "Mentor2026"),
            ("mobile", "9876543210"),
            ("address", "221B Baker Street, London"),
        ]
        .into_iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
    }

    #[test]
    fn all_valid_form_reports_valid() {
        let report = validator().validate_form(&valid_values());
        assert!(report.is_valid());
        assert!(report.first_invalid.is_none());
        assert_eq!(report.outcomes.len(), 6);
        assert!(report.outcomes.iter().all(|o| o.state == FieldState::Valid));
    }

    #[test]
    fn first_invalid_follows_schema_order() {
        let mut values = valid_values();
        values.insert("email".to_string(), "a@@b.co".to_string());
        values.insert("first-name".to_string(), "Al".to_string());

        let report = validator().validate_form(&values);
        assert!(!report.is_valid());
        // first-name precedes email in the schema.
        assert_eq!(report.first_invalid.as_deref(), Some("first-name"));
    }

    #[test]
    fn missing_fields_validate_as_empty() {
        let report = validator().validate_form(&HashMap::new());
        assert!(!report.is_valid());
        assert_eq!(report.first_invalid.as_deref(), Some("first-name"));
        assert!(report.outcomes.iter().all(|o| o.state == FieldState::Invalid));
    }

    #[test]
    fn report_outcome_lookup_finds_the_field() {
        let mut values = valid_values();
        values.insert("mobile".to_string(), "1234567890".to_string());

        let report = validator().validate_form(&values);
        let outcome = report.outcome("mobile").expect("mobile is declared");
        assert_eq!(outcome.state, FieldState::Invalid);
        assert!(outcome.verdict.message.contains("start with 6-9"));
    }

    #[test]
    fn single_field_validation_uses_the_bound_kind() {
        let outcome = validator()
            .validate_field("password", "abcdef")
            .expect("password is declared");
        assert_eq!(outcome.state, FieldState::Valid);
        assert!(outcome.verdict.message.contains("Consider adding"));
    }

    #[test]
    fn unknown_field_is_a_wiring_error() {
        let result = validator().validate_field("nickname", "Sasha");
        assert_matches!(result, Err(ShellError::UnknownField(id)) if id == "nickname");
    }

    #[test]
    fn cleared_outcome_is_neutral() {
        let outcome = FieldOutcome::cleared("email");
        assert_eq!(outcome.state, FieldState::Neutral);
        assert!(outcome.verdict.message.is_empty());
    }
}
