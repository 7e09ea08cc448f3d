//! Declared field bindings.
//!
//! A [`FormSchema`] declares each field id and its rule kind up front.
//! Lookups are exact — no name, placeholder-substring, or positional
//! fallback heuristics.

use serde::{Deserialize, Serialize};

use mentorconnect_core::FieldKind;

/// One form field bound to a validation rule kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBinding {
    /// Stable identifier, unique within the form.
    pub id: String,
    /// Rule kind applied to the field's value.
    pub kind: FieldKind,
    /// Human-readable label used in logs and messages.
    pub label: String,
}

/// A form's declared fields, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub name: String,
    fields: Vec<FieldBinding>,
}

impl FormSchema {
    /// Start an empty schema for the named form.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field. Declaration order is display (and focus) order.
    pub fn field(
        mut self,
        id: impl Into<String>,
        kind: FieldKind,
        label: impl Into<String>,
    ) -> Self {
        self.fields.push(FieldBinding {
            id: id.into(),
            kind,
            label: label.into(),
        });
        self
    }

    /// Declared fields in display order.
    pub fn fields(&self) -> &[FieldBinding] {
        &self.fields
    }

    /// Exact lookup by declared id.
    pub fn binding(&self, id: &str) -> Option<&FieldBinding> {
        self.fields.iter().find(|binding| binding.id == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Page schemas
// ---------------------------------------------------------------------------

/// The registration page form.
pub fn registration_schema() -> FormSchema {
    FormSchema::new("registration")
        .field("first-name", FieldKind::FirstName, "First name")
        .field("last-name", FieldKind::LastName, "Last name")
        .field("email", FieldKind::Email, "Email")
        .field("password", FieldKind::Password, "Password")
        .field("mobile", FieldKind::Mobile, "Mobile number")
        .field("address", FieldKind::Address, "Address")
}

/// The login tab of the auth page.
pub fn login_schema() -> FormSchema {
    FormSchema::new("login")
        .field("email", FieldKind::Email, "Email")
        .field("password", FieldKind::Password, "Password")
}

/// The goals page form. The session time is optional.
pub fn goals_schema() -> FormSchema {
    FormSchema::new("goals")
        .field("short-goal", FieldKind::ShortGoal, "Short-term goal")
        .field("long-goal", FieldKind::LongGoal, "Long-term goal")
        .field("session-time", FieldKind::SessionTime, "Preferred session time")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_lookup_is_exact() {
        let schema = registration_schema();
        assert_eq!(schema.binding("email").map(|b| b.kind), Some(FieldKind::Email));
        // No placeholder-substring fallbacks: near-misses stay unknown.
        assert!(schema.binding("e-mail").is_none());
        assert!(schema.binding("Email").is_none());
    }

    #[test]
    fn registration_declares_six_fields_in_order() {
        let schema = registration_schema();
        let ids: Vec<&str> = schema.fields().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["first-name", "last-name", "email", "password", "mobile", "address"]
        );
    }

    #[test]
    fn goals_schema_includes_the_optional_session_time() {
        let schema = goals_schema();
        assert_eq!(schema.len(), 3);
        assert_eq!(
            schema.binding("session-time").map(|b| b.kind),
            Some(FieldKind::SessionTime)
        );
    }

    #[test]
    fn empty_schema_reports_empty() {
        assert!(FormSchema::new("blank").is_empty());
    }
}
