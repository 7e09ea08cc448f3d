//! Field kind identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The semantic category of a form field, selecting which rule applies.
///
/// The kebab-case names double as the stable identifiers used in schemas
/// and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    FirstName,
    LastName,
    Email,
    Password,
    Mobile,
    Address,
    ShortGoal,
    LongGoal,
    /// Generic non-empty check for fields without a dedicated rule.
    Required,
    /// Optional future date/time, e.g. a preferred session slot.
    SessionTime,
}

impl FieldKind {
    /// All known kinds, in schema-display order.
    pub const ALL: &'static [FieldKind] = &[
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::Email,
        FieldKind::Password,
        FieldKind::Mobile,
        FieldKind::Address,
        FieldKind::ShortGoal,
        FieldKind::LongGoal,
        FieldKind::Required,
        FieldKind::SessionTime,
    ];

    /// Kebab-case identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::FirstName => "first-name",
            FieldKind::LastName => "last-name",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Mobile => "mobile",
            FieldKind::Address => "address",
            FieldKind::ShortGoal => "short-goal",
            FieldKind::LongGoal => "long-goal",
            FieldKind::Required => "required",
            FieldKind::SessionTime => "session-time",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown field kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for kind in FieldKind::ALL {
            let parsed: FieldKind = kind.as_str().parse().expect("known kind");
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "middle-name".parse::<FieldKind>().unwrap_err();
        assert!(err.to_string().contains("middle-name"));
    }

    #[test]
    fn serde_names_match_as_str() {
        let json = serde_json::to_string(&FieldKind::SessionTime).expect("serializable");
        assert_eq!(json, "\"session-time\"");
    }
}
