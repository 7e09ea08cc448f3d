//! Password rule and advisory strength classification.

use serde::{Deserialize, Serialize};

use crate::verdict::Verdict;

/// Minimum character count; the only pass/fail gate for a password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Advisory password strength classes.
///
/// Strength never affects validity — it only selects the success message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Good,
    Weak,
}

impl Strength {
    /// Classify by presence of uppercase, lowercase, and digit characters.
    pub fn classify(password: &str) -> Self {
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if has_upper && has_lower && has_digit {
            Strength::Strong
        } else if (has_upper || has_lower) && has_digit {
            Strength::Good
        } else {
            Strength::Weak
        }
    }

    /// The success message reported for this strength class.
    pub fn message(&self) -> &'static str {
        match self {
            Strength::Strong => "Strong password",
            Strength::Good => "Good password",
            Strength::Weak => {
                "Consider adding uppercase, lowercase, and numbers for better security"
            }
        }
    }
}

/// Validate a password: required and at least six characters.
///
/// On success the message carries the advisory strength classification.
pub fn password(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Password is required");
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Verdict::fail(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Verdict::pass(Strength::classify(value).message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_required() {
        let verdict = password("");
        assert!(!verdict.valid);
        assert!(verdict.message.contains("required"));
    }

    #[test]
    fn short_password_fails() {
        let verdict = password("Ab1");
        assert!(!verdict.valid);
        assert!(verdict.message.contains("at least 6"));
    }

    #[test]
    fn mixed_case_with_digit_is_strong() {
        let verdict = password("Abcdef1");
        assert!(verdict.valid);
        assert_eq!(verdict.message, "Strong password");
    }

    #[test]
    fn single_case_with_digit_is_good() {
        let verdict = password("abc123");
        assert!(verdict.valid);
        assert_eq!(verdict.message, "Good password");
    }

    #[test]
    fn letters_only_is_weak_but_still_valid() {
        // Strength is advisory; length alone decides validity.
        let verdict = password("abcdef");
        assert!(verdict.valid);
        assert!(verdict.message.contains("Consider adding"));
    }

    #[test]
    fn digits_only_is_weak_but_still_valid() {
        let verdict = password("123456");
        assert!(verdict.valid);
        assert!(verdict.message.contains("Consider adding"));
    }

    #[test]
    fn classify_matches_message_paths() {
        assert_eq!(Strength::classify("Abc123"), Strength::Strong);
        assert_eq!(Strength::classify("ABC123"), Strength::Good);
        assert_eq!(Strength::classify("abcdef"), Strength::Weak);
    }
}
