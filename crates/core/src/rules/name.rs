//! First- and last-name rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::verdict::Verdict;

/// Minimum character count for a first name.
pub const MIN_FIRST_NAME_LEN: usize = 6;

/// Letters and spaces only.
static ALPHABETIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid regex"));

/// Validate a first name: required, at least six characters, letters and
/// spaces only.
pub fn first_name(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("First name is required");
    }
    if value.chars().count() < MIN_FIRST_NAME_LEN {
        return Verdict::fail(format!(
            "First name must be at least {MIN_FIRST_NAME_LEN} characters long"
        ));
    }
    if !ALPHABETIC_RE.is_match(value) {
        return Verdict::fail("First name should contain only alphabets and spaces");
    }
    Verdict::pass("Valid first name")
}

/// Validate a last name: required and letters/spaces only.
///
/// Unlike [`first_name`] there is no minimum length. The asymmetry matches
/// observed product behavior and is preserved, not fixed.
pub fn last_name(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Last name is required and cannot be empty");
    }
    if !ALPHABETIC_RE.is_match(value) {
        return Verdict::fail("Last name should contain only alphabets and spaces");
    }
    Verdict::pass("Valid last name")
}
