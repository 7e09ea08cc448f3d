//! Mentorship goal rules.

use crate::verdict::Verdict;

/// Minimum character count for a short-term goal description.
pub const MIN_SHORT_GOAL_LEN: usize = 10;

/// Minimum character count for a long-term goal description.
pub const MIN_LONG_GOAL_LEN: usize = 15;

/// Validate a short-term goal: required, at least ten characters.
pub fn short_goal(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Please enter your short-term goal");
    }
    if value.chars().count() < MIN_SHORT_GOAL_LEN {
        return Verdict::fail(format!(
            "Please provide more details (at least {MIN_SHORT_GOAL_LEN} characters)"
        ));
    }
    Verdict::pass("Valid")
}

/// Validate a long-term goal: required, at least fifteen characters.
pub fn long_goal(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Please enter your long-term goal");
    }
    if value.chars().count() < MIN_LONG_GOAL_LEN {
        return Verdict::fail(format!(
            "Please provide more details (at least {MIN_LONG_GOAL_LEN} characters)"
        ));
    }
    Verdict::pass("Valid")
}
