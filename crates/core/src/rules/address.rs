//! Address rule.

use crate::verdict::Verdict;

/// Minimum character count for a complete address.
pub const MIN_ADDRESS_LEN: usize = 10;

/// Validate an address: required, at least ten characters.
pub fn address(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Address is required and cannot be empty");
    }
    if value.chars().count() < MIN_ADDRESS_LEN {
        return Verdict::fail(format!(
            "Please enter a complete address (minimum {MIN_ADDRESS_LEN} characters)"
        ));
    }
    Verdict::pass("Valid address")
}
