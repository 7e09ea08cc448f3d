//! Email address rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::verdict::Verdict;

/// Standard `name@domain.tld` pattern.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid regex")
});

/// Validate an email address.
///
/// The anchored pattern is backed by structural checks: exactly one `@`,
/// not at either end, and no empty dot-separated domain segment.
pub fn email(value: &str) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Email is required");
    }

    if !EMAIL_RE.is_match(value) {
        return Verdict::fail("Please enter a valid email address (name@domain.com)");
    }

    if value.starts_with('@') || value.ends_with('@') {
        return Verdict::fail("Invalid email format");
    }

    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return Verdict::fail("Email must contain exactly one @ symbol");
    }

    let domain_parts: Vec<&str> = parts[1].split('.').collect();
    if domain_parts.len() < 2 || domain_parts.iter().any(|part| part.is_empty()) {
        return Verdict::fail("Invalid domain format");
    }

    Verdict::pass("Valid email address")
}
