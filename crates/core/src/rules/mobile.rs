//! Mobile number rule.

use crate::policy::NumberingPlan;
use crate::verdict::Verdict;

/// Validate a mobile number against a numbering plan.
///
/// Non-digit characters (spaces, hyphens, punctuation) are stripped before
/// checking, so `98765-43210` and `98765 43210` normalize to the same
/// subscriber number.
pub fn mobile(value: &str, plan: &NumberingPlan) -> Verdict {
    if value.is_empty() {
        return Verdict::fail("Mobile number is required");
    }

    let digits: String = value.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != plan.subscriber_digits() {
        return Verdict::fail(format!(
            "Mobile number must contain exactly {} digits",
            plan.subscriber_digits()
        ));
    }

    if !plan.matches(&digits) {
        return Verdict::fail(format!(
            "Please enter a valid mobile number (should start with {}-{})",
            plan.lead_min(),
            plan.lead_max()
        ));
    }

    Verdict::pass("Valid mobile number")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> NumberingPlan {
        NumberingPlan::india()
    }

    #[test]
    fn empty_is_required() {
        let verdict = mobile("", &plan());
        assert!(!verdict.valid);
        assert!(verdict.message.contains("required"));
    }

    #[test]
    fn plain_ten_digit_number_passes() {
        assert!(mobile("9876543210", &plan()).valid);
    }

    #[test]
    fn hyphenated_number_is_normalized() {
        assert!(mobile("98765-43210", &plan()).valid);
    }

    #[test]
    fn spaced_number_is_normalized() {
        assert!(mobile("98765 43210", &plan()).valid);
    }

    #[test]
    fn too_few_digits_fail() {
        let verdict = mobile("98765", &plan());
        assert!(!verdict.valid);
        assert!(verdict.message.contains("exactly 10"));
    }

    #[test]
    fn too_many_digits_fail() {
        assert!(!mobile("98765432100", &plan()).valid);
    }

    #[test]
    fn wrong_leading_digit_fails() {
        let verdict = mobile("1234567890", &plan());
        assert!(!verdict.valid);
        assert!(verdict.message.contains("start with 6-9"));
    }

    #[test]
    fn custom_plan_changes_the_message() {
        let plan = NumberingPlan::new(8, 2, 5).expect("valid plan");
        let verdict = mobile("93456789", &plan);
        assert!(!verdict.valid);
        assert!(verdict.message.contains("start with 2-5"));
    }
}
