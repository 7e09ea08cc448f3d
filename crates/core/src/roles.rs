//! Well-known role name constants.
//!
//! These must match the `role` values the registration page emits.

/// Mentors accept session requests and run sessions.
pub const ROLE_MENTOR: &str = "mentor";

/// Mentees request sessions and track goals.
pub const ROLE_MENTEE: &str = "mentee";

/// Administrators manage users and requests.
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values.
pub const VALID_ROLES: &[&str] = &[ROLE_MENTOR, ROLE_MENTEE, ROLE_ADMIN];

/// Check whether a role string is one of the accepted values.
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role(ROLE_MENTOR));
        assert!(is_valid_role(ROLE_MENTEE));
        assert!(is_valid_role(ROLE_ADMIN));
    }

    #[test]
    fn unknown_roles_are_invalid() {
        assert!(!is_valid_role("coach"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("Mentor"));
    }
}
