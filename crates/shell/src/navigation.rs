//! Static page navigation table.

use mentorconnect_core::roles::{ROLE_ADMIN, ROLE_MENTEE, ROLE_MENTOR};

/// Landing page when no role matches.
pub const PAGE_DASHBOARD: &str = "dashboard.html";

/// Mentor home page.
pub const PAGE_MENTOR: &str = "mentor.html";

/// Mentee home page.
pub const PAGE_MENTEE: &str = "mentee.html";

/// Admin console page.
pub const PAGE_ADMIN: &str = "admin.html";

/// Resolve the post-submission landing page for the role value read from
/// the page. Unknown or missing roles land on the dashboard.
pub fn landing_page_for_role(role: Option<&str>) -> &'static str {
    match role {
        Some(ROLE_MENTOR) => PAGE_MENTOR,
        Some(ROLE_MENTEE) => PAGE_MENTEE,
        Some(ROLE_ADMIN) => PAGE_ADMIN,
        _ => PAGE_DASHBOARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_role_maps_to_its_page() {
        assert_eq!(landing_page_for_role(Some("mentor")), PAGE_MENTOR);
        assert_eq!(landing_page_for_role(Some("mentee")), PAGE_MENTEE);
        assert_eq!(landing_page_for_role(Some("admin")), PAGE_ADMIN);
    }

    #[test]
    fn unknown_role_defaults_to_dashboard() {
        assert_eq!(landing_page_for_role(Some("coach")), PAGE_DASHBOARD);
    }

    #[test]
    fn missing_role_defaults_to_dashboard() {
        assert_eq!(landing_page_for_role(None), PAGE_DASHBOARD);
    }
}
