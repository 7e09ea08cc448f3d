//! Client-side search and filter predicates.
//!
//! Pure helpers shared by the shell's mentor-list search and match-card
//! domain filtering.

/// Wildcard domain value that matches every card.
pub const DOMAIN_ALL: &str = "all";

/// Case-insensitive substring match.
///
/// An empty or whitespace-only query matches everything, so clearing the
/// search box restores the full list.
pub fn matches_query(text: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Check a card's domain against the selected filter value.
pub fn domain_matches(card_domain: &str, selected: &str) -> bool {
    selected == DOMAIN_ALL || card_domain == selected
}
