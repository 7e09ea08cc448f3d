//! Mentor match cards: domain filtering, free-text search, and connect
//! requests.

use serde::{Deserialize, Serialize};

use mentorconnect_core::search;
use mentorconnect_events::NotificationLevel;

/// A mentor card on the match page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchCard {
    pub mentor: String,
    pub domain: String,
    pub summary: String,
}

/// State of a card's connect button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectState {
    pub label: String,
    pub disabled: bool,
}

/// Filter cards for the domain `<select>`: keep cards whose domain equals
/// the selection, or all of them for the `all` wildcard.
pub fn filter_by_domain<'a>(cards: &'a [MatchCard], selected: &str) -> Vec<&'a MatchCard> {
    cards
        .iter()
        .filter(|card| search::domain_matches(&card.domain, selected))
        .collect()
}

/// Case-insensitive free-text search across mentor name and summary.
pub fn search_cards<'a>(cards: &'a [MatchCard], query: &str) -> Vec<&'a MatchCard> {
    cards
        .iter()
        .filter(|card| {
            search::matches_query(&card.mentor, query) || search::matches_query(&card.summary, query)
        })
        .collect()
}

/// Filter free-text list items (the mentor directory list) by query.
pub fn filter_items<'a>(items: &'a [String], query: &str) -> Vec<&'a String> {
    items
        .iter()
        .filter(|item| search::matches_query(item, query))
        .collect()
}

/// Send a connection request from a card.
///
/// Returns the new button state plus the confirmation toast to raise.
pub fn connect(card: &MatchCard) -> (ConnectState, NotificationLevel, String) {
    tracing::info!(mentor = %card.mentor, "Connection request sent");
    (
        ConnectState {
            label: "Request Sent".to_string(),
            disabled: true,
        },
        NotificationLevel::Success,
        format!("Connection request sent to {}!", card.mentor),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<MatchCard> {
        vec![
            MatchCard {
                mentor: "Priya Sharma".to_string(),
                domain: "data-science".to_string(),
                summary: "10 years in ML platforms".to_string(),
            },
            MatchCard {
                mentor: "Diego Torres".to_string(),
                domain: "web-development".to_string(),
                summary: "Frontend architecture and design systems".to_string(),
            },
            MatchCard {
                mentor: "Mei Lin".to_string(),
                domain: "data-science".to_string(),
                summary: "Analytics engineering".to_string(),
            },
        ]
    }

    #[test]
    fn all_wildcard_keeps_every_card() {
        assert_eq!(filter_by_domain(&cards(), "all").len(), 3);
    }

    #[test]
    fn domain_filter_keeps_exact_matches_only() {
        let cards = cards();
        let kept = filter_by_domain(&cards, "data-science");
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|card| card.domain == "data-science"));
    }

    #[test]
    fn unknown_domain_hides_everything() {
        assert!(filter_by_domain(&cards(), "devops").is_empty());
    }

    #[test]
    fn search_matches_name_or_summary() {
        let cards = cards();
        assert_eq!(search_cards(&cards, "priya").len(), 1);
        assert_eq!(search_cards(&cards, "design").len(), 1);
        assert_eq!(search_cards(&cards, "").len(), 3);
    }

    #[test]
    fn item_filter_matches_substrings() {
        let items: Vec<String> = vec![
            "Priya Sharma - Data Science".to_string(),
            "Diego Torres - Web Development".to_string(),
        ];
        assert_eq!(filter_items(&items, "web").len(), 1);
        assert_eq!(filter_items(&items, "").len(), 2);
    }

    #[test]
    fn connect_disables_the_button_and_names_the_mentor() {
        let cards = cards();
        let (state, level, message) = connect(&cards[0]);
        assert_eq!(state.label, "Request Sent");
        assert!(state.disabled);
        assert_eq!(level, NotificationLevel::Success);
        assert_eq!(message, "Connection request sent to Priya Sharma!");
    }
}
