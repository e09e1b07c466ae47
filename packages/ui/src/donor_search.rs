//! # Client-side donor search
//!
//! Filters the rendered donor cards by a case-insensitive substring match
//! against each card's full text. O(cards × text length) per keystroke with
//! no debouncing or index — the list is small and already materialized, so
//! anything fancier would be wasted.

use api::DonorRecord;
use dioxus::prelude::*;

/// Whether a donor's card text contains the query, case-insensitively.
/// An empty query matches every card.
pub fn donor_matches(donor: &DonorRecord, query: &str) -> bool {
    donor.search_text().contains(&query.to_lowercase())
}

/// Search input bound to the donor page's query signal.
#[component]
pub fn DonorSearch(mut query: Signal<String>) -> Element {
    rsx! {
        input {
            class: "donor-search",
            r#type: "search",
            placeholder: "Search by name, location or blood group...",
            value: "{query}",
            oninput: move |evt: FormEvent| query.set(evt.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(fullname: &str, location: Option<&str>, blood_group: Option<&str>) -> DonorRecord {
        DonorRecord {
            fullname: fullname.to_string(),
            phone: "9876543210".to_string(),
            location: location.map(str::to_string),
            blood_group: blood_group.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let donor = card("Asha Rao", Some("Chennai"), Some("B+"));
        assert!(donor_matches(&donor, "ASHA"));
        assert!(donor_matches(&donor, "chennai"));
        assert!(donor_matches(&donor, "ChEnNaI"));
    }

    #[test]
    fn query_splits_matching_from_non_matching_cards() {
        let cards = vec![
            card("Asha Rao", Some("Chennai"), Some("B+")),
            card("Vikram Iyer", Some("Mumbai"), Some("O-")),
            card("Meera Nair", Some("Chennai"), Some("A+")),
        ];

        let shown: Vec<&str> = cards
            .iter()
            .filter(|c| donor_matches(c, "chennai"))
            .map(|c| c.fullname.as_str())
            .collect();
        assert_eq!(shown, vec!["Asha Rao", "Meera Nair"]);

        let hidden: Vec<&str> = cards
            .iter()
            .filter(|c| !donor_matches(c, "chennai"))
            .map(|c| c.fullname.as_str())
            .collect();
        assert_eq!(hidden, vec!["Vikram Iyer"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let donor = card("Asha Rao", None, None);
        assert!(donor_matches(&donor, ""));
    }

    #[test]
    fn matches_phone_and_placeholder_text() {
        let donor = card("Asha Rao", None, None);
        assert!(donor_matches(&donor, "98765"));
        // Untracked location renders a placeholder, which is searchable text
        // like any other part of the card.
        assert!(donor_matches(&donor, "not specified"));
        assert!(!donor_matches(&donor, "mumbai"));
    }
}
