//! Applies facet selections to the current page of results.

use common::{
    filter_selection::{Facet, FacetValue, FilterSelection},
    search_result::SearchResultItem,
    set_name::format_set_name,
};

/// Facets that narrow the card type and color options, see `facet_index`.
pub const UPSTREAM_FACETS: [Facet; 2] = [Facet::Rarity, Facet::Set];

pub fn matches_facet(item: &SearchResultItem, facet: Facet, value: &FacetValue) -> bool {
    let Some(selected) = value.as_value() else { return true };
    match facet {
        // an exact match is also a prefix match; a bare set name matches every coded variant
        Facet::Set => format_set_name(item).is_some_and(|formatted| formatted.starts_with(selected)),
        _ => item.facet_field(facet) == Some(selected),
    }
}

/// Runs the given facets, in order, over `items`. Wildcards are skipped.
pub fn apply_facet_filters<'a>(items: &'a [SearchResultItem], filters: &FilterSelection, facets: &[Facet]) -> Vec<&'a SearchResultItem> {
    let mut results = items.iter().collect::<Vec<_>>();
    for facet in facets {
        let value = filters.get(*facet);
        if value.is_wildcard() {
            continue;
        }
        results.retain(|item| matches_facet(item, *facet, value));
    }
    results
}

/// The displayed result list: rarity, then set, then card type, then color.
pub fn filter_results<'a>(items: &'a [SearchResultItem], filters: &FilterSelection) -> Vec<&'a SearchResultItem> {
    apply_facet_filters(items, filters, &Facet::ALL)
}

/// Results with only the rarity and set selections applied.
pub fn available_for_filtering<'a>(items: &'a [SearchResultItem], filters: &FilterSelection) -> Vec<&'a SearchResultItem> {
    apply_facet_filters(items, filters, &UPSTREAM_FACETS)
}


#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn card(name: &str, rarity: Option<&str>, set: Option<(&str, &str)>, card_type: Option<&str>, color: Option<&str>) -> SearchResultItem {
        let mut item = SearchResultItem::new(name);
        item.rarity = rarity.map(|s| s.to_string());
        if let Some((set_name, card_number)) = set {
            item.set_name = Some(set_name.to_string());
            item.card_number = Some(card_number.to_string());
        }
        item.card_type = card_type.map(|s| s.to_string());
        item.color = color.map(|s| s.to_string());
        item
    }

    pub(crate) fn sample_cards() -> Vec<SearchResultItem> {
        vec![
            card("Luffy", Some("Leader"), Some(("Romance Dawn", "OP01-003")), Some("Leader"), Some("Red")),
            card("Zoro", Some("Super Rare"), Some(("Romance Dawn", "OP01-025")), Some("Character"), Some("Red")),
            card("Nami", Some("Rare"), Some(("Romance Dawn", "OP01-016")), Some("Character"), Some("Red")),
            card("Gum-Gum Pistol", Some("Rare"), Some(("Paramount War", "OP02-021")), Some("Event"), Some("Red")),
            card("Kaido", Some("Rare"), Some(("Paramount War", "OP02-045")), Some("Character"), Some("Purple")),
            card("Thousand Sunny", Some("Common"), Some(("Straw Hat Crew", "ST01-017")), Some("Stage"), Some("Red")),
            card("Promo Luffy", None, None, Some("Character"), None),
        ]
    }

    fn names(items: &[&SearchResultItem]) -> Vec<String> {
        items.iter().map(|i| i.card_name.clone()).collect()
    }

    #[test]
    fn wildcard_is_identity() {
        let cards = sample_cards();
        let filtered = filter_results(&cards, &FilterSelection::default());
        assert_eq!(filtered.len(), cards.len());
        assert!(filtered.iter().zip(cards.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn every_result_satisfies_every_selection() {
        let cards = sample_cards();
        let filters = FilterSelection::default()
            .with(Facet::Rarity, "Rare")
            .with(Facet::CardType, "Character");
        let filtered = filter_results(&cards, &filters);
        assert_eq!(names(&filtered), vec!["Nami", "Kaido"]);
        for item in filtered {
            for facet in Facet::ALL {
                assert!(matches_facet(item, facet, filters.get(facet)));
            }
        }
    }

    #[test]
    fn set_filter_matches_canonical_name_and_prefix() {
        let cards = sample_cards();
        let exact = FilterSelection::default().with(Facet::Set, "Romance Dawn-OP01");
        assert_eq!(names(&filter_results(&cards, &exact)), vec!["Luffy", "Zoro", "Nami"]);

        let bare = FilterSelection::default().with(Facet::Set, "Paramount War");
        assert_eq!(names(&filter_results(&cards, &bare)), vec!["Gum-Gum Pistol", "Kaido"]);
    }

    #[test]
    fn null_fields_never_match_a_selection() {
        let cards = sample_cards();
        let by_color = FilterSelection::default().with(Facet::Color, "Red");
        assert!(!names(&filter_results(&cards, &by_color)).contains(&"Promo Luffy".to_string()));

        let by_set = FilterSelection::default().with(Facet::Set, "R");
        assert!(!names(&filter_results(&cards, &by_set)).contains(&"Promo Luffy".to_string()));
    }

    #[test]
    fn available_for_filtering_ignores_type_and_color() {
        let cards = sample_cards();
        let filters = FilterSelection::default()
            .with(Facet::Rarity, "Rare")
            .with(Facet::Color, "Purple")
            .with(Facet::CardType, "Event");
        assert_eq!(names(&available_for_filtering(&cards, &filters)), vec!["Nami", "Gum-Gum Pistol", "Kaido"]);
        assert!(filter_results(&cards, &filters).is_empty());
    }
}
