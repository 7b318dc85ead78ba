//! Canonical "{set name}-{set code}" labels used for set facet display, filtering and dedup.

use std::sync::LazyLock;

use regex::Regex;

use crate::search_result::SearchResultItem;

static SET_CODE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[A-Z]{2}\d{2}").ok());

/// True when the set name already carries a hyphen-joined code such as `OP01` or `ST10`.
pub fn has_set_code(set_name: &str) -> bool {
    if !set_name.contains('-') {
        return false;
    }
    SET_CODE_PATTERN.as_ref().is_some_and(|re| re.is_match(set_name))
}

/// Set code from a card number, i.e. everything before the first hyphen (`OP01-005` -> `OP01`).
pub fn set_code_from_card_number(card_number: &str) -> &str {
    card_number.split('-').next().unwrap_or(card_number)
}

pub fn canonical_set_name(set_name: &str, card_number: Option<&str>) -> String {
    if has_set_code(set_name) {
        return set_name.to_string();
    }
    match card_number.filter(|n| !n.is_empty()) {
        Some(card_number) => format!("{}-{}", set_name, set_code_from_card_number(card_number)),
        None => set_name.to_string(),
    }
}

/// Canonical set label for an item, `None` when the item has no set.
pub fn format_set_name(item: &SearchResultItem) -> Option<String> {
    let set_name = item.set_name.as_deref().filter(|s| !s.is_empty())?;
    Some(canonical_set_name(set_name, item.card_number.as_deref()))
}
