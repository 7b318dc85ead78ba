//! Selectable options for each facet.
//!
//! Rarity and set options come from the whole page so picking one never hides
//! its siblings. Card type and color options come from the page narrowed by
//! the rarity and set selections only, for the same reason.

use std::collections::BTreeSet;

use common::{
    filter_selection::{Facet, FilterSelection},
    search_result::SearchResultItem,
    set_name::format_set_name,
};

use crate::search_view::filter_pipeline::available_for_filtering;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetOptions {
    pub rarities: Vec<String>,
    pub sets: Vec<String>,
    pub card_types: Vec<String>,
    pub colors: Vec<String>,
}

impl FacetOptions {
    pub fn compute(items: &[SearchResultItem], filters: &FilterSelection) -> Self {
        let narrowed = available_for_filtering(items, filters);
        Self {
            rarities: rarity_options(items.iter()),
            sets: set_options(items.iter()),
            card_types: distinct_sorted(narrowed.iter().map(|item| item.card_type.as_deref())),
            colors: distinct_sorted(narrowed.iter().map(|item| item.color.as_deref())),
        }
    }

    pub fn get(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Rarity => &self.rarities,
            Facet::Set => &self.sets,
            Facet::CardType => &self.card_types,
            Facet::Color => &self.colors,
        }
    }
}

pub fn rarity_options<'a>(items: impl Iterator<Item = &'a SearchResultItem>) -> Vec<String> {
    distinct_sorted(items.map(|item| item.rarity.as_deref()))
}

/// Canonical set labels, so display, filtering and dedup all agree.
pub fn set_options<'a>(items: impl Iterator<Item = &'a SearchResultItem>) -> Vec<String> {
    let sets = items.filter_map(format_set_name).collect::<Vec<_>>();
    distinct_sorted(sets.iter().map(|s| Some(s.as_str())))
}

pub fn card_type_options(items: &[SearchResultItem], filters: &FilterSelection) -> Vec<String> {
    distinct_sorted(available_for_filtering(items, filters).into_iter().map(|item| item.card_type.as_deref()))
}

pub fn color_options(items: &[SearchResultItem], filters: &FilterSelection) -> Vec<String> {
    distinct_sorted(available_for_filtering(items, filters).into_iter().map(|item| item.color.as_deref()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|v| v.to_string())
        .collect()
}
