//! Facet filter selections applied on top of a page of search results.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Value the selectors use for "no filter on this facet".
pub const WILDCARD: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Rarity,
    Set,
    CardType,
    Color,
}

impl Facet {
    /// Fixed application order of the filter pipeline.
    pub const ALL: [Facet; 4] = [Facet::Rarity, Facet::Set, Facet::CardType, Facet::Color];

    pub fn name(&self) -> &'static str {
        match self {
            Facet::Rarity => "rarity",
            Facet::Set => "set",
            Facet::CardType => "card_type",
            Facet::Color => "color",
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetValue {
    #[default]
    All,
    Value(String),
}

impl FacetValue {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, FacetValue::All)
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            FacetValue::All => None,
            FacetValue::Value(v) => Some(v.as_str()),
        }
    }
}

impl From<String> for FacetValue {
    fn from(value: String) -> Self {
        if value == WILDCARD || value.is_empty() {
            FacetValue::All
        } else {
            FacetValue::Value(value)
        }
    }
}

impl From<&str> for FacetValue {
    fn from(value: &str) -> Self {
        FacetValue::from(value.to_string())
    }
}

impl From<FacetValue> for String {
    fn from(value: FacetValue) -> Self {
        match value {
            FacetValue::All => WILDCARD.to_string(),
            FacetValue::Value(v) => v,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub rarity: FacetValue,
    pub set: FacetValue,
    pub card_type: FacetValue,
    pub color: FacetValue,
}

impl FilterSelection {
    pub fn get(&self, facet: Facet) -> &FacetValue {
        match facet {
            Facet::Rarity => &self.rarity,
            Facet::Set => &self.set,
            Facet::CardType => &self.card_type,
            Facet::Color => &self.color,
        }
    }

    pub fn with(mut self, facet: Facet, value: impl Into<FacetValue>) -> Self {
        let value = value.into();
        match facet {
            Facet::Rarity => self.rarity = value,
            Facet::Set => self.set = value,
            Facet::CardType => self.card_type = value,
            Facet::Color => self.color = value,
        }
        self
    }

    pub fn is_wildcard(&self) -> bool {
        Facet::ALL.iter().all(|facet| self.get(*facet).is_wildcard())
    }
}
