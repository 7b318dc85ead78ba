//! Price lookup request and response models.

use serde::{Deserialize, Serialize};

use crate::search_const::{DEFAULT_CURRENCY, MAX_CARD_FIELD_LENGTH};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CardPriceRequest {
    pub card_name: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub is_foil: bool,
}

impl CardPriceRequest {
    pub fn validate(&self) -> Result<(), CardPriceValidationError> {
        if self.card_name.trim().is_empty() {
            return Err(CardPriceValidationError::CardNameMissing);
        }
        if self.card_name.chars().count() > MAX_CARD_FIELD_LENGTH {
            return Err(CardPriceValidationError::CardNameTooLong);
        }
        if self.set_name.chars().count() > MAX_CARD_FIELD_LENGTH {
            return Err(CardPriceValidationError::SetNameTooLong);
        }
        Ok(())
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPriceResponse {
    pub card_name: String,
    pub set_name: String,
    pub is_foil: bool,
    pub market_price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub source_url: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPriceValidationError {
    CardNameMissing,
    CardNameTooLong,
    SetNameTooLong,
}

impl std::fmt::Display for CardPriceValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CardNameMissing => write!(f, "card name is required"),
            Self::CardNameTooLong => write!(f, "card name is longer than {} characters", MAX_CARD_FIELD_LENGTH),
            Self::SetNameTooLong => write!(f, "set name is longer than {} characters", MAX_CARD_FIELD_LENGTH),
        }
    }
}

impl std::error::Error for CardPriceValidationError {}


#[cfg(test)]
mod tests {
    use super::*;

    fn request(card_name: &str, set_name: &str) -> CardPriceRequest {
        CardPriceRequest { card_name: card_name.to_string(), set_name: set_name.to_string(), is_foil: false }
    }

    #[test]
    fn card_name_is_required() {
        assert_eq!(request("", "").validate(), Err(CardPriceValidationError::CardNameMissing));
        assert_eq!(request("   ", "").validate(), Err(CardPriceValidationError::CardNameMissing));
        assert_eq!(request("Nami", "").validate(), Ok(()));
    }

    #[test]
    fn fields_are_length_limited() {
        let long = "x".repeat(MAX_CARD_FIELD_LENGTH + 1);
        let max = "x".repeat(MAX_CARD_FIELD_LENGTH);
        assert_eq!(request(&long, "").validate(), Err(CardPriceValidationError::CardNameTooLong));
        assert_eq!(request("Nami", &long).validate(), Err(CardPriceValidationError::SetNameTooLong));
        assert_eq!(request(&max, &max).validate(), Ok(()));
    }

    #[test]
    fn currency_defaults_to_usd() {
        let json = r#"{"card_name":"Nami","set_name":"","is_foil":true,"market_price":3.5,"source_url":"https://example.com"}"#;
        let response: CardPriceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.currency, "USD");
        assert!(response.is_foil);
    }
}
