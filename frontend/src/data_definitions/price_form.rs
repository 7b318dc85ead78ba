//! State definitions for the price lookup form.

use common::{
    card_price::{CardPriceRequest, CardPriceResponse},
    search_const::{DEFAULT_CURRENCY, PRICE_LOOKUP_FAILED_MESSAGE},
    search_result::SearchResultItem,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceForm {
    pub card_name: String,
    pub set_name: String,
    pub is_foil: bool,
}

impl PriceForm {
    pub fn to_request(&self) -> CardPriceRequest {
        CardPriceRequest {
            card_name: self.card_name.clone(),
            set_name: self.set_name.clone(),
            is_foil: self.is_foil,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.to_request().validate().is_ok()
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct PriceLookupState {
    pub form: PriceForm,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub market_price: Option<f64>,
    pub currency: String,
}

impl Default for PriceLookupState {
    fn default() -> Self {
        Self {
            form: PriceForm::default(),
            is_loading: false,
            error_message: None,
            market_price: None,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl PriceLookupState {
    pub fn is_submit_disabled(&self) -> bool {
        !self.form.is_valid() || self.is_loading
    }

    pub fn with_form(mut self, form: PriceForm) -> Self {
        self.form = form;
        self
    }

    /// Copies a search result's card and set name into the form. The foil flag is kept.
    pub fn select_card(mut self, item: &SearchResultItem) -> Self {
        self.form.card_name = item.card_name.clone();
        self.form.set_name = item.set_name.clone().unwrap_or_default();
        self
    }

    /// Returns the request to send, or `None` if the form is invalid.
    pub fn submit(mut self) -> (Self, Option<CardPriceRequest>) {
        let request = self.form.to_request();
        if request.validate().is_err() {
            return (self, None);
        }
        self.is_loading = true;
        self.error_message = None;
        self.market_price = None;
        (self, Some(request))
    }

    pub fn complete(mut self, outcome: anyhow::Result<CardPriceResponse>) -> Self {
        self.is_loading = false;
        match outcome {
            Ok(response) => {
                self.market_price = Some(response.market_price);
                self.currency = response.currency;
            }
            Err(err) => {
                warn!("Price lookup for {:?} failed: {:#}", self.form.card_name, err);
                self.error_message = Some(PRICE_LOOKUP_FAILED_MESSAGE.to_string());
            }
        }
        self
    }
}
