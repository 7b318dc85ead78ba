//! Client side of the price lookup.

use common::card_price::{CardPriceRequest, CardPriceResponse};

pub trait PriceGateway {
    fn get_market_price(&self, request: CardPriceRequest) -> impl Future<Output = anyhow::Result<CardPriceResponse>>;
}


#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct BackendPriceGateway {
    client: backend::catalog_utils::catalog_client::CatalogClient,
}

#[cfg(feature = "server")]
impl BackendPriceGateway {
    pub fn new(client: backend::catalog_utils::catalog_client::CatalogClient) -> Self {
        Self { client }
    }

    pub fn from_env() -> Self {
        Self::new(backend::catalog_utils::catalog_client::get_catalog_client())
    }
}

#[cfg(feature = "server")]
impl PriceGateway for BackendPriceGateway {
    async fn get_market_price(&self, request: CardPriceRequest) -> anyhow::Result<CardPriceResponse> {
        backend::api::price::get_card_price(&self.client, request).await
    }
}
