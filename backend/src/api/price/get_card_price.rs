use common::card_price::{CardPriceRequest, CardPriceResponse};
use tracing::info;

use crate::catalog_utils::catalog_client::CatalogClient;

pub async fn get_card_price(client: &CatalogClient, request: CardPriceRequest) -> anyhow::Result<CardPriceResponse> {
    request.validate()?;
    let response: CardPriceResponse = client.post_json("/api/price", &request).await?;
    info!("Price for {:?} ({:?}, foil={}): {} {}", response.card_name, response.set_name, response.is_foil, response.market_price, response.currency);
    Ok(response)
}
