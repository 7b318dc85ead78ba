//! HTTP access to the card catalog service.

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:8001";

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

pub fn get_catalog_client() -> CatalogClient {
    CatalogClient::from_env()
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client: reqwest::Client::new() }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("CATALOG_URL").unwrap_or(DEFAULT_CATALOG_URL.to_string()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("CATALOG GET {} {:?}", url, params);
        let t0 = std::time::Instant::now();
        let response = self.client.get(url).query(params).send().await?;
        let response_txt = read_response_text(response).await?;
        info!("CATALOG RESPONSE {}: len = {} ({}ms)", path, response_txt.len(), t0.elapsed().as_millis());
        let response: T = serde_json::from_str(&response_txt)?;
        Ok(response)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> anyhow::Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("CATALOG POST {}", url);
        let t0 = std::time::Instant::now();
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_string(body)?)
            .send()
            .await?;
        let response_txt = read_response_text(response).await?;
        info!("CATALOG RESPONSE {}: len = {} ({}ms)", path, response_txt.len(), t0.elapsed().as_millis());
        let response: T = serde_json::from_str(&response_txt)?;
        Ok(response)
    }
}

async fn read_response_text(response: reqwest::Response) -> anyhow::Result<String> {
    let status = response.status();
    let response_txt = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("Error: {}: {}", status, response_txt);
    }
    Ok(response_txt)
}
