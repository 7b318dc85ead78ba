//! Client side of the catalog search.

use common::{search_query::SearchQuery, search_result::SearchResultPage};

/// Anything that can answer a paged catalog search.
pub trait SearchGateway {
    fn search(&self, query: SearchQuery) -> impl Future<Output = anyhow::Result<SearchResultPage>>;
}

/// Short queries are answered locally with an empty page and never reach the gateway.
pub async fn get_suggestions<G: SearchGateway>(gateway: &G, query: SearchQuery) -> anyhow::Result<SearchResultPage> {
    if !query.is_searchable() {
        return Ok(SearchResultPage::empty(query.page, query.page_size));
    }
    gateway.search(query).await
}


#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct BackendSearchGateway {
    client: backend::catalog_utils::catalog_client::CatalogClient,
}

#[cfg(feature = "server")]
impl BackendSearchGateway {
    pub fn new(client: backend::catalog_utils::catalog_client::CatalogClient) -> Self {
        Self { client }
    }

    pub fn from_env() -> Self {
        Self::new(backend::catalog_utils::catalog_client::get_catalog_client())
    }
}

#[cfg(feature = "server")]
impl SearchGateway for BackendSearchGateway {
    async fn search(&self, query: SearchQuery) -> anyhow::Result<SearchResultPage> {
        backend::api::search::search_suggestions(&self.client, query).await
    }
}
