//! Paged catalog search for card listings.

use common::{search_query::SearchQuery, search_result::SearchResultPage};
use tracing::{info, warn};

use crate::catalog_utils::catalog_client::CatalogClient;

pub async fn search_suggestions(client: &CatalogClient, query: SearchQuery) -> anyhow::Result<SearchResultPage> {
    let query = query.normalized();
    if !query.is_searchable() {
        // too short to be worth a round-trip
        return Ok(SearchResultPage::empty(query.page, query.page_size));
    }

    let params = [
        ("q", query.query_string.clone()),
        ("page", query.page.to_string()),
        ("page_size", query.page_size.to_string()),
    ];
    let page: SearchResultPage = client.get_json("/api/suggestions", &params).await?;

    if !page.is_consistent() {
        warn!(
            "Catalog page counters disagree for {:?} page {}: total_results={} page_size={} total_pages={} has_next={} has_prev={}",
            query.query_string, page.page, page.total_results, page.page_size, page.total_pages, page.has_next_page, page.has_previous_page,
        );
    }
    if page.page != query.page {
        warn!("Catalog answered page {} for requested page {}", page.page, query.page);
    }
    info!("Search {:?} page {}: {} results of {}", query.query_string, page.page, page.results.len(), page.total_results);
    Ok(page)
}
