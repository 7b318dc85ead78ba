//! Catalog client against a throwaway in-process catalog service.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
};
use backend::{
    api::{price::get_card_price, search::search_suggestions},
    catalog_utils::catalog_client::CatalogClient,
};
use common::{card_price::CardPriceRequest, search_query::SearchQuery};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct FakeCatalog {
    hits: Arc<AtomicUsize>,
    last_params: Arc<Mutex<HashMap<String, String>>>,
}

async fn suggestions(State(catalog): State<FakeCatalog>, Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    catalog.hits.fetch_add(1, Ordering::SeqCst);
    let page: u64 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    *catalog.last_params.lock().unwrap() = params;
    Json(json!({
        "results": [
            {
                "text": "Monkey.D.Luffy",
                "card_name": "Monkey.D.Luffy",
                "set_name": "Romance Dawn",
                "product_line": "One Piece Card Game",
                "image_url": null,
                "product_url": "https://example.com/product/1",
                "market_price": 2.5,
                "rarity": "Rare",
                "card_number": "OP01-024",
                "card_type": "Character",
                "color": "Red"
            }
        ],
        "total_results": 50,
        "page": page,
        "page_size": 24,
        "total_pages": 3,
        "has_next_page": page < 3,
        "has_previous_page": page > 1
    }))
}

async fn price(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "card_name": body["card_name"],
        "set_name": body["set_name"],
        "is_foil": body["is_foil"],
        "market_price": 12.75,
        "currency": "USD",
        "source_url": "https://example.com/search"
    }))
}

async fn spawn(router: Router) -> CatalogClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    CatalogClient::new(format!("http://{}", addr))
}

async fn spawn_fake_catalog() -> (CatalogClient, FakeCatalog) {
    let catalog = FakeCatalog::default();
    let router = Router::new()
        .route("/api/suggestions", get(suggestions))
        .route("/api/price", post(price))
        .with_state(catalog.clone());
    (spawn(router).await, catalog)
}

#[tokio::test]
async fn test_search_sends_normalized_query() {
    let (client, catalog) = spawn_fake_catalog().await;

    let query = SearchQuery::new("  luffy  ").with_page(2).with_page_size(200);
    let page = search_suggestions(&client, query).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next_page);
    assert!(page.has_previous_page);
    assert_eq!(page.results[0].rarity.as_deref(), Some("Rare"));

    let params = catalog.last_params.lock().unwrap().clone();
    assert_eq!(params.get("q").map(String::as_str), Some("luffy"));
    assert_eq!(params.get("page").map(String::as_str), Some("2"));
    assert_eq!(params.get("page_size").map(String::as_str), Some("50"));
    assert_eq!(catalog.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_short_query_never_reaches_catalog() {
    let (client, catalog) = spawn_fake_catalog().await;

    let page = search_suggestions(&client, SearchQuery::new("l")).await.unwrap();

    assert_eq!(page.total_results, 0);
    assert_eq!(page.total_pages, 0);
    assert!(!page.has_next_page);
    assert!(!page.has_previous_page);
    assert!(page.results.is_empty());
    assert_eq!(catalog.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_is_an_error() {
    let router = Router::new().route("/api/suggestions", get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }));
    let client = spawn(router).await;

    let err = search_suggestions(&client, SearchQuery::new("zoro")).await.unwrap_err();
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn test_malformed_response_is_an_error() {
    let router = Router::new().route("/api/suggestions", get(|| async { "<html>not json</html>" }));
    let client = spawn(router).await;

    assert!(search_suggestions(&client, SearchQuery::new("zoro")).await.is_err());
}

#[tokio::test]
async fn test_price_lookup_round_trip() {
    let (client, _catalog) = spawn_fake_catalog().await;

    let request = CardPriceRequest { card_name: "Nami".to_string(), set_name: "Romance Dawn".to_string(), is_foil: true };
    let response = get_card_price(&client, request).await.unwrap();

    assert_eq!(response.card_name, "Nami");
    assert_eq!(response.set_name, "Romance Dawn");
    assert!(response.is_foil);
    assert_eq!(response.market_price, 12.75);
    assert_eq!(response.currency, "USD");
}

#[tokio::test]
async fn test_invalid_price_request_is_rejected_locally() {
    // nothing listens here; validation must fail before any connection attempt
    let client = CatalogClient::new("http://127.0.0.1:9");
    let request = CardPriceRequest { card_name: String::new(), set_name: String::new(), is_foil: false };
    let err = get_card_price(&client, request).await.unwrap_err();
    assert!(err.to_string().contains("card name is required"));
}
