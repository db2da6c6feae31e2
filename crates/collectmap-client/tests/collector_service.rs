//! Integration tests for `CollectorClient` against a local mock server.
//!
//! Uses `wiremock` so no real network traffic is made. Covers the happy
//! paths for both endpoints, the drop-malformed-record batch semantics,
//! and every error variant the fetch methods can produce.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use collectmap_client::{ClientError, CollectorClient, TransactionQuery};
use collectmap_core::DateRange;

/// Builds a `CollectorClient` suitable for tests: 5-second timeout,
/// descriptive UA.
fn test_client(server: &MockServer) -> CollectorClient {
    CollectorClient::new(&server.uri(), 5, "collectmap-test/0.1")
        .expect("failed to build test CollectorClient")
}

fn query(category: Option<&str>) -> TransactionQuery {
    TransactionQuery {
        range: DateRange::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        ),
        region: "Lagos".to_string(),
        category: category.map(str::to_string),
        min_weight: None,
        max_weight: None,
    }
}

/// Minimal valid transaction record fixture.
fn transaction_json(material: &str, lat: f64) -> serde_json::Value {
    json!({
        "_id": {
            "lat": lat,
            "long": 3.37,
            "material": material,
            "address": "12 Marina Rd"
        },
        "quantity": 42.5
    })
}

// ---------------------------------------------------------------------------
// Categories endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_categories_returns_all_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/category/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "name": "Plastic", "value": "cat-1" },
            { "name": "Metal" }
        ])))
        .mount(&server)
        .await;

    let categories = test_client(&server).fetch_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Plastic");
    assert_eq!(categories[0].value.as_deref(), Some("cat-1"));
    assert_eq!(categories[1].name, "Metal");
    assert!(categories[1].value.is_none());
}

#[tokio::test]
async fn fetch_categories_keeps_nameless_records_as_empty_names() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/category/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([
            { "value": "cat-9" },
            { "name": "Glass" }
        ])))
        .mount(&server)
        .await;

    // Filtering by name happens in legend assembly, not here.
    let categories = test_client(&server).fetch_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "");
}

#[tokio::test]
async fn fetch_categories_non_2xx_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/category/all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_categories().await.unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 503, .. }),
        "expected UnexpectedStatus(503), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_categories_malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/category/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server).fetch_categories().await.unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}

// ---------------------------------------------------------------------------
// Transactions endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_transactions_sends_date_and_region_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/heatmap/transactions"))
        .and(query_param("startDate", "2025-01-01"))
        .and(query_param("endDate", "2025-06-30"))
        .and(query_param("state", "Lagos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let points = test_client(&server)
        .fetch_transactions(&query(None))
        .await
        .unwrap();
    assert!(points.is_empty());
}

#[tokio::test]
async fn fetch_transactions_sends_category_when_selected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/heatmap/transactions"))
        .and(query_param("category", "Metal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [transaction_json("Metal", 6.52)]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let points = test_client(&server)
        .fetch_transactions(&query(Some("Metal")))
        .await
        .unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].material, "Metal");
    assert_eq!(points[0].weight, Some(42.5));
}

#[tokio::test]
async fn fetch_transactions_drops_malformed_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/heatmap/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "data": [
                transaction_json("Plastic", 6.51),
                transaction_json("Metal", 6.52),
                { "_id": { "long": 3.37, "material": "Glass", "address": "x" } },
                transaction_json("Glass", 6.53),
                transaction_json("Paper", 6.54)
            ]
        })))
        .mount(&server)
        .await;

    let points = test_client(&server)
        .fetch_transactions(&query(None))
        .await
        .unwrap();
    assert_eq!(points.len(), 4, "1 of 5 records is missing its latitude");
}

#[tokio::test]
async fn fetch_transactions_non_2xx_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/heatmap/transactions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_transactions(&query(None))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ClientError::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_transactions_missing_envelope_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/heatmap/transactions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!([1, 2, 3])))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .fetch_transactions(&query(None))
        .await
        .unwrap_err();
    assert!(
        matches!(err, ClientError::Deserialize { .. }),
        "expected Deserialize, got: {err:?}"
    );
}
