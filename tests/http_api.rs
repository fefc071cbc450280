//! Router-level tests: dispatch, status codes, and response envelopes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gamestore::db::{QueryClient, SqlValue, SqliteClient};
use gamestore::http_server::{HttpServer, HttpServerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> (Arc<SqliteClient>, Router) {
    let client = Arc::new(SqliteClient::open_in_memory().unwrap());
    client.apply_schema().unwrap();
    let router = HttpServer::new(HttpServerConfig::default(), client.clone()).router();
    (client, router)
}

fn seed_customer(client: &SqliteClient, id: i64, name: &str, email: &str) {
    client
        .execute(
            "INSERT INTO customers (customer_id, name, email) VALUES (?1, ?2, ?3)",
            &[
                SqlValue::from(id),
                SqlValue::from(name),
                SqlValue::from(email),
            ],
        )
        .unwrap();
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    // Extractor rejections produce plain-text bodies
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn sample_game(game_id: i64, name: &str) -> Value {
    json!({
        "game_id": game_id,
        "name": name,
        "release_year": 2018,
        "sales_price": 19.99,
        "cust_rating": 4.5,
        "age_rating": "E",
        "console": "Switch",
        "developer_id": 3,
        "distributor_id": 4
    })
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (_client, router) = test_app();
    let (status, body) = send(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn game_endpoints_cover_create_read_update_delete() {
    let (_client, router) = test_app();

    let (status, body) = send(&router, "POST", "/games", Some(sample_game(1, "Celeste"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);

    let (status, body) = send(&router, "GET", "/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["name"], "Celeste");

    let (status, body) = send(
        &router,
        "PUT",
        "/games/1/price",
        Some(json!({"sales_price": 9.99})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affected"], 1);

    let (status, body) = send(&router, "GET", "/games/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["sales_price"], 9.99);

    let (status, body) = send(&router, "DELETE", "/games/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affected"], 1);

    let (status, _body) = send(&router, "GET", "/games/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_game_returns_structured_404() {
    let (_client, router) = test_app();
    let (status, body) = send(&router, "GET", "/games/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn duplicate_game_id_returns_conflict() {
    let (_client, router) = test_app();
    let (status, _) = send(&router, "POST", "/games", Some(sample_game(1, "Celeste"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&router, "POST", "/games", Some(sample_game(1, "Celeste"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
    // The statement text stays server-side.
    assert!(!body["error"].as_str().unwrap().contains("INSERT"));
}

#[tokio::test]
async fn non_numeric_path_id_is_a_client_error() {
    let (_client, router) = test_app();
    let (status, _body) = send(&router, "GET", "/games/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn genre_and_developer_listings_dispatch() {
    let (client, router) = test_app();
    let mut game = sample_game(1, "Celeste");
    game["release_year"] = json!(1995);
    let (status, _) = send(&router, "POST", "/games", Some(game)).await;
    assert_eq!(status, StatusCode::CREATED);
    client
        .execute(
            "INSERT INTO genres (genre_id, name) VALUES (?1, ?2)",
            &[SqlValue::from(10), SqlValue::from("Platformer")],
        )
        .unwrap();
    client
        .execute(
            "INSERT INTO game_genres (game_id, genre_id) VALUES (?1, ?2)",
            &[SqlValue::from(1), SqlValue::from(10)],
        )
        .unwrap();

    let (status, body) = send(&router, "GET", "/genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = send(&router, "GET", "/genres/10/games", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["name"], "Celeste");

    let (status, body) = send(&router, "GET", "/games/developer/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);

    let (status, body) = send(&router, "GET", "/games/recent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn online_order_lifecycle_over_http() {
    let (client, router) = test_app();
    seed_customer(&client, 1, "Ada", "ada@example.com");

    let (status, body) = send(
        &router,
        "POST",
        "/orders/online",
        Some(json!({
            "customer_id": 1,
            "transaction_value": 59.99,
            "region": "Northeast",
            "postal_code": "02115",
            "state": "MA",
            "address": "360 Huntington Ave",
            "city": "Boston"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["order_id"].as_i64().unwrap();
    assert!(body["online_order_id"].as_i64().unwrap() > 0);

    let uri = format!("/orders/online/{}", order_id);
    let (status, body) = send(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Boston");

    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affected"], 1);

    let (status, _body) = send(&router, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn customer_order_endpoints_dispatch() {
    let (client, router) = test_app();
    seed_customer(&client, 1, "Ada", "ada@example.com");
    seed_customer(&client, 2, "Grace", "grace@example.com");

    let (status, body) = send(
        &router,
        "POST",
        "/orders/customers/1",
        Some(json!({"transaction_value": 19.99, "employee_id": 2})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order_id = body["id"].as_i64().unwrap();

    let (status, body) = send(&router, "GET", "/orders/customers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);

    let (status, body) = send(&router, "GET", "/orders/customers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["order_id"], order_id);

    let (status, body) = send(
        &router,
        "PUT",
        "/orders/gift",
        Some(json!({"order_id": order_id, "email": "grace@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affected"], 1);

    let (status, _body) = send(
        &router,
        "PUT",
        "/orders/gift",
        Some(json!({"order_id": order_id, "email": "nobody@example.com"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/orders/customers/2/{}", order_id);
    let (status, body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["affected"], 1);

    let (status, _body) = send(&router, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn order_for_unknown_customer_returns_conflict() {
    let (_client, router) = test_app();
    let (status, body) = send(
        &router,
        "POST",
        "/orders/customers/999",
        Some(json!({"transaction_value": 19.99})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);
}
