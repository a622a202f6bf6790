mod common;

use axum::http::StatusCode;

use common::{body_json, get, setup};

#[tokio::test]
async fn should_report_database_status() {
    let app = setup().await;

    let response = app.send(get("/health", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let json = body_json(response).await;
    assert_eq!(json["checks"]["database"]["status"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn should_serve_openapi_document() {
    let app = setup().await;

    let response = app.send(get("/api-docs/openapi.json", None)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/reviews/new"].is_object());
    assert!(json["paths"]["/events/{event_id}"].is_object());
}
