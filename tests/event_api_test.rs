//! 이벤트 목록/상세/등록 API 테스트
//!
//! 테스트 대상:
//! - GET /events (필터, 중복 제거)
//! - GET /events/{id}
//! - GET, POST /events/new

mod common;

use axum::http::StatusCode;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::Value;

use common::{body_json, get, location, post_form, seed_event, seed_event_review, setup, token_for};
use trip::domain::event::entity::event;

fn event_names(json: &Value) -> Vec<String> {
    json["result"]["allEvents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

// ============== 목록 조회 ==============

#[tokio::test]
async fn should_list_all_events_without_filter() {
    // Arrange
    let app = setup().await;
    seed_event(&app.state, "Jazz Night", "music", (2026, 6, 1)).await;
    seed_event(&app.state, "Food Market", "food", (2026, 7, 1)).await;

    // Act
    let response = app.send(get("/events", None)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], true);
    assert_eq!(event_names(&json), vec!["Jazz Night", "Food Market"]);
}

#[tokio::test]
async fn should_filter_events_by_category_and_echo_filter() {
    // Arrange
    let app = setup().await;
    seed_event(&app.state, "Jazz Night", "music", (2026, 6, 1)).await;
    seed_event(&app.state, "Food Market", "food", (2026, 7, 1)).await;

    // Act
    let response = app.send(get("/events?category=music&foo=bar", None)).await;

    // Assert
    let json = body_json(response).await;
    assert_eq!(event_names(&json), vec!["Jazz Night"]);
    assert_eq!(json["result"]["eventFilter"]["category"], "music");
    assert!(json["result"]["eventFilter"]["name"].is_null());
}

#[tokio::test]
async fn should_filter_events_by_date_range() {
    let app = setup().await;
    seed_event(&app.state, "Spring", "music", (2026, 4, 1)).await;
    seed_event(&app.state, "Summer", "music", (2026, 7, 1)).await;
    seed_event(&app.state, "Winter", "music", (2026, 12, 1)).await;

    let response = app
        .send(get("/events?date_after=2026-05-01&date_before=2026-10-31", None))
        .await;

    let json = body_json(response).await;
    assert_eq!(event_names(&json), vec!["Summer"]);
}

#[tokio::test]
async fn should_ignore_malformed_filter_values() {
    let app = setup().await;
    seed_event(&app.state, "Jazz Night", "music", (2026, 6, 1)).await;
    seed_event(&app.state, "Food Market", "food", (2026, 7, 1)).await;

    let response = app
        .send(get("/events?date_after=tomorrow&min_rating=great", None))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(event_names(&json).len(), 2);
    assert!(json["result"]["eventFilter"]["min_rating"].is_null());
}

#[tokio::test]
async fn should_not_duplicate_events_matching_several_reviews() {
    // Arrange: 조건을 만족하는 리뷰가 여러 개인 이벤트
    let app = setup().await;
    let popular = seed_event(&app.state, "Popular", "music", (2026, 6, 1)).await;
    let mixed = seed_event(&app.state, "Mixed", "music", (2026, 6, 2)).await;
    let poor = seed_event(&app.state, "Poor", "music", (2026, 6, 3)).await;
    seed_event_review(&app.state, popular.event_id, 5).await;
    seed_event_review(&app.state, popular.event_id, 4).await;
    seed_event_review(&app.state, popular.event_id, 5).await;
    seed_event_review(&app.state, mixed.event_id, 1).await;
    seed_event_review(&app.state, mixed.event_id, 4).await;
    seed_event_review(&app.state, poor.event_id, 2).await;

    // Act
    let response = app.send(get("/events?min_rating=4", None)).await;

    // Assert
    let json = body_json(response).await;
    assert_eq!(event_names(&json), vec!["Popular", "Mixed"]);
    assert_eq!(json["result"]["eventFilter"]["min_rating"], 4);
}

// ============== 상세 조회 ==============

#[tokio::test]
async fn should_return_event_detail_with_reviews_and_review_form() {
    // Arrange
    let app = setup().await;
    let event = seed_event(&app.state, "Jazz Night", "music", (2026, 6, 1)).await;
    seed_event_review(&app.state, event.event_id, 5).await;

    // Act
    let response = app
        .send(get(&format!("/events/{}", event.event_id), None))
        .await;

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let result = &json["result"];
    assert_eq!(result["event"]["eventId"], event.event_id);
    assert_eq!(result["event"]["date"], "2026-06-01");
    assert_eq!(result["reviews"].as_array().unwrap().len(), 1);
    assert_eq!(result["reviews"][0]["rating"], 5);
    assert_eq!(result["form"]["action"], "/reviews/new");

    let hidden: Vec<&Value> = result["form"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|f| f["inputType"] == "hidden")
        .collect();
    assert_eq!(hidden.len(), 2);
    assert_eq!(hidden[0]["value"], "event");
    assert_eq!(hidden[1]["value"], event.event_id.to_string());
}

#[tokio::test]
async fn should_return_404_for_unknown_event() {
    let app = setup().await;

    let response = app.send(get("/events/999", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["isSuccess"], false);
    assert_eq!(json["code"], "EVENT4041");
}

// ============== 등록 ==============

#[tokio::test]
async fn should_redirect_anonymous_user_to_login_without_creating_event() {
    // Arrange
    let app = setup().await;
    let body = "name=Jazz&category=music&location=Seoul&date=2026-06-01";

    // Act
    let response = app.send(post_form("/events/new", body, None, None)).await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/accounts/login/?next=%2Fevents%2Fnew");
    let count = event::Entity::find().count(&app.state.db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn should_create_event_and_redirect_to_create_page() {
    // Arrange
    let app = setup().await;
    let token = token_for(1, &[]);
    let body = "name=Jazz+Night&description=live&category=music&location=Seoul&date=2026-06-01";

    // Act
    let response = app
        .send(post_form("/events/new", body, Some(&token), None))
        .await;

    // Assert
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/events/new");

    let events = event::Entity::find().all(&app.state.db).await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, "Jazz Night");
    assert_eq!(events[0].description, "live");
}

#[tokio::test]
async fn should_return_400_when_event_form_invalid() {
    let app = setup().await;
    let token = token_for(1, &[]);

    let response = app
        .send(post_form(
            "/events/new",
            "name=&category=music&location=Seoul&date=2026-06-01",
            Some(&token),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "COMMON400");
    assert!(json["message"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn should_return_400_when_event_date_malformed() {
    let app = setup().await;
    let token = token_for(1, &[]);

    let response = app
        .send(post_form(
            "/events/new",
            "name=Jazz&category=music&location=Seoul&date=June",
            Some(&token),
            None,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let count = event::Entity::find().count(&app.state.db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn should_return_event_form_descriptor_for_logged_in_user() {
    let app = setup().await;
    let token = token_for(1, &[]);

    let response = app.send(get("/events/new", Some(&token))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["action"], "/events/new");
    assert_eq!(json["result"]["method"], "POST");
    assert_eq!(json["result"]["fields"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn should_treat_invalid_token_as_anonymous() {
    let app = setup().await;

    let response = app.send(get("/events/new", Some("not-a-jwt"))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/accounts/login/"));
}

#[tokio::test]
async fn should_return_404_for_non_numeric_event_id() {
    let app = setup().await;

    let response = app.send(get("/events/jazz", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "COMMON404");
}

#[tokio::test]
async fn should_match_wildcard_characters_in_name_literally() {
    // Arrange
    let app = setup().await;
    seed_event(&app.state, "Jazz Night", "music", (2026, 6, 1)).await;
    seed_event(&app.state, "Food_Fair", "food", (2026, 6, 2)).await;
    seed_event(&app.state, "100% Fun", "kids", (2026, 6, 3)).await;

    // Act
    let underscore = body_json(app.send(get("/events?name=_", None)).await).await;
    let percent = body_json(app.send(get("/events?name=%25", None)).await).await;

    // Assert
    assert_eq!(event_names(&underscore), vec!["Food_Fair"]);
    assert_eq!(event_names(&percent), vec!["100% Fun"]);
}
