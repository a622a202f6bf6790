//! 통합 테스트 공통 헬퍼
//!
//! 인메모리 SQLite에 스키마를 만들고 실제 라우터를 `oneshot`으로 호출한다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};
use serde_json::Value;
use tower::ServiceExt;

use trip::config::{sync_schema, AppConfig};
use trip::domain::event::entity::{event, event_review};
use trip::domain::restaurant::entity::restaurant;
use trip::domain::review::entity::review;
use trip::utils::jwt::encode_token;
use trip::{app, AppState};

pub const TEST_SECRET: &str = "test-secret";
pub const LOGIN_URL: &str = "/accounts/login/";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn setup() -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // 인메모리 DB는 커넥션마다 분리되므로 하나만 유지한다
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    sync_schema(&db).await.unwrap();

    let state = AppState {
        db,
        config: AppConfig {
            server_port: 0,
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: TEST_SECRET.to_string(),
            login_url: LOGIN_URL.to_string(),
        },
    };

    TestApp {
        router: app(state.clone()),
        state,
    }
}

pub fn token_for(user_id: i64, permissions: &[&str]) -> String {
    encode_token(
        user_id.to_string(),
        permissions.iter().map(|p| p.to_string()).collect(),
        TEST_SECRET,
        3600,
    )
    .unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(
    uri: &str,
    body: &str,
    token: Option<&str>,
    referer: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

// ============== 시드 데이터 ==============

pub async fn seed_event(
    state: &AppState,
    name: &str,
    category: &str,
    date: (i32, u32, u32),
) -> event::Model {
    event::ActiveModel {
        name: Set(name.to_string()),
        description: Set(String::new()),
        category: Set(category.to_string()),
        location: Set("Seoul".to_string()),
        date: Set(NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .unwrap()
}

pub async fn seed_restaurant(state: &AppState, name: &str, category: &str) -> restaurant::Model {
    restaurant::ActiveModel {
        name: Set(name.to_string()),
        description: Set(String::new()),
        category: Set(category.to_string()),
        location: Set("Busan".to_string()),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .unwrap()
}

/// 이벤트에 연결된 리뷰 생성
pub async fn seed_event_review(state: &AppState, event_id: i64, rating: i32) -> review::Model {
    let review = review::ActiveModel {
        user_id: Set(1),
        rating: Set(rating),
        content: Set(format!("{} stars", rating)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .unwrap();

    event_review::ActiveModel {
        event_id: Set(event_id),
        review_id: Set(review.review_id),
    }
    .insert(&state.db)
    .await
    .unwrap();

    review
}
