pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{event, health, restaurant, review, thing_to_do};
use crate::global::{middleware::request_id_middleware, routes};

pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::event::handler::list_events,
        domain::event::handler::event_detail,
        domain::event::handler::new_event_form,
        domain::event::handler::create_event,
        domain::restaurant::handler::list_restaurants,
        domain::restaurant::handler::new_restaurant_form,
        domain::restaurant::handler::create_restaurant,
        domain::thing_to_do::handler::list_things_to_do,
        domain::thing_to_do::handler::new_thing_to_do_form,
        domain::thing_to_do::handler::create_thing_to_do,
        domain::review::handler::new_review_form,
        domain::review::handler::create_review,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            domain::form::FormDescriptor,
            domain::form::FormField,
            domain::listing::PageInfo,
            domain::event::dto::EventForm,
            domain::event::dto::EventItem,
            domain::event::dto::EventListResponse,
            domain::event::dto::EventDetailResponse,
            domain::event::dto::SuccessEventListResponse,
            domain::event::dto::SuccessEventDetailResponse,
            domain::event::dto::SuccessFormResponse,
            domain::event::filter::EventFilter,
            domain::restaurant::dto::RestaurantItem,
            domain::restaurant::dto::RestaurantListResponse,
            domain::restaurant::dto::SuccessRestaurantListResponse,
            domain::restaurant::filter::RestaurantFilter,
            domain::thing_to_do::dto::ThingToDoListResponse,
            domain::thing_to_do::dto::SuccessThingToDoListResponse,
            domain::review::dto::ReviewForm,
            domain::review::dto::ReviewItem,
            utils::response::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "헬스체크"),
        (name = "Event", description = "이벤트 목록/상세/등록"),
        (name = "Restaurant", description = "식당 목록/등록"),
        (name = "ThingToDo", description = "할 거리 목록/등록"),
        (name = "Review", description = "리뷰 작성")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HEALTH, get(health::handler::health_check))
        // 이벤트
        .route(routes::LIST_OF_EVENTS, get(event::handler::list_events))
        .route(
            routes::CREATE_NEW_EVENT,
            get(event::handler::new_event_form).post(event::handler::create_event),
        )
        .route(routes::EVENT_DETAILS, get(event::handler::event_detail))
        // 식당
        .route(
            routes::LIST_OF_RESTAURANTS,
            get(restaurant::handler::list_restaurants),
        )
        .route(
            routes::CREATE_NEW_RESTAURANT,
            get(restaurant::handler::new_restaurant_form)
                .post(restaurant::handler::create_restaurant),
        )
        // 할 거리
        .route(routes::LIST_OF_TTD, get(thing_to_do::handler::list_things_to_do))
        .route(
            routes::CREATE_NEW_TTD,
            get(thing_to_do::handler::new_thing_to_do_form)
                .post(thing_to_do::handler::create_thing_to_do),
        )
        // 리뷰
        .route(
            routes::CREATE_REVIEW,
            get(review::handler::new_review_form).post(review::handler::create_review),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
