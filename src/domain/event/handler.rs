use axum::{
    extract::{
        rejection::{FormRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use validator::Validate;

use super::dto::{EventDetailResponse, EventForm, EventListResponse};
use super::filter::EventFilter;
use super::service::EventService;
use crate::domain::listing::{ListFilter, QueryParams};
use crate::domain::review::dto::ReviewForm;
use crate::domain::review::parent::ReviewParent;
use crate::global::routes;
use crate::state::AppState;
use crate::utils::auth::{require_login, MaybeUser};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 이벤트 목록 조회 API
///
/// 쿼리스트링(name, category, location, date_after, date_before, min_rating)으로 필터링합니다.
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessEventListResponse)
    ),
    tag = "Event"
)]
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<BaseResponse<EventListResponse>>, AppError> {
    let Query(params) = query?;
    let filter = EventFilter::from_query(&params);
    let events = EventService::list_events(&state, &filter).await?;

    Ok(Json(BaseResponse::success(EventListResponse {
        all_events: events.into_iter().map(Into::into).collect(),
        event_filter: filter,
    })))
}

/// 이벤트 상세 조회 API
///
/// 이벤트 정보, 연결된 리뷰, 리뷰 작성 폼을 함께 반환합니다.
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "이벤트 ID")
    ),
    responses(
        (status = 200, description = "상세 조회 성공", body = SuccessEventDetailResponse),
        (status = 404, description = "존재하지 않는 이벤트", body = ErrorResponse)
    ),
    tag = "Event"
)]
pub async fn event_detail(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BaseResponse<EventDetailResponse>>, AppError> {
    // 정수가 아닌 ID는 존재하지 않는 페이지로 취급
    let Path(event_id) =
        path.map_err(|_| AppError::NotFound("존재하지 않는 페이지입니다.".to_string()))?;
    let (event, reviews) = EventService::get_event_detail(&state, event_id).await?;

    Ok(Json(BaseResponse::success(EventDetailResponse {
        form: ReviewForm::descriptor(Some(ReviewParent::Event(event.event_id))),
        event: event.into(),
        reviews: reviews.into_iter().map(Into::into).collect(),
    })))
}

/// 이벤트 등록 폼 조회 API
#[utoipa::path(
    get,
    path = "/events/new",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "폼 조회 성공", body = SuccessFormResponse),
        (status = 303, description = "비로그인 사용자 로그인 페이지로 이동")
    ),
    tag = "Event"
)]
pub async fn new_event_form(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
) -> Result<Response, AppError> {
    if let Err(denied) = require_login(user).resolve(&state.config.login_url, &uri) {
        return Ok(denied);
    }

    Ok(Json(BaseResponse::success(EventForm::descriptor(routes::CREATE_NEW_EVENT))).into_response())
}

/// 이벤트 등록 API
#[utoipa::path(
    post,
    path = "/events/new",
    request_body(content = EventForm, content_type = "application/x-www-form-urlencoded"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 303, description = "등록 성공 시 등록 폼, 비로그인 시 로그인 페이지로 이동"),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    ),
    tag = "Event"
)]
pub async fn create_event(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
    form: Result<Form<EventForm>, FormRejection>,
) -> Result<Response, AppError> {
    if let Err(denied) = require_login(user).resolve(&state.config.login_url, &uri) {
        return Ok(denied);
    }

    let Form(form) = form?;
    form.validate()?;

    EventService::create_event(&state, form).await?;

    Ok(Redirect::to(routes::CREATE_NEW_EVENT).into_response())
}
