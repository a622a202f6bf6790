use axum::{
    extract::{rejection::FormRejection, State},
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use validator::Validate;

use super::dto::ThingToDoListResponse;
use super::service::ThingToDoService;
use crate::domain::event::dto::EventForm;
use crate::global::routes;
use crate::state::AppState;
use crate::utils::auth::{require_permission, MaybeUser, ADD_RESTAURANT_PERMISSION};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 할 거리 목록 조회 API
#[utoipa::path(
    get,
    path = "/things-to-do",
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessThingToDoListResponse)
    ),
    tag = "ThingToDo"
)]
pub async fn list_things_to_do(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<ThingToDoListResponse>>, AppError> {
    let rows = ThingToDoService::list_things_to_do(&state).await?;

    Ok(Json(BaseResponse::success(ThingToDoListResponse {
        all_ttd: rows.into_iter().map(Into::into).collect(),
    })))
}

/// 할 거리 등록 폼 조회 API
#[utoipa::path(
    get,
    path = "/things-to-do/new",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "폼 조회 성공", body = SuccessFormResponse),
        (status = 303, description = "비로그인 사용자 로그인 페이지로 이동"),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "ThingToDo"
)]
pub async fn new_thing_to_do_form(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
) -> Result<Response, AppError> {
    if let Err(denied) = require_permission(user, ADD_RESTAURANT_PERMISSION)
        .resolve(&state.config.login_url, &uri)
    {
        return Ok(denied);
    }

    Ok(Json(BaseResponse::success(EventForm::descriptor(routes::CREATE_NEW_TTD))).into_response())
}

/// 할 거리 등록 API
#[utoipa::path(
    post,
    path = "/things-to-do/new",
    request_body(content = EventForm, content_type = "application/x-www-form-urlencoded"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 303, description = "등록 성공 시 등록 폼, 비로그인 시 로그인 페이지로 이동"),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "ThingToDo"
)]
pub async fn create_thing_to_do(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
    form: Result<Form<EventForm>, FormRejection>,
) -> Result<Response, AppError> {
    if let Err(denied) = require_permission(user, ADD_RESTAURANT_PERMISSION)
        .resolve(&state.config.login_url, &uri)
    {
        return Ok(denied);
    }

    let Form(form) = form?;
    form.validate()?;

    ThingToDoService::create_thing_to_do(&state, form).await?;

    Ok(Redirect::to(routes::CREATE_NEW_TTD).into_response())
}
