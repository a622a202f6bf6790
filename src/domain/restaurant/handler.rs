use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::Uri,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use validator::Validate;

use super::dto::RestaurantListResponse;
use super::filter::RestaurantFilter;
use super::service::RestaurantService;
use crate::domain::event::dto::EventForm;
use crate::domain::listing::{ListFilter, QueryParams};
use crate::global::routes;
use crate::state::AppState;
use crate::utils::auth::{require_permission, MaybeUser, ADD_RESTAURANT_PERMISSION};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 식당 목록 조회 API
///
/// 쿼리스트링(name, category, location)으로 필터링하며 5개씩 페이지를 나눕니다.
/// `page`가 정수가 아니면 1페이지, 범위를 벗어나면 마지막 페이지를 반환합니다.
#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "목록 조회 성공", body = SuccessRestaurantListResponse)
    ),
    tag = "Restaurant"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<BaseResponse<RestaurantListResponse>>, AppError> {
    let Query(params) = query?;
    let filter = RestaurantFilter::from_query(&params);
    let page = RestaurantService::list_restaurants(
        &state,
        &filter,
        params.get("page").map(String::as_str),
    )
    .await?;

    Ok(Json(BaseResponse::success(RestaurantListResponse {
        all_restaurants: page.items.into_iter().map(Into::into).collect(),
        filter,
        page: page.info,
    })))
}

/// 식당 등록 폼 조회 API
#[utoipa::path(
    get,
    path = "/restaurants/new",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "폼 조회 성공", body = SuccessFormResponse),
        (status = 303, description = "비로그인 사용자 로그인 페이지로 이동"),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn new_restaurant_form(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
) -> Result<Response, AppError> {
    if let Err(denied) = require_permission(user, ADD_RESTAURANT_PERMISSION)
        .resolve(&state.config.login_url, &uri)
    {
        return Ok(denied);
    }

    Ok(
        Json(BaseResponse::success(EventForm::descriptor(
            routes::CREATE_NEW_RESTAURANT,
        )))
        .into_response(),
    )
}

/// 식당 등록 API
#[utoipa::path(
    post,
    path = "/restaurants/new",
    request_body(content = EventForm, content_type = "application/x-www-form-urlencoded"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 303, description = "등록 성공 시 등록 폼, 비로그인 시 로그인 페이지로 이동"),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 403, description = "권한 없음", body = ErrorResponse)
    ),
    tag = "Restaurant"
)]
pub async fn create_restaurant(
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

    RestaurantService::create_restaurant(&state, form).await?;

    Ok(Redirect::to(routes::CREATE_NEW_RESTAURANT).into_response())
}
