use axum::{
    extract::{rejection::FormRejection, State},
    http::{header::REFERER, HeaderMap, Uri},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use validator::Validate;

use super::dto::ReviewForm;
use super::service::ReviewService;
use crate::state::AppState;
use crate::utils::auth::{require_login, MaybeUser};
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 리뷰 작성 폼 조회 API
#[utoipa::path(
    get,
    path = "/reviews/new",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "폼 조회 성공", body = SuccessFormResponse),
        (status = 303, description = "비로그인 사용자 로그인 페이지로 이동")
    ),
    tag = "Review"
)]
pub async fn new_review_form(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
) -> Result<Response, AppError> {
    if let Err(denied) = require_login(user).resolve(&state.config.login_url, &uri) {
        return Ok(denied);
    }

    Ok(Json(BaseResponse::success(ReviewForm::descriptor(None))).into_response())
}

/// 리뷰 작성 API
///
/// 리뷰를 저장하고 `review_model`이 가리키는 부모에 연결한 뒤,
/// 요청을 보낸 페이지(Referer)로 리다이렉트합니다.
#[utoipa::path(
    post,
    path = "/reviews/new",
    request_body(content = ReviewForm, content_type = "application/x-www-form-urlencoded"),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 303, description = "작성 성공 시 Referer, 비로그인 시 로그인 페이지로 이동"),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 이벤트", body = ErrorResponse)
    ),
    tag = "Review"
)]
pub async fn create_review(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    uri: Uri,
    headers: HeaderMap,
    form: Result<Form<ReviewForm>, FormRejection>,
) -> Result<Response, AppError> {
    let user = match require_login(user).resolve(&state.config.login_url, &uri) {
        Ok(user) => user,
        Err(denied) => return Ok(denied),
    };

    let Form(form) = form?;
    form.validate()?;

    let referer = headers
        .get(REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::MissingReferer("리뷰 작성 후 돌아갈 페이지(Referer)가 없습니다.".to_string())
        })?;

    ReviewService::create_review(&state, user.user_id, form).await?;

    Ok(Redirect::to(&referer).into_response())
}
