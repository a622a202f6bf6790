use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        Uri,
    },
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_token, Claims};

/// access token 쿠키 이름
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// 식당/할 거리 등록 권한
pub const ADD_RESTAURANT_PERMISSION: &str = "trip.add_restaurant";

/// 요청을 보낸 로그인 사용자
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub user_id: i64,
    pub permissions: Vec<String>,
}

impl CurrentUser {
    pub fn has_perm(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("유효하지 않은 사용자 ID입니다.".to_string()))?;

        Ok(Self {
            user_id,
            permissions: claims.permissions,
        })
    }
}

/// 인증 정보를 선택적으로 추출하는 Extractor
///
/// 토큰이 없거나 유효하지 않으면 익명 사용자(`None`)로 취급합니다.
/// 접근 제어는 핸들러에서 [`require_login`], [`require_permission`]으로 수행합니다.
pub struct MaybeUser(pub Option<CurrentUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = match extract_token(parts) {
            Ok(token) => decode_token(&token, &state.config.jwt_secret)
                .and_then(CurrentUser::try_from)
                .map_err(|e| tracing::debug!("Ignoring credentials: {}", e.message()))
                .ok(),
            Err(_) => None,
        };

        Ok(MaybeUser(user))
    }
}

/// Authorization 헤더 또는 쿠키에서 토큰 추출
fn extract_token(parts: &Parts) -> Result<String, AppError> {
    if let Some(auth_header) = parts.headers.get(AUTHORIZATION) {
        let auth_header_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("잘못된 헤더 형식입니다.".to_string()))?;

        return auth_header_str
            .strip_prefix("Bearer ")
            .map(str::to_string)
            .ok_or_else(|| AppError::Unauthorized("토큰 형식이 올바르지 않습니다.".to_string()));
    }

    extract_token_from_cookie(parts)
}

/// 쿠키에서 access_token 추출
fn extract_token_from_cookie(parts: &Parts) -> Result<String, AppError> {
    let cookie_header = parts
        .headers
        .get(COOKIE)
        .ok_or_else(|| AppError::Unauthorized("로그인이 필요합니다.".to_string()))?;

    let cookie_str = cookie_header
        .to_str()
        .map_err(|_| AppError::Unauthorized("잘못된 쿠키 형식입니다.".to_string()))?;

    // 쿠키 파싱: "name1=value1; name2=value2" 형식
    for cookie in cookie_str.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", ACCESS_TOKEN_COOKIE)) {
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    Err(AppError::Unauthorized("로그인이 필요합니다.".to_string()))
}

/// 접근 제어 결과
#[derive(Debug, PartialEq)]
pub enum Access {
    Granted(CurrentUser),
    Denied(Denial),
}

/// 접근 거부 사유
#[derive(Debug, PartialEq)]
pub enum Denial {
    /// 로그인하지 않은 사용자
    Anonymous,
    /// 로그인했지만 권한이 없는 사용자
    MissingPermission(&'static str),
}

/// 로그인 여부만 확인합니다.
pub fn require_login(user: Option<CurrentUser>) -> Access {
    match user {
        Some(user) => Access::Granted(user),
        None => Access::Denied(Denial::Anonymous),
    }
}

/// 로그인 여부와 권한을 함께 확인합니다.
pub fn require_permission(user: Option<CurrentUser>, permission: &'static str) -> Access {
    match user {
        Some(user) if user.has_perm(permission) => Access::Granted(user),
        Some(_) => Access::Denied(Denial::MissingPermission(permission)),
        None => Access::Denied(Denial::Anonymous),
    }
}

impl Access {
    /// 거부된 경우 바로 돌려줄 응답으로 변환합니다.
    ///
    /// 익명 사용자는 `next` 파라미터와 함께 로그인 페이지로 리다이렉트되고,
    /// 권한이 없는 사용자는 403을 받습니다.
    pub fn resolve(self, login_url: &str, requested: &Uri) -> Result<CurrentUser, Response> {
        match self {
            Access::Granted(user) => Ok(user),
            Access::Denied(Denial::Anonymous) => {
                let next = requested
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or_else(|| requested.path());
                tracing::info!(next = %next, "Redirecting anonymous user to login");

                Err(Redirect::to(&login_redirect_url(login_url, next)).into_response())
            }
            Access::Denied(Denial::MissingPermission(permission)) => Err(AppError::forbidden(
                format!("{} 권한이 필요합니다.", permission),
            )
            .into_response()),
        }
    }
}

/// 로그인 페이지 URL에 `next` 쿼리를 붙입니다.
pub fn login_redirect_url(login_url: &str, next: &str) -> String {
    let separator = if login_url.contains('?') { '&' } else { '?' };
    format!(
        "{}{}next={}",
        login_url,
        separator,
        urlencoding::encode(next)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn user_with(permissions: &[&str]) -> CurrentUser {
        CurrentUser {
            user_id: 7,
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn should_grant_login_for_authenticated_user() {
        let access = require_login(Some(user_with(&[])));
        assert_eq!(access, Access::Granted(user_with(&[])));
    }

    #[test]
    fn should_deny_login_for_anonymous_user() {
        assert_eq!(require_login(None), Access::Denied(Denial::Anonymous));
    }

    #[test]
    fn should_deny_permission_when_user_lacks_it() {
        let access = require_permission(Some(user_with(&["trip.add_event"])), ADD_RESTAURANT_PERMISSION);
        assert_eq!(
            access,
            Access::Denied(Denial::MissingPermission(ADD_RESTAURANT_PERMISSION))
        );
    }

    #[test]
    fn should_grant_permission_when_user_has_it() {
        let access = require_permission(
            Some(user_with(&[ADD_RESTAURANT_PERMISSION])),
            ADD_RESTAURANT_PERMISSION,
        );
        assert!(matches!(access, Access::Granted(_)));
    }

    #[test]
    fn should_redirect_anonymous_to_login_with_next() {
        // Arrange
        let uri: Uri = "/events/new?from=list".parse().unwrap();

        // Act
        let response = require_login(None)
            .resolve("/accounts/login/", &uri)
            .unwrap_err();

        // Assert
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()["location"],
            "/accounts/login/?next=%2Fevents%2Fnew%3Ffrom%3Dlist"
        );
    }

    #[test]
    fn should_return_forbidden_for_missing_permission() {
        let uri: Uri = "/restaurants/new".parse().unwrap();

        let response = require_permission(Some(user_with(&[])), ADD_RESTAURANT_PERMISSION)
            .resolve("/accounts/login/", &uri)
            .unwrap_err();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn should_append_next_to_login_url_with_existing_query() {
        assert_eq!(
            login_redirect_url("/login?lang=ko", "/reviews/new"),
            "/login?lang=ko&next=%2Freviews%2Fnew"
        );
    }

    #[test]
    fn should_reject_non_numeric_subject() {
        let claims = Claims {
            sub: "abc".to_string(),
            iat: 0,
            exp: 0,
            permissions: vec![],
        };
        assert!(CurrentUser::try_from(claims).is_err());
    }
}
