use serde::Serialize;
use utoipa::ToSchema;

/// 목록/상세/폼 조회가 공통으로 돌려주는 봉투
///
/// `result`에는 목록(`allEvents` 등과 현재 필터), 상세(이벤트, 리뷰, 리뷰 폼)
/// 또는 폼 설명이 담긴다. 등록 요청은 이 봉투 대신 303 리다이렉트로 응답한다.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResponse<T: Serialize> {
    pub is_success: bool,
    /// 항상 `COMMON200`
    pub code: String,
    pub message: String,
    pub result: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            code: "COMMON200".to_string(),
            message: "성공입니다.".to_string(),
            result: Some(result),
        }
    }
}

/// `AppError`가 변환되는 실패 봉투 (`result`는 항상 null)
///
/// `code`는 `COMMON400`, `EVENT4041`, `REVIEW4001` 같은 도메인 에러 코드다.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Option<()>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            code: code.into(),
            message: message.into(),
            result: None,
        }
    }
}
