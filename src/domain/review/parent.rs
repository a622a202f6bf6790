//! 리뷰를 연결할 부모 엔티티

use std::fmt;

/// 리뷰를 붙일 수 있는 부모 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewParent {
    Event(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParentError {
    /// 연결을 지원하지 않는 종류 (식당 등)
    #[error("지원하지 않는 리뷰 대상입니다: '{0}'")]
    Unsupported(String),
    /// 지원하는 종류지만 ID가 없거나 정수가 아님
    #[error("리뷰 대상 ID가 올바르지 않습니다: '{0}'")]
    InvalidId(String),
}

impl ReviewParent {
    pub const EVENT: &'static str = "event";

    /// 폼으로 전달된 `review_model`, `id`를 해석합니다.
    pub fn from_form(kind: Option<&str>, id: Option<&str>) -> Result<Self, ParentError> {
        let kind = kind.map(str::trim).unwrap_or_default();
        let raw_id = id.map(str::trim).unwrap_or_default();

        match kind {
            Self::EVENT => raw_id
                .parse::<i64>()
                .map(ReviewParent::Event)
                .map_err(|_| ParentError::InvalidId(raw_id.to_string())),
            other => Err(ParentError::Unsupported(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReviewParent::Event(_) => Self::EVENT,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            ReviewParent::Event(id) => *id,
        }
    }
}

impl fmt::Display for ReviewParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind(), self.id())
    }
}
