use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::event;
use super::filter::EventFilter;
use crate::domain::form::{FormDescriptor, FormField};
use crate::domain::review::dto::ReviewItem;

// ============== 이벤트 등록 폼 ==============

/// 이벤트 등록 폼 (식당, 할 거리 등록에서도 그대로 사용)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct EventForm {
    #[validate(length(min = 1, max = 100, message = "이름은 1~100자여야 합니다."))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "설명은 1000자를 초과할 수 없습니다."))]
    pub description: String,

    #[validate(length(min = 1, max = 50, message = "카테고리는 1~50자여야 합니다."))]
    pub category: String,

    #[validate(length(min = 1, max = 200, message = "장소는 1~200자여야 합니다."))]
    pub location: String,

    /// YYYY-MM-DD
    pub date: NaiveDate,
}

impl EventForm {
    /// 바인딩되지 않은 등록 폼
    pub fn descriptor(action: &str) -> FormDescriptor {
        FormDescriptor::post(
            action,
            vec![
                FormField::input("name", "text", true),
                FormField::input("description", "textarea", false),
                FormField::input("category", "text", true),
                FormField::input("location", "text", true),
                FormField::input("date", "date", true),
            ],
        )
    }
}

// ============== 응답 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub event_id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub created_at: String,
}

impl From<event::Model> for EventItem {
    fn from(model: event::Model) -> Self {
        Self {
            event_id: model.event_id,
            name: model.name,
            description: model.description,
            category: model.category,
            location: model.location,
            date: model.date.format("%Y-%m-%d").to_string(),
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub all_events: Vec<EventItem>,
    /// 현재 적용된 필터 값 (필터 폼 재구성용)
    pub event_filter: EventFilter,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub event: EventItem,
    pub reviews: Vec<ReviewItem>,
    /// 상세 화면에 함께 노출되는 리뷰 작성 폼
    pub form: FormDescriptor,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEventListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: EventListResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessEventDetailResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: EventDetailResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFormResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: FormDescriptor,
}
