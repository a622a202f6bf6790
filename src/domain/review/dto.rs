use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::review;
use super::parent::ReviewParent;
use crate::domain::form::{FormDescriptor, FormField};
use crate::global::routes;

/// 리뷰 작성 폼
///
/// `review_model`/`id`는 리뷰를 연결할 부모를 가리키는 hidden 필드입니다.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ReviewForm {
    #[validate(range(min = 1, max = 5, message = "평점은 1~5 사이여야 합니다."))]
    pub rating: i32,

    #[validate(length(min = 1, max = 2000, message = "리뷰 내용은 1~2000자여야 합니다."))]
    pub content: String,

    #[serde(default)]
    pub review_model: Option<String>,

    #[serde(default)]
    pub id: Option<String>,
}

impl ReviewForm {
    /// 바인딩되지 않은 리뷰 폼. 부모가 주어지면 hidden 필드를 채운다.
    pub fn descriptor(parent: Option<ReviewParent>) -> FormDescriptor {
        let mut fields = vec![
            FormField::input("rating", "number", true),
            FormField::input("content", "textarea", true),
        ];
        if let Some(parent) = parent {
            fields.push(FormField::hidden("review_model", parent.kind()));
            fields.push(FormField::hidden("id", parent.id().to_string()));
        }

        FormDescriptor::post(routes::CREATE_REVIEW, fields)
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub review_id: i64,
    pub user_id: i64,
    pub rating: i32,
    pub content: String,
    pub created_at: String,
}

impl From<review::Model> for ReviewItem {
    fn from(model: review::Model) -> Self {
        Self {
            review_id: model.review_id,
            user_id: model.user_id,
            rating: model.rating,
            content: model.content,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}
