use chrono::NaiveDate;
use sea_orm::{ColumnTrait, JoinType, QueryFilter, QuerySelect, RelationTrait, Select};
use serde::Serialize;
use utoipa::ToSchema;

use super::entity::{event, event_review};
use crate::domain::listing::filter::{contains_literal, parsed_param, text_param};
use crate::domain::listing::{ListFilter, QueryParams};
use crate::domain::review::entity::review;

/// 이벤트 목록 필터
///
/// 필드 이름은 쿼리 파라미터 이름과 같다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct EventFilter {
    /// 이름 부분 일치
    pub name: Option<String>,
    /// 카테고리 일치
    pub category: Option<String>,
    /// 장소 부분 일치
    pub location: Option<String>,
    /// 이 날짜 이후 (포함)
    pub date_after: Option<NaiveDate>,
    /// 이 날짜 이전 (포함)
    pub date_before: Option<NaiveDate>,
    /// 이 점수 이상의 리뷰가 하나라도 있는 이벤트
    pub min_rating: Option<i32>,
}

impl ListFilter<event::Entity> for EventFilter {
    fn from_query(params: &QueryParams) -> Self {
        Self {
            name: text_param(params, "name"),
            category: text_param(params, "category"),
            location: text_param(params, "location"),
            date_after: parsed_param(params, "date_after"),
            date_before: parsed_param(params, "date_before"),
            min_rating: parsed_param(params, "min_rating").filter(|r| (1..=5).contains(r)),
        }
    }

    fn apply(&self, mut select: Select<event::Entity>) -> Select<event::Entity> {
        if let Some(name) = &self.name {
            select = select.filter(contains_literal(
                (event::Entity, event::Column::Name),
                name,
            ));
        }
        if let Some(category) = &self.category {
            select = select.filter(event::Column::Category.eq(category.as_str()));
        }
        if let Some(location) = &self.location {
            select = select.filter(contains_literal(
                (event::Entity, event::Column::Location),
                location,
            ));
        }
        if let Some(date_after) = self.date_after {
            select = select.filter(event::Column::Date.gte(date_after));
        }
        if let Some(date_before) = self.date_before {
            select = select.filter(event::Column::Date.lte(date_before));
        }
        if let Some(min_rating) = self.min_rating {
            // 리뷰 조인 때문에 이벤트 행이 중복될 수 있다 (DISTINCT로 제거)
            select = select
                .join(JoinType::InnerJoin, event::Relation::EventReview.def())
                .join(JoinType::InnerJoin, event_review::Relation::Review.def())
                .filter(review::Column::Rating.gte(min_rating));
        }
        select
    }
}
