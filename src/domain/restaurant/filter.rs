use sea_orm::{ColumnTrait, QueryFilter, Select};
use serde::Serialize;
use utoipa::ToSchema;

use super::entity::restaurant;
use crate::domain::listing::filter::{contains_literal, text_param};
use crate::domain::listing::{ListFilter, QueryParams};

/// 식당 목록 필터
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct RestaurantFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
}

impl ListFilter<restaurant::Entity> for RestaurantFilter {
    fn from_query(params: &QueryParams) -> Self {
        Self {
            name: text_param(params, "name"),
            category: text_param(params, "category"),
            location: text_param(params, "location"),
        }
    }

    fn apply(&self, mut select: Select<restaurant::Entity>) -> Select<restaurant::Entity> {
        if let Some(name) = &self.name {
            select = select.filter(contains_literal(
                (restaurant::Entity, restaurant::Column::Name),
                name,
            ));
        }
        if let Some(category) = &self.category {
            select = select.filter(restaurant::Column::Category.eq(category.as_str()));
        }
        if let Some(location) = &self.location {
            select = select.filter(contains_literal(
                (restaurant::Entity, restaurant::Column::Location),
                location,
            ));
        }
        select
    }
}
