use serde::Serialize;
use utoipa::ToSchema;

use super::entity::restaurant;
use super::filter::RestaurantFilter;
use crate::domain::listing::PageInfo;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantItem {
    pub restaurant_id: i64,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub created_at: String,
}

impl From<restaurant::Model> for RestaurantItem {
    fn from(model: restaurant::Model) -> Self {
        Self {
            restaurant_id: model.restaurant_id,
            name: model.name,
            description: model.description,
            category: model.category,
            location: model.location,
            created_at: model.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantListResponse {
    pub all_restaurants: Vec<RestaurantItem>,
    pub filter: RestaurantFilter,
    pub page: PageInfo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRestaurantListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RestaurantListResponse,
}
