use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::restaurant::dto::RestaurantItem;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ThingToDoListResponse {
    pub all_ttd: Vec<RestaurantItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessThingToDoListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ThingToDoListResponse,
}
