use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use tracing::info;

use super::entity::restaurant;
use super::filter::RestaurantFilter;
use crate::domain::event::dto::EventForm;
use crate::domain::listing::{filtered_page, Page};
use crate::state::AppState;
use crate::utils::error::AppError;

/// 식당 목록 페이지 크기
pub const RESTAURANTS_PER_PAGE: u64 = 5;

pub struct RestaurantService;

impl RestaurantService {
    /// 필터가 적용된 식당 목록 (페이지 단위)
    pub async fn list_restaurants(
        state: &AppState,
        filter: &RestaurantFilter,
        raw_page: Option<&str>,
    ) -> Result<Page<restaurant::Model>, AppError> {
        let page = filtered_page::<restaurant::Entity, _, _>(
            &state.db,
            filter,
            RESTAURANTS_PER_PAGE,
            raw_page,
        )
        .await?;

        Ok(page)
    }

    /// 식당 등록
    ///
    /// 이벤트 등록 폼을 그대로 받으므로 `date`는 검증만 되고 저장되지 않는다.
    pub async fn create_restaurant(
        state: &AppState,
        form: EventForm,
    ) -> Result<restaurant::Model, AppError> {
        let restaurant = restaurant::ActiveModel {
            name: Set(form.name),
            description: Set(form.description),
            category: Set(form.category),
            location: Set(form.location),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await?;

        info!(restaurant_id = restaurant.restaurant_id, "Restaurant created");

        Ok(restaurant)
    }
}
