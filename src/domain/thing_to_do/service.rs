use sea_orm::{EntityTrait, QueryOrder};

use crate::domain::event::dto::EventForm;
use crate::domain::restaurant::entity::restaurant;
use crate::domain::restaurant::service::RestaurantService;
use crate::state::AppState;
use crate::utils::error::AppError;

/// 할 거리 (별도 테이블 없이 restaurant 테이블을 공유)
pub struct ThingToDoService;

impl ThingToDoService {
    /// 전체 목록 (필터 없음)
    pub async fn list_things_to_do(state: &AppState) -> Result<Vec<restaurant::Model>, AppError> {
        let rows = restaurant::Entity::find()
            .order_by_asc(restaurant::Column::RestaurantId)
            .all(&state.db)
            .await?;

        Ok(rows)
    }

    pub async fn create_thing_to_do(
        state: &AppState,
        form: EventForm,
    ) -> Result<restaurant::Model, AppError> {
        RestaurantService::create_restaurant(state, form).await
    }
}
