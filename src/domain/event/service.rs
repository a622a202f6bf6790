use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, ModelTrait, QueryOrder, Set};
use tracing::info;

use super::dto::EventForm;
use super::entity::event;
use super::filter::EventFilter;
use crate::domain::listing::filtered_list;
use crate::domain::review::entity::review;
use crate::state::AppState;
use crate::utils::error::AppError;

pub struct EventService;

impl EventService {
    /// 필터가 적용된 이벤트 목록
    pub async fn list_events(
        state: &AppState,
        filter: &EventFilter,
    ) -> Result<Vec<event::Model>, AppError> {
        let events = filtered_list::<event::Entity, _, _>(&state.db, filter).await?;
        Ok(events)
    }

    /// 이벤트와 연결된 리뷰 조회
    pub async fn get_event_detail(
        state: &AppState,
        event_id: i64,
    ) -> Result<(event::Model, Vec<review::Model>), AppError> {
        let event = event::Entity::find_by_id(event_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| {
                AppError::EventNotFound(format!(
                    "존재하지 않는 이벤트입니다. (eventId: {})",
                    event_id
                ))
            })?;

        let reviews = event
            .find_related(review::Entity)
            .order_by_asc(review::Column::ReviewId)
            .all(&state.db)
            .await?;

        Ok((event, reviews))
    }

    /// 이벤트 등록
    pub async fn create_event(state: &AppState, form: EventForm) -> Result<event::Model, AppError> {
        let event = event::ActiveModel {
            name: Set(form.name),
            description: Set(form.description),
            category: Set(form.category),
            location: Set(form.location),
            date: Set(form.date),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await?;

        info!(event_id = event.event_id, "Event created");

        Ok(event)
    }
}
