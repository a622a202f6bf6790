use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use tracing::{info, warn};

use super::dto::ReviewForm;
use super::entity::review;
use super::parent::{ParentError, ReviewParent};
use crate::domain::event::entity::{event, event_review};
use crate::state::AppState;
use crate::utils::error::AppError;

/// 리뷰 생성 결과
#[derive(Debug)]
pub struct CreatedReview {
    pub review: review::Model,
    /// 연결된 부모 (지원하지 않는 종류면 `None`)
    pub attached_to: Option<ReviewParent>,
}

pub struct ReviewService;

impl ReviewService {
    /// 리뷰 저장 후 부모에 연결
    ///
    /// 리뷰 저장과 연결은 하나의 트랜잭션에서 처리됩니다.
    /// - `event`: 이벤트가 없으면 실패하고 리뷰도 저장되지 않는다
    /// - 그 외 종류: 리뷰만 저장하고 연결하지 않는다
    pub async fn create_review(
        state: &AppState,
        user_id: i64,
        form: ReviewForm,
    ) -> Result<CreatedReview, AppError> {
        // 1. 부모 해석
        let parent =
            match ReviewParent::from_form(form.review_model.as_deref(), form.id.as_deref()) {
                Ok(parent) => Some(parent),
                Err(ParentError::Unsupported(kind)) => {
                    warn!(
                        review_model = %kind,
                        user_id = user_id,
                        "Unsupported review parent, review will be left unattached"
                    );
                    None
                }
                Err(e @ ParentError::InvalidId(_)) => {
                    return Err(AppError::InvalidReviewTarget(e.to_string()));
                }
            };

        // 2. 트랜잭션 시작
        let txn = state.db.begin().await?;

        // 3. 리뷰 저장
        let review = review::ActiveModel {
            user_id: Set(user_id),
            rating: Set(form.rating),
            content: Set(form.content),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        // 4. 부모에 연결
        match parent {
            Some(ReviewParent::Event(event_id)) => {
                let event = event::Entity::find_by_id(event_id).one(&txn).await?;
                if event.is_none() {
                    // txn은 drop 시 롤백된다
                    return Err(AppError::EventNotFound(format!(
                        "존재하지 않는 이벤트입니다. (eventId: {})",
                        event_id
                    )));
                }

                event_review::ActiveModel {
                    event_id: Set(event_id),
                    review_id: Set(review.review_id),
                }
                .insert(&txn)
                .await?;
            }
            None => {}
        }

        // 5. 커밋
        txn.commit().await?;

        info!(
            review_id = review.review_id,
            user_id = user_id,
            attached_to = ?parent,
            "Review created"
        );

        Ok(CreatedReview {
            review,
            attached_to: parent,
        })
    }
}
