use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub review_id: i64,
    /// 작성자
    pub user_id: i64,
    /// 1~5점
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::event::entity::event_review::Entity")]
    EventReview,
}

impl Related<crate::domain::event::entity::event_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventReview.def()
    }
}

impl Related<crate::domain::event::entity::event::Entity> for Entity {
    fn to() -> RelationDef {
        crate::domain::event::entity::event_review::Relation::Event.def()
    }

    fn via() -> Option<RelationDef> {
        Some(crate::domain::event::entity::event_review::Relation::Review.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
