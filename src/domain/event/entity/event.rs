use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub event_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub location: String,
    pub date: Date,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_review::Entity")]
    EventReview,
}

impl Related<super::event_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventReview.def()
    }
}

/// 이벤트에 연결된 리뷰 (event_review 경유)
impl Related<crate::domain::review::entity::review::Entity> for Entity {
    fn to() -> RelationDef {
        super::event_review::Relation::Review.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::event_review::Relation::Event.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
