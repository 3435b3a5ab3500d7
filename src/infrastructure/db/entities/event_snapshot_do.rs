use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::snapshot::EventSnapshot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event_snapshot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i64,
    pub health: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event_do::Entity",
        from = "Column::EventId",
        to = "super::event_do::Column::Id"
    )]
    Event,
}

impl Related<super::event_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&EventSnapshot> for ActiveModel {
    fn from(value: &EventSnapshot) -> Self {
        Self {
            id: NotSet,
            event_id: Set(value.event_id()),
            health: Set(value.health()),
        }
    }
}
