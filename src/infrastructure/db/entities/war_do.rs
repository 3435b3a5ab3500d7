use sea_orm::entity::prelude::*;

use crate::domain::war::War;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "war")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub factions: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::war_snapshot_do::Entity")]
    WarSnapshot,
}

impl Related<super::war_snapshot_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&War> for Model {
    fn from(value: &War) -> Self {
        Self {
            id: value.id(),
            start_time: value.start_time(),
            end_time: value.end_time(),
            factions: Json::from(value.factions().clone()),
        }
    }
}
