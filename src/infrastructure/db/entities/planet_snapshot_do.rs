use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::snapshot::PlanetSnapshot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet_snapshot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub planet_id: i64,
    pub health: i64,
    pub current_owner: String,
    pub regen_per_second: f64,
    pub attacking_planet_ids: Json,
    #[sea_orm(nullable)]
    pub event_snapshot_id: Option<i32>,
    pub statistic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet_do::Entity",
        from = "Column::PlanetId",
        to = "super::planet_do::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::event_snapshot_do::Entity",
        from = "Column::EventSnapshotId",
        to = "super::event_snapshot_do::Column::Id"
    )]
    EventSnapshot,
    #[sea_orm(
        belongs_to = "super::statistic_do::Entity",
        from = "Column::StatisticId",
        to = "super::statistic_do::Column::Id"
    )]
    Statistic,
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Row for `value` once its event snapshot and statistics rows exist.
    pub fn linked(value: &PlanetSnapshot, event_snapshot_id: Option<i32>, statistic_id: i32) -> Self {
        Self {
            id: NotSet,
            planet_id: Set(value.planet_id()),
            health: Set(value.health()),
            current_owner: Set(value.current_owner().clone()),
            regen_per_second: Set(value.regen_per_second()),
            attacking_planet_ids: Set(Json::from(value.attacking_planet_ids().clone())),
            event_snapshot_id: Set(event_snapshot_id),
            statistic_id: Set(statistic_id),
        }
    }
}
