use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::snapshot::Snapshot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "snapshot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_time: DateTimeUtc,
    pub war_snapshot_id: i32,
    pub assignment_ids: Json,
    pub campaign_ids: Json,
    pub dispatch_ids: Json,
    pub planet_snapshot_ids: Json,
    pub statistic_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::war_snapshot_do::Entity",
        from = "Column::WarSnapshotId",
        to = "super::war_snapshot_do::Column::Id"
    )]
    WarSnapshot,
    #[sea_orm(
        belongs_to = "super::statistic_do::Entity",
        from = "Column::StatisticId",
        to = "super::statistic_do::Column::Id"
    )]
    Statistic,
}

impl Related<super::war_snapshot_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WarSnapshot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn linked(
        value: &Snapshot,
        war_snapshot_id: i32,
        planet_snapshot_ids: Vec<i32>,
        statistic_id: i32,
    ) -> Self {
        Self {
            id: NotSet,
            create_time: Set(value.create_time()),
            war_snapshot_id: Set(war_snapshot_id),
            assignment_ids: Set(Json::from(value.assignment_ids().clone())),
            campaign_ids: Set(Json::from(value.campaign_ids().clone())),
            dispatch_ids: Set(Json::from(value.dispatch_ids().clone())),
            planet_snapshot_ids: Set(Json::from(planet_snapshot_ids)),
            statistic_id: Set(statistic_id),
        }
    }
}
