use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::snapshot::Statistics;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "statistic")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub missions_won: i64,
    pub missions_lost: i64,
    pub mission_time: i64,
    pub terminid_kills: i64,
    pub automaton_kills: i64,
    pub illuminate_kills: i64,
    pub bullets_fired: i64,
    pub bullets_hit: i64,
    pub time_played: i64,
    pub deaths: i64,
    pub revives: i64,
    pub friendlies: i64,
    pub mission_success_rate: i64,
    pub accuracy: i64,
    pub player_count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Statistics> for ActiveModel {
    fn from(value: &Statistics) -> Self {
        Self {
            id: NotSet,
            missions_won: Set(value.missions_won()),
            missions_lost: Set(value.missions_lost()),
            mission_time: Set(value.mission_time()),
            terminid_kills: Set(value.terminid_kills()),
            automaton_kills: Set(value.automaton_kills()),
            illuminate_kills: Set(value.illuminate_kills()),
            bullets_fired: Set(value.bullets_fired()),
            bullets_hit: Set(value.bullets_hit()),
            time_played: Set(value.time_played()),
            deaths: Set(value.deaths()),
            revives: Set(value.revives()),
            friendlies: Set(value.friendlies()),
            mission_success_rate: Set(value.mission_success_rate()),
            accuracy: Set(value.accuracy()),
            player_count: Set(value.player_count()),
        }
    }
}
