use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::snapshot::WarSnapshot;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "war_snapshot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub war_id: i64,
    pub impact_multiplier: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::war_do::Entity",
        from = "Column::WarId",
        to = "super::war_do::Column::Id"
    )]
    War,
}

impl Related<super::war_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::War.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&WarSnapshot> for ActiveModel {
    fn from(value: &WarSnapshot) -> Self {
        Self {
            id: NotSet,
            war_id: Set(value.war_id()),
            impact_multiplier: Set(value.impact_multiplier()),
        }
    }
}
