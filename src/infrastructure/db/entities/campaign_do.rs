use sea_orm::entity::prelude::*;

use crate::domain::campaign::Campaign;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub planet_id: i64,
    pub campaign_type: i64,
    pub count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet_do::Entity",
        from = "Column::PlanetId",
        to = "super::planet_do::Column::Id"
    )]
    Planet,
    #[sea_orm(has_many = "super::event_do::Entity")]
    Event,
}

impl Related<super::planet_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::event_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Campaign> for Model {
    fn from(value: &Campaign) -> Self {
        Self {
            id: value.id(),
            planet_id: value.planet_id(),
            campaign_type: value.campaign_type(),
            count: value.count(),
        }
    }
}
