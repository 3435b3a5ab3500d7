use sea_orm::entity::prelude::*;

use crate::domain::planet::Planet;

/// Hazards are referenced by name through a JSON list; the biome through a real foreign key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    pub sector: String,
    pub position_x: f64,
    pub position_y: f64,
    pub waypoints: Json,
    pub max_health: i64,
    pub disabled: bool,
    pub initial_owner: String,
    pub biome_name: String,
    pub hazard_names: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::biome_do::Entity",
        from = "Column::BiomeName",
        to = "super::biome_do::Column::Name"
    )]
    Biome,
    #[sea_orm(has_many = "super::campaign_do::Entity")]
    Campaign,
}

impl Related<super::biome_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Biome.def()
    }
}

impl Related<super::campaign_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Planet> for Model {
    fn from(value: &Planet) -> Self {
        Self {
            id: value.id(),
            name: value.name().clone(),
            sector: value.sector().clone(),
            position_x: value.position().x(),
            position_y: value.position().y(),
            waypoints: Json::from(value.waypoints().clone()),
            max_health: value.max_health(),
            disabled: value.disabled(),
            initial_owner: value.initial_owner().clone(),
            biome_name: value.biome().name().clone(),
            hazard_names: Json::from(value.hazard_names()),
        }
    }
}
