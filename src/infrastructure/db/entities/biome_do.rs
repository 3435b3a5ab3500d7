use sea_orm::entity::prelude::*;

use crate::domain::planet::Biome;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "biome")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planet_do::Entity")]
    Planet,
}

impl Related<super::planet_do::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Biome> for Model {
    fn from(value: &Biome) -> Self {
        Self {
            name: value.name().clone(),
            description: value.description().clone(),
        }
    }
}
