use sea_orm::entity::prelude::*;

use crate::domain::planet::Hazard;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "hazard")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Hazard> for Model {
    fn from(value: &Hazard) -> Self {
        Self {
            name: value.name().clone(),
            description: value.description().clone(),
        }
    }
}
