use sea_orm::entity::prelude::*;

use crate::domain::dispatch::Dispatch;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "dispatch")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub published: DateTimeUtc,
    pub dispatch_type: i64,
    #[sea_orm(column_type = "Text")]
    pub message: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Dispatch> for Model {
    fn from(value: &Dispatch) -> Self {
        Self {
            id: value.id(),
            published: value.published(),
            dispatch_type: value.dispatch_type(),
            message: value.message().clone(),
        }
    }
}
