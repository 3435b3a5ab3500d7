use sea_orm::entity::prelude::*;

use crate::domain::assignment::Assignment;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub briefing: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub expiration: DateTimeUtc,
    pub reward_type: i64,
    pub reward_amount: i64,
    pub task_ids: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn from_domain(value: &Assignment, task_ids: Vec<i32>) -> Self {
        Self {
            id: value.id(),
            title: value.title().clone(),
            briefing: value.briefing().clone(),
            description: value.description().clone(),
            expiration: value.expiration(),
            reward_type: value.reward().reward_type(),
            reward_amount: value.reward().amount(),
            task_ids: Json::from(task_ids),
        }
    }
}
