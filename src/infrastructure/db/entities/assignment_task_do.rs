use sea_orm::entity::prelude::*;

use crate::domain::assignment::Task;

/// Unique on (assignment_id, position).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment_task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub assignment_id: i64,
    pub position: i32,
    pub task_type: i64,
    pub values: Json,
    pub value_types: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Whether the stored row already holds `task`.
    pub fn holds(&self, task: &Task) -> bool {
        self.task_type == task.task_type()
            && self.values == Json::from(task.values().clone())
            && self.value_types == Json::from(task.value_types().clone())
    }
}
