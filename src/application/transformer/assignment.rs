use crate::domain::assignment::{Assignment, Reward, Task};
use crate::infrastructure::web::models::{AssignmentPayload, OneOf, TaskPayload};
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

pub fn transform_assignments(
    assignments: &Option<Vec<AssignmentPayload>>,
) -> Result<Vec<Assignment>, TransformError> {
    fetched(assignments, Resource::Assignments)?
        .iter()
        .enumerate()
        .map(|(i, assignment)| transform_assignment(assignment, &Scope::item(Resource::Assignments, i)))
        .collect()
}

fn transform_assignment(
    assignment: &AssignmentPayload,
    scope: &Scope,
) -> Result<Assignment, TransformError> {
    let id = *scope.required(&assignment.id, "id")?;
    let expiration = *scope.required(&assignment.expiration, "expiration")?;
    let reward = match scope.required(&assignment.reward, "reward")? {
        OneOf::Resolved(reward) => Reward::new(reward.reward_type, reward.amount),
        OneOf::Unresolved(_) => return Err(scope.unresolved("reward")),
    };
    let tasks = scope
        .required(&assignment.tasks, "tasks")?
        .iter()
        .enumerate()
        .map(|(i, task)| transform_task(task, &scope.child(&format!("tasks[{}]", i))))
        .collect::<Result<Vec<_>, TransformError>>()?;

    Ok(Assignment::new(
        id,
        assignment.title.clone(),
        assignment.briefing.clone(),
        assignment.description.clone(),
        expiration,
        reward,
        tasks,
    ))
}

fn transform_task(task: &TaskPayload, scope: &Scope) -> Result<Task, TransformError> {
    let task_type = *scope.required(&task.task_type, "type")?;
    let values = scope.required(&task.values, "values")?.clone();
    let value_types = scope.required(&task.value_types, "valueTypes")?.clone();
    Task::new(task_type, values, value_types).map_err(|e| scope.invalid("values", &e))
}

#[cfg(test)]
mod tests {
    use fake::{faker::lorem::en::Sentence, Fake};
    use serde_json::{json, Value};

    use super::*;

    fn assignment(id: i64, tasks: Value, reward: Value) -> Value {
        let briefing: String = Sentence(3..8).fake();
        json!({
            "id": id,
            "title": "MAJOR ORDER",
            "briefing": briefing,
            "description": null,
            "expiration": "2024-03-10T12:00:00Z",
            "reward": reward,
            "tasks": tasks
        })
    }

    fn parse(values: Vec<Value>) -> Option<Vec<AssignmentPayload>> {
        Some(serde_json::from_value(Value::Array(values)).unwrap())
    }

    #[test]
    fn it_should_keep_task_order_and_nullable_text() {
        let tasks = json!([
            {"type": 3, "values": [1, 5000], "valueTypes": [1, 3]},
            {"type": 11, "values": [1], "valueTypes": [12]}
        ]);
        let parsed = transform_assignments(&parse(vec![assignment(
            1,
            tasks,
            json!({"type": 1, "amount": 45}),
        )]))
        .unwrap();

        assert_eq!(parsed[0].tasks()[0].task_type(), 3);
        assert_eq!(parsed[0].tasks()[1].task_type(), 11);
        assert_eq!(parsed[0].reward(), Reward::new(1, 45));
        assert!(parsed[0].description().is_none());
        assert!(parsed[0].briefing().is_some());
    }

    #[test]
    fn it_should_fail_the_group_on_unequal_task_arrays() {
        let good = assignment(1, json!([]), json!({"type": 1, "amount": 45}));
        let bad = assignment(
            2,
            json!([{"type": 3, "values": [1, 2], "valueTypes": [1]}]),
            json!({"type": 1, "amount": 45}),
        );

        let err = transform_assignments(&parse(vec![good, bad])).unwrap_err();

        assert_eq!(
            err,
            TransformError::InvalidValue {
                resource: Resource::Assignments,
                field: "[1].tasks[0].values".to_string(),
                reason: "task has 2 values but 1 value types".to_string()
            }
        );
    }

    #[test]
    fn it_should_reject_an_unknown_reward_shape() {
        let odd = assignment(1, json!([]), json!("45 medals"));

        let err = transform_assignments(&parse(vec![odd])).unwrap_err();

        assert!(matches!(err, TransformError::UnresolvedUnion { .. }));
    }
}
