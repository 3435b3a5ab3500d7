//! Assignment Domain Object Definition
//!
//! An assignment (major order) owns its tasks by value. Tasks are validated on construction:
//! every value must come with its value type.

use std::error::Error;
use std::fmt;

use chrono::prelude::*;
use getset::{CopyGetters, Getters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnequalTaskArrays {
    pub values: usize,
    pub value_types: usize,
}

impl fmt::Display for UnequalTaskArrays {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "task has {} values but {} value types",
            self.values, self.value_types
        )
    }
}

impl Error for UnequalTaskArrays {}

#[derive(Debug, PartialEq, Eq, Clone, Getters, CopyGetters)]
pub struct Task {
    #[getset(get_copy = "pub")]
    task_type: i64,

    #[getset(get = "pub")]
    values: Vec<i64>,

    #[getset(get = "pub")]
    value_types: Vec<i64>,
}

impl Task {
    pub fn new(
        task_type: i64,
        values: Vec<i64>,
        value_types: Vec<i64>,
    ) -> Result<Self, UnequalTaskArrays> {
        if values.len() != value_types.len() {
            return Err(UnequalTaskArrays {
                values: values.len(),
                value_types: value_types.len(),
            });
        }
        Ok(Self {
            task_type,
            values,
            value_types,
        })
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Reward {
    reward_type: i64,
    amount: i64,
}

impl Reward {
    pub fn new(reward_type: i64, amount: i64) -> Self {
        Self {
            reward_type,
            amount,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Getters, CopyGetters)]
pub struct Assignment {
    #[getset(get_copy = "pub")]
    id: i64,

    #[getset(get = "pub")]
    title: Option<String>,

    #[getset(get = "pub")]
    briefing: Option<String>,

    #[getset(get = "pub")]
    description: Option<String>,

    #[getset(get_copy = "pub")]
    expiration: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    reward: Reward,

    #[getset(get = "pub")]
    tasks: Vec<Task>,
}

impl Assignment {
    pub fn new(
        id: i64,
        title: Option<String>,
        briefing: Option<String>,
        description: Option<String>,
        expiration: DateTime<Utc>,
        reward: Reward,
        tasks: Vec<Task>,
    ) -> Self {
        Self {
            id,
            title,
            briefing,
            description,
            expiration,
            reward,
            tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_accept_parallel_arrays() {
        let task = Task::new(3, vec![1, 5000, 0], vec![1, 3, 11]).unwrap();
        assert_eq!(task.values().len(), task.value_types().len());
    }

    #[test]
    fn it_should_reject_unequal_arrays() {
        let err = Task::new(3, vec![1, 5000], vec![1]).unwrap_err();
        assert_eq!(
            err,
            UnequalTaskArrays {
                values: 2,
                value_types: 1
            }
        );
        assert_eq!(err.to_string(), "task has 2 values but 1 value types");
    }
}
