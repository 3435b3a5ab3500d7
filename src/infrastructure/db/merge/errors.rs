use std::{error::Error, fmt};

use sea_orm::DbErr;

use crate::common::errors::ContextError;

/**
 * All errors produced while merging a batch. Any of them rolls the whole batch back.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeError {
    BeginFailed(String),
    Database { table: String, message: String },
    Cancelled(ContextError),
    CommitFailed(String),
}

impl MergeError {
    pub fn database(table: &str, err: DbErr) -> Self {
        MergeError::Database {
            table: table.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MergeError::BeginFailed(msg) => write!(f, "cannot open transaction: {}", msg),
            MergeError::Database { table, message } => {
                write!(f, "merge into {} failed: {}", table, message)
            }
            MergeError::Cancelled(reason) => write!(f, "merge abandoned: {}", reason),
            MergeError::CommitFailed(msg) => write!(f, "commit failed: {}", msg),
        }
    }
}

impl Error for MergeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MergeError::Cancelled(reason) => Some(reason),
            _ => None,
        }
    }
}

impl From<ContextError> for MergeError {
    fn from(value: ContextError) -> Self {
        MergeError::Cancelled(value)
    }
}
