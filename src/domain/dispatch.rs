//! Dispatch Domain Object Definition

use chrono::prelude::*;
use getset::{CopyGetters, Getters};

/// A timestamped broadcast message.
#[derive(Debug, PartialEq, Eq, Clone, Getters, CopyGetters)]
pub struct Dispatch {
    #[getset(get_copy = "pub")]
    id: i64,

    #[getset(get_copy = "pub")]
    published: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    dispatch_type: i64,

    #[getset(get = "pub")]
    message: String,
}

impl Dispatch {
    pub fn new(id: i64, published: DateTime<Utc>, dispatch_type: i64, message: &str) -> Self {
        Self {
            id,
            published,
            dispatch_type,
            message: message.to_string(),
        }
    }
}
