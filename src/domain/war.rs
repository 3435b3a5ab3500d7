//! War Domain Object Definition

use chrono::prelude::*;
use getset::{CopyGetters, Getters};

/// Global metadata of the war currently being fought.
#[derive(Debug, PartialEq, Clone, Getters, CopyGetters)]
pub struct War {
    #[getset(get_copy = "pub")]
    id: i64,

    #[getset(get_copy = "pub")]
    start_time: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    end_time: DateTime<Utc>,

    #[getset(get = "pub")]
    factions: Vec<String>,
}

impl War {
    pub fn new(
        id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        factions: Vec<String>,
    ) -> Self {
        Self {
            id,
            start_time,
            end_time,
            factions,
        }
    }
}
