//! Event Domain Object Definition

use chrono::prelude::*;
use getset::{CopyGetters, Getters};

/// A time-limited defense or attack event tied to a campaign.
#[derive(Debug, PartialEq, Eq, Clone, Getters, CopyGetters)]
pub struct Event {
    #[getset(get_copy = "pub")]
    id: i64,

    #[getset(get_copy = "pub")]
    campaign_id: i64,

    #[getset(get_copy = "pub")]
    event_type: i64,

    #[getset(get = "pub")]
    faction: String,

    #[getset(get_copy = "pub")]
    max_health: i64,

    #[getset(get_copy = "pub")]
    start_time: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    end_time: DateTime<Utc>,
}

impl Event {
    pub fn new(
        id: i64,
        campaign_id: i64,
        event_type: i64,
        faction: &str,
        max_health: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            campaign_id,
            event_type,
            faction: faction.to_string(),
            max_health,
            start_time,
            end_time,
        }
    }
}
