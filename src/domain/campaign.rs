//! Campaign Domain Object Definition

use getset::CopyGetters;

/// An active front on a planet.
#[derive(Debug, PartialEq, Eq, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Campaign {
    id: i64,
    planet_id: i64,
    campaign_type: i64,
    count: i64,
}

impl Campaign {
    pub fn new(id: i64, planet_id: i64, campaign_type: i64, count: i64) -> Self {
        Self {
            id,
            planet_id,
            campaign_type,
            count,
        }
    }
}
