//! Snapshot Domain Object Definition
//!
//! A snapshot is the append-only record of one cycle. It is fully assembled by the transformer
//! and owns every sub-snapshot by value; the merge engine writes the children first and embeds
//! their generated ids into the parent rows.

use chrono::prelude::*;
use getset::{CopyGetters, Getters};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Statistics {
    missions_won: i64,
    missions_lost: i64,
    mission_time: i64,
    terminid_kills: i64,
    automaton_kills: i64,
    illuminate_kills: i64,
    bullets_fired: i64,
    bullets_hit: i64,
    time_played: i64,
    deaths: i64,
    revives: i64,
    friendlies: i64,
    mission_success_rate: i64,
    accuracy: i64,
    player_count: i64,
}

/// Builder for [`Statistics`], mirroring the order of the upstream block.
#[derive(Debug, Default)]
pub struct StatisticsBuilder {
    inner: Statistics,
}

impl StatisticsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missions(mut self, won: i64, lost: i64, time: i64) -> Self {
        self.inner.missions_won = won;
        self.inner.missions_lost = lost;
        self.inner.mission_time = time;
        self
    }

    pub fn kills(mut self, terminid: i64, automaton: i64, illuminate: i64) -> Self {
        self.inner.terminid_kills = terminid;
        self.inner.automaton_kills = automaton;
        self.inner.illuminate_kills = illuminate;
        self
    }

    pub fn bullets(mut self, fired: i64, hit: i64) -> Self {
        self.inner.bullets_fired = fired;
        self.inner.bullets_hit = hit;
        self
    }

    pub fn players(mut self, time_played: i64, deaths: i64, revives: i64, friendlies: i64) -> Self {
        self.inner.time_played = time_played;
        self.inner.deaths = deaths;
        self.inner.revives = revives;
        self.inner.friendlies = friendlies;
        self
    }

    pub fn rates(mut self, mission_success_rate: i64, accuracy: i64, player_count: i64) -> Self {
        self.inner.mission_success_rate = mission_success_rate;
        self.inner.accuracy = accuracy;
        self.inner.player_count = player_count;
        self
    }

    pub fn build(self) -> Statistics {
        self.inner
    }
}

#[derive(Debug, PartialEq, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct WarSnapshot {
    war_id: i64,
    impact_multiplier: f64,
}

impl WarSnapshot {
    pub fn new(war_id: i64, impact_multiplier: f64) -> Self {
        Self {
            war_id,
            impact_multiplier,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct EventSnapshot {
    event_id: i64,
    health: i64,
}

impl EventSnapshot {
    pub fn new(event_id: i64, health: i64) -> Self {
        Self { event_id, health }
    }
}

#[derive(Debug, PartialEq, Clone, Getters, CopyGetters)]
pub struct PlanetSnapshot {
    #[getset(get_copy = "pub")]
    planet_id: i64,

    #[getset(get_copy = "pub")]
    health: i64,

    #[getset(get = "pub")]
    current_owner: String,

    #[getset(get_copy = "pub")]
    regen_per_second: f64,

    #[getset(get = "pub")]
    attacking_planet_ids: Vec<i64>,

    #[getset(get = "pub")]
    event: Option<EventSnapshot>,

    #[getset(get_copy = "pub")]
    statistics: Statistics,
}

#[allow(clippy::too_many_arguments)]
impl PlanetSnapshot {
    pub fn new(
        planet_id: i64,
        health: i64,
        current_owner: &str,
        regen_per_second: f64,
        attacking_planet_ids: Vec<i64>,
        event: Option<EventSnapshot>,
        statistics: Statistics,
    ) -> Self {
        Self {
            planet_id,
            health,
            current_owner: current_owner.to_string(),
            regen_per_second,
            attacking_planet_ids,
            event,
            statistics,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Getters, CopyGetters)]
pub struct Snapshot {
    #[getset(get_copy = "pub")]
    create_time: DateTime<Utc>,

    #[getset(get_copy = "pub")]
    war: WarSnapshot,

    #[getset(get = "pub")]
    assignment_ids: Vec<i64>,

    #[getset(get = "pub")]
    campaign_ids: Vec<i64>,

    #[getset(get = "pub")]
    dispatch_ids: Vec<i64>,

    #[getset(get = "pub")]
    planets: Vec<PlanetSnapshot>,

    #[getset(get_copy = "pub")]
    statistics: Statistics,
}

#[allow(clippy::too_many_arguments)]
impl Snapshot {
    pub fn new(
        create_time: DateTime<Utc>,
        war: WarSnapshot,
        assignment_ids: Vec<i64>,
        campaign_ids: Vec<i64>,
        dispatch_ids: Vec<i64>,
        planets: Vec<PlanetSnapshot>,
        statistics: Statistics,
    ) -> Self {
        Self {
            create_time,
            war,
            assignment_ids,
            campaign_ids,
            dispatch_ids,
            planets,
            statistics,
        }
    }
}
