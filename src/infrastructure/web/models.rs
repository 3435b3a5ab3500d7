//! Wire payloads of the war API
//!
//! Every field is optional: a missing field is a validation failure for the transformer to
//! report, not a parse failure for the whole resource. Fields the upstream API has shipped in
//! more than one shape are wrapped in [`OneOf`] and resolved by the transformer.

use chrono::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// A field that either matched the expected shape or was kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOf<T> {
    Resolved(T),
    Unresolved(Value),
}

impl<T> OneOf<T> {
    pub fn resolved(&self) -> Option<&T> {
        match self {
            OneOf::Resolved(inner) => Some(inner),
            OneOf::Unresolved(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WarIdPayload {
    pub id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsPayload {
    pub missions_won: i64,
    pub missions_lost: i64,
    pub mission_time: i64,
    pub terminid_kills: i64,
    pub automaton_kills: i64,
    pub illuminate_kills: i64,
    pub bullets_fired: i64,
    pub bullets_hit: i64,
    pub time_played: i64,
    pub deaths: i64,
    pub revives: i64,
    pub friendlies: i64,
    pub mission_success_rate: i64,
    pub accuracy: i64,
    pub player_count: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarSummaryPayload {
    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
    pub now: Option<DateTime<Utc>>,
    pub factions: Option<Vec<String>>,
    pub impact_multiplier: Option<f64>,
    pub statistics: Option<OneOf<StatisticsPayload>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(rename = "type")]
    pub task_type: Option<i64>,
    pub values: Option<Vec<i64>>,
    pub value_types: Option<Vec<i64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RewardPayload {
    #[serde(rename = "type")]
    pub reward_type: i64,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPayload {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub briefing: Option<String>,
    pub description: Option<String>,
    pub tasks: Option<Vec<TaskPayload>>,
    pub reward: Option<OneOf<RewardPayload>>,
    pub expiration: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    pub id: Option<i64>,
    pub planet: Option<PlanetPayload>,
    #[serde(rename = "type")]
    pub campaign_type: Option<i64>,
    pub count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchPayload {
    pub id: Option<i64>,
    pub published: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub dispatch_type: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PositionPayload {
    // Tried first: a two-element array also deserializes as `Point`.
    Components(Vec<f64>),
    Point { x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub id: Option<i64>,
    pub event_type: Option<i64>,
    pub faction: Option<String>,
    pub health: Option<i64>,
    pub max_health: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub campaign_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPayload {
    pub index: Option<i64>,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub biome: Option<NamedPayload>,
    pub hazards: Option<Vec<NamedPayload>>,
    pub position: Option<OneOf<PositionPayload>>,
    pub waypoints: Option<Vec<i64>>,
    pub max_health: Option<i64>,
    pub health: Option<i64>,
    pub disabled: Option<bool>,
    pub initial_owner: Option<String>,
    pub current_owner: Option<String>,
    pub regen_per_second: Option<f64>,
    pub event: Option<EventPayload>,
    pub statistics: Option<OneOf<StatisticsPayload>>,
    pub attacking: Option<Vec<i64>>,
}
