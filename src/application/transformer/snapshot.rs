//! Snapshot assembly
//!
//! The war id, the war summary and its statistics are required. Every sub-collection is
//! best-effort: when it is missing or invalid it is left empty and a warning is returned.

use chrono::prelude::*;

use crate::domain::snapshot::{
    EventSnapshot, PlanetSnapshot, Snapshot, Statistics, StatisticsBuilder, WarSnapshot,
};
use crate::infrastructure::web::models::{OneOf, PlanetPayload, StatisticsPayload};
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};
use super::WarResources;

/// Which dependent groups made it through validation this cycle. Planet and event snapshots
/// reference those rows, so they are only kept when their group is merged alongside.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotLinks {
    pub planets: bool,
    pub events: bool,
}

pub fn transform_snapshot(
    resources: &WarResources,
    create_time: DateTime<Utc>,
    links: SnapshotLinks,
) -> Result<(Snapshot, Vec<String>), TransformError> {
    let war_id = fetched(&resources.war_id, Resource::WarId)?;
    let summary = fetched(&resources.war_summary, Resource::WarSummary)?;
    let id = *Scope::root(Resource::WarId).required(&war_id.id, "id")?;
    let scope = Scope::root(Resource::WarSummary);
    let impact_multiplier = *scope.required(&summary.impact_multiplier, "impactMultiplier")?;
    let statistics = resolve_statistics(&summary.statistics, &scope)?;

    let mut warnings = Vec::new();
    let assignment_ids = best_effort(
        ids(&resources.assignments, Resource::Assignments, |a| a.id),
        &mut warnings,
    );
    let campaign_ids = best_effort(
        ids(&resources.campaigns, Resource::Campaigns, |c| c.id),
        &mut warnings,
    );
    let dispatch_ids = best_effort(
        ids(&resources.dispatches, Resource::Dispatches, |d| d.id),
        &mut warnings,
    );
    let planets = if links.planets {
        best_effort(
            planet_snapshots(&resources.planets, links.events),
            &mut warnings,
        )
    } else {
        warnings.push("planet snapshots omitted: planets were not merged".to_string());
        Vec::new()
    };

    let snapshot = Snapshot::new(
        create_time,
        WarSnapshot::new(id, impact_multiplier),
        assignment_ids,
        campaign_ids,
        dispatch_ids,
        planets,
        statistics,
    );
    Ok((snapshot, warnings))
}

fn best_effort<T>(result: Result<Vec<T>, TransformError>, warnings: &mut Vec<String>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warnings.push(format!("snapshot sub-collection omitted: {}", e));
            Vec::new()
        }
    }
}

fn ids<T>(
    items: &Option<Vec<T>>,
    resource: Resource,
    id_of: impl Fn(&T) -> Option<i64>,
) -> Result<Vec<i64>, TransformError> {
    fetched(items, resource)?
        .iter()
        .enumerate()
        .map(|(i, item)| id_of(item).ok_or_else(|| Scope::item(resource, i).missing("id")))
        .collect()
}

fn planet_snapshots(
    planets: &Option<Vec<PlanetPayload>>,
    with_events: bool,
) -> Result<Vec<PlanetSnapshot>, TransformError> {
    fetched(planets, Resource::Planets)?
        .iter()
        .enumerate()
        .map(|(i, planet)| {
            let scope = Scope::item(Resource::Planets, i);
            let event = match (&planet.event, with_events) {
                (Some(event), true) => {
                    let event_scope = scope.child("event");
                    Some(EventSnapshot::new(
                        *event_scope.required(&event.id, "id")?,
                        *event_scope.required(&event.health, "health")?,
                    ))
                }
                _ => None,
            };
            Ok(PlanetSnapshot::new(
                *scope.required(&planet.index, "index")?,
                *scope.required(&planet.health, "health")?,
                scope.required(&planet.current_owner, "currentOwner")?,
                *scope.required(&planet.regen_per_second, "regenPerSecond")?,
                scope.required(&planet.attacking, "attacking")?.clone(),
                event,
                resolve_statistics(&planet.statistics, &scope)?,
            ))
        })
        .collect()
}

fn resolve_statistics(
    statistics: &Option<OneOf<StatisticsPayload>>,
    scope: &Scope,
) -> Result<Statistics, TransformError> {
    match scope.required(statistics, "statistics")? {
        OneOf::Resolved(s) => Ok(StatisticsBuilder::new()
            .missions(s.missions_won, s.missions_lost, s.mission_time)
            .kills(s.terminid_kills, s.automaton_kills, s.illuminate_kills)
            .bullets(s.bullets_fired, s.bullets_hit)
            .players(s.time_played, s.deaths, s.revives, s.friendlies)
            .rates(s.mission_success_rate, s.accuracy, s.player_count)
            .build()),
        OneOf::Unresolved(_) => Err(scope.unresolved("statistics")),
    }
}
