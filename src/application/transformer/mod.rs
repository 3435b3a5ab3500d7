//! Entity Transformer
//!
//! Maps the payloads fetched in one cycle onto domain entities, one group per resource. A
//! group either validates completely or contributes nothing; its siblings are unaffected.
//! Groups come out in foreign-key order. A group whose parent failed validation is still
//! emitted, since its rows may point at parents stored in an earlier cycle; the transaction
//! enforces the foreign keys.

pub mod assignment;
pub mod campaign;
pub mod dispatch;
pub mod errors;
pub mod event;
pub mod planet;
pub mod snapshot;
pub mod war;

use chrono::prelude::*;

use crate::infrastructure::db::merge::{EntityGroup, MergeEntity};
use crate::infrastructure::web::models::{
    AssignmentPayload, CampaignPayload, DispatchPayload, PlanetPayload, WarIdPayload,
    WarSummaryPayload,
};

use self::errors::TransformError;
use self::snapshot::SnapshotLinks;

/// Everything fetched in one cycle. A `None` means the fetch failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WarResources {
    pub war_id: Option<WarIdPayload>,
    pub war_summary: Option<WarSummaryPayload>,
    pub assignments: Option<Vec<AssignmentPayload>>,
    pub campaigns: Option<Vec<CampaignPayload>>,
    pub dispatches: Option<Vec<DispatchPayload>>,
    pub planets: Option<Vec<PlanetPayload>>,
}

pub const WAR_GROUP: &str = "war";
pub const PLANET_GROUP: &str = "planets";
pub const CAMPAIGN_GROUP: &str = "campaigns";
pub const EVENT_GROUP: &str = "events";
pub const ASSIGNMENT_GROUP: &str = "assignments";
pub const DISPATCH_GROUP: &str = "dispatches";
pub const SNAPSHOT_GROUP: &str = "snapshot";

#[derive(Debug, Default)]
pub struct Transformed {
    pub groups: Vec<EntityGroup>,
    pub failures: Vec<TransformError>,
    pub warnings: Vec<String>,
}

impl Transformed {
    fn push<T>(
        &mut self,
        name: &str,
        result: Result<Vec<T>, TransformError>,
        wrap: impl Fn(T) -> MergeEntity,
    ) -> bool {
        match result {
            Ok(items) => {
                let entities = items.into_iter().map(wrap).collect();
                self.groups.push(EntityGroup::new(name, entities));
                true
            }
            Err(e) => {
                self.failures.push(e);
                false
            }
        }
    }

    fn skip(&mut self, group: &str, dependency: &str) {
        self.failures.push(TransformError::DependencyUnavailable {
            group: group.to_string(),
            dependency: dependency.to_string(),
        });
    }

    pub fn group(&self, name: &str) -> Option<&EntityGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }
}

/// Builds the merge groups in the order
/// war, planets, campaigns, events, assignments, dispatches, snapshot.
pub fn transform_all(resources: &WarResources, create_time: DateTime<Utc>) -> Transformed {
    let mut out = Transformed::default();

    let war_ok = out.push(
        WAR_GROUP,
        war::transform_war(&resources.war_id, &resources.war_summary).map(|w| vec![w]),
        MergeEntity::War,
    );
    let planets_ok = out.push(
        PLANET_GROUP,
        planet::transform_planets(&resources.planets),
        MergeEntity::Planet,
    );

    out.push(
        CAMPAIGN_GROUP,
        campaign::transform_campaigns(&resources.campaigns),
        MergeEntity::Campaign,
    );
    let events_ok = out.push(
        EVENT_GROUP,
        event::transform_events(&resources.planets),
        MergeEntity::Event,
    );

    out.push(
        ASSIGNMENT_GROUP,
        assignment::transform_assignments(&resources.assignments),
        MergeEntity::Assignment,
    );
    out.push(
        DISPATCH_GROUP,
        dispatch::transform_dispatches(&resources.dispatches),
        MergeEntity::Dispatch,
    );

    if !war_ok {
        out.skip(SNAPSHOT_GROUP, WAR_GROUP);
        return out;
    }
    let links = SnapshotLinks {
        planets: planets_ok,
        events: events_ok,
    };
    match snapshot::transform_snapshot(resources, create_time, links) {
        Ok((snapshot, warnings)) => {
            out.warnings.extend(warnings);
            out.groups.push(EntityGroup::new(
                SNAPSHOT_GROUP,
                vec![MergeEntity::Snapshot(snapshot)],
            ));
        }
        Err(e) => out.failures.push(e),
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::infrastructure::web::request::Resource;

    fn statistics() -> Value {
        json!({
            "missionsWon": 10, "missionsLost": 2, "missionTime": 3600,
            "terminidKills": 500, "automatonKills": 300, "illuminateKills": 0,
            "bulletsFired": 9000, "bulletsHit": 4000, "timePlayed": 7200,
            "deaths": 40, "revives": 0, "friendlies": 3,
            "missionSuccessRate": 83, "accuracy": 44, "playerCount": 1200
        })
    }

    fn planet(index: i64, event: Value) -> Value {
        json!({
            "index": index,
            "name": format!("Planet {}", index),
            "sector": "Sol",
            "biome": {"name": "Mesa", "description": "Dry"},
            "hazards": [{"name": "Intense Heat", "description": "Hot"}],
            "position": {"x": 0.1, "y": 0.2},
            "waypoints": [],
            "maxHealth": 1000000,
            "health": 400000,
            "disabled": false,
            "initialOwner": "Humans",
            "currentOwner": "Automaton",
            "regenPerSecond": 1.5,
            "event": event,
            "statistics": statistics(),
            "attacking": [index + 1]
        })
    }

    fn resources() -> WarResources {
        let event = json!({
            "id": 4000, "eventType": 1, "faction": "Automaton",
            "health": 10, "maxHealth": 50,
            "startTime": "2024-03-01T00:00:00Z", "endTime": "2024-03-02T00:00:00Z",
            "campaignId": 70
        });
        WarResources {
            war_id: Some(WarIdPayload { id: Some(801) }),
            war_summary: serde_json::from_value(json!({
                "started": "2024-02-08T09:00:00Z",
                "ended": "2028-02-08T09:00:00Z",
                "factions": ["Humans", "Automaton"],
                "impactMultiplier": 0.05,
                "statistics": statistics()
            }))
            .unwrap(),
            assignments: Some(vec![]),
            campaigns: serde_json::from_value(json!([
                {"id": 70, "planet": planet(5, event.clone()), "type": 0, "count": 1}
            ]))
            .unwrap(),
            dispatches: Some(vec![]),
            planets: serde_json::from_value(json!([planet(5, event), planet(6, Value::Null)])).unwrap(),
        }
    }

    fn names(out: &Transformed) -> Vec<&str> {
        out.groups.iter().map(|g| g.name().as_str()).collect()
    }

    #[test]
    fn it_should_emit_groups_in_foreign_key_order() {
        let out = transform_all(&resources(), Utc::now());

        assert!(out.failures.is_empty());
        assert!(out.warnings.is_empty());
        assert_eq!(
            names(&out),
            vec!["war", "planets", "campaigns", "events", "assignments", "dispatches", "snapshot"]
        );
        assert_eq!(out.group(EVENT_GROUP).map(|g| g.len()), Some(1));
        match &out.group(SNAPSHOT_GROUP).unwrap().entities()[0] {
            MergeEntity::Snapshot(snapshot) => {
                assert_eq!(snapshot.planets().len(), 2);
                assert!(snapshot.planets()[0].event().is_some());
                assert!(snapshot.planets()[1].event().is_none());
                assert_eq!(snapshot.campaign_ids(), &vec![70]);
            }
            other => panic!("unexpected entity {:?}", other),
        }
    }

    #[test]
    fn it_should_leave_siblings_alone_when_a_group_fails() {
        let mut resources = resources();
        resources.dispatches = None;

        let out = transform_all(&resources, Utc::now());

        assert_eq!(
            out.failures,
            vec![TransformError::MissingResource(Resource::Dispatches)]
        );
        assert!(out.group(DISPATCH_GROUP).is_none());
        assert!(out.group(PLANET_GROUP).is_some());
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn it_should_keep_campaigns_and_events_when_planets_fail() {
        let mut resources = resources();
        if let Some(planets) = resources.planets.as_mut() {
            planets[1].sector = None;
        }

        let out = transform_all(&resources, Utc::now());

        assert_eq!(
            names(&out),
            vec!["war", "campaigns", "events", "assignments", "dispatches", "snapshot"]
        );
        assert_eq!(out.failures.len(), 1);
        assert!(matches!(
            out.failures[0],
            TransformError::MissingField { resource: Resource::Planets, .. }
        ));
        assert!(out.warnings[0].contains("planets were not merged"));
    }

    #[test]
    fn it_should_require_war_statistics_for_the_snapshot() {
        let mut resources = resources();
        if let Some(summary) = resources.war_summary.as_mut() {
            summary.statistics = None;
        }

        let out = transform_all(&resources, Utc::now());

        assert!(out.group(SNAPSHOT_GROUP).is_none());
        assert!(out.group(WAR_GROUP).is_some());
        assert_eq!(
            out.failures,
            vec![TransformError::MissingField {
                resource: Resource::WarSummary,
                field: "statistics".to_string()
            }]
        );
    }
}
