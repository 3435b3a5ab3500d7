use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tokio::time::Duration;
use url::Url;

use war_sync::application::cycle::{CycleError, CycleRunner, SyncCycle};
use war_sync::common::context::CycleContext;
use war_sync::application::transformer::errors::TransformError;
use war_sync::infrastructure::db::entities::{campaign_do, dispatch_do, snapshot_do, war_do};
use war_sync::infrastructure::db::merge::stats::TableCounts;
use war_sync::infrastructure::web::{
    errors::GatewayError,
    request::{ApiRequest, Resource},
    transport::{HttpTransport, RawResponse},
};
use war_sync::infrastructure::{ApiGateway, MergeEngine, WarApiClient};

/// Answers every resource with a fixed body; unknown resources get a 500.
struct FixtureTransport {
    bodies: HashMap<Resource, Value>,
}

#[async_trait]
impl HttpTransport for FixtureTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<RawResponse, GatewayError> {
        match self.bodies.get(&request.resource()) {
            Some(body) => Ok(RawResponse::ok(&body.to_string())),
            None => Ok(RawResponse::new(500, None, "")),
        }
    }
}

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

async fn setup_database() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

fn fixtures() -> HashMap<Resource, Value> {
    let mut bodies = HashMap::new();
    bodies.insert(Resource::WarId, json!({"id": 999}));
    bodies.insert(
        Resource::WarSummary,
        json!({
            "started": "2024-02-08T09:00:00Z",
            "ended": "2028-02-08T09:00:00Z",
            "now": "2024-03-01T00:00:00Z",
            "factions": ["Humans", "Terminids", "Automaton", "Illuminate"],
            "impactMultiplier": 0.0125,
            "statistics": {
                "missionsWon": 1, "missionsLost": 0, "missionTime": 900,
                "terminidKills": 80, "automatonKills": 0, "illuminateKills": 0,
                "bulletsFired": 600, "bulletsHit": 300, "timePlayed": 900,
                "deaths": 2, "revives": 0, "friendlies": 1,
                "missionSuccessRate": 100, "accuracy": 50, "playerCount": 4
            }
        }),
    );
    bodies.insert(Resource::Assignments, json!([]));
    bodies.insert(Resource::Campaigns, json!([]));
    bodies.insert(
        Resource::Dispatches,
        json!([{"id": 1, "published": "2024-03-01T00:00:00Z", "type": 0, "message": "Hold"}]),
    );
    bodies.insert(Resource::Planets, json!([]));
    bodies
}

fn planet(index: i64) -> Value {
    json!({
        "index": index,
        "name": format!("Planet {}", index),
        "sector": "Sol",
        "biome": {"name": "Mesa", "description": "Dry"},
        "hazards": [],
        "position": {"x": 0.1, "y": 0.2},
        "waypoints": [],
        "maxHealth": 1000000,
        "health": 400000,
        "disabled": false,
        "initialOwner": "Humans",
        "currentOwner": "Automaton",
        "regenPerSecond": 1.5,
        "statistics": {
            "missionsWon": 1, "missionsLost": 0, "missionTime": 900,
            "terminidKills": 80, "automatonKills": 0, "illuminateKills": 0,
            "bulletsFired": 600, "bulletsHit": 300, "timePlayed": 900,
            "deaths": 2, "revives": 0, "friendlies": 1,
            "missionSuccessRate": 100, "accuracy": 50, "playerCount": 4
        },
        "attacking": []
    })
}

fn cycle(db: Arc<DatabaseConnection>, bodies: HashMap<Resource, Value>) -> SyncCycle<FixtureTransport> {
    let gateway = ApiGateway::new(FixtureTransport { bodies }).with_max_retry(1);
    let client = WarApiClient::new(
        gateway,
        Url::parse("https://api.example.test/").unwrap(),
        "war-sync-tests",
    );
    SyncCycle::new(client, MergeEngine::new(db))
}

fn ctx() -> CycleContext {
    CycleContext::new(Duration::from_secs(55))
}

#[tokio::test]
async fn it_should_insert_then_update_across_cycles() {
    init();
    let db = setup_database().await;
    let cycle = cycle(db.clone(), fixtures());

    let first = cycle.run_cycle(&ctx()).await.unwrap();
    let second = cycle.run_cycle(&ctx()).await.unwrap();

    assert_eq!(first.stats().table("war"), TableCounts::new(1, 0, 0));
    assert_eq!(second.stats().table("war"), TableCounts::new(0, 1, 0));
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 1);
    assert_eq!(snapshot_do::Entity::find().count(&*db).await.unwrap(), 2);
}

#[tokio::test]
async fn it_should_drop_only_the_invalid_group() {
    init();
    let db = setup_database().await;
    let mut bodies = fixtures();
    bodies.insert(
        Resource::Dispatches,
        json!([{"id": 1, "published": "2024-03-01T00:00:00Z", "type": 0}]),
    );
    let cycle = cycle(db.clone(), bodies);

    let err = cycle.run_cycle(&ctx()).await.unwrap_err();

    match err {
        CycleError::Degraded(report) => {
            assert_eq!(report.transform_failures().len(), 1);
            assert!(report.fetch_failures().is_empty());
            assert_eq!(report.stats().table("dispatch"), TableCounts::default());
        }
        other => panic!("expected a degraded cycle, got {}", other),
    }
    assert_eq!(dispatch_do::Entity::find().count(&*db).await.unwrap(), 0);
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 1);
    assert_eq!(snapshot_do::Entity::find().count(&*db).await.unwrap(), 1);
}

#[tokio::test]
async fn it_should_report_failed_fetches() {
    init();
    let db = setup_database().await;
    let mut bodies = fixtures();
    bodies.remove(&Resource::Dispatches);
    let cycle = cycle(db.clone(), bodies);

    let err = cycle.run_cycle(&ctx()).await.unwrap_err();

    match err {
        CycleError::Degraded(report) => {
            assert_eq!(
                report.fetch_failures(),
                &vec![(Resource::Dispatches, GatewayError::RetriesExhausted(1))]
            );
            assert_eq!(report.warnings().len(), 1);
        }
        other => panic!("expected a degraded cycle, got {}", other),
    }
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 1);
}

#[tokio::test]
async fn it_should_store_campaigns_for_known_planets_when_planets_fail() {
    init();
    let db = setup_database().await;
    let mut bodies = fixtures();
    bodies.insert(Resource::Planets, json!([planet(5)]));
    bodies.insert(
        Resource::Campaigns,
        json!([{"id": 70, "planet": {"index": 5}, "type": 0, "count": 1}]),
    );
    cycle(db.clone(), bodies.clone()).run_cycle(&ctx()).await.unwrap();

    let mut broken = planet(5);
    broken["sector"] = Value::Null;
    bodies.insert(Resource::Planets, json!([broken]));
    bodies.insert(
        Resource::Campaigns,
        json!([
            {"id": 70, "planet": {"index": 5}, "type": 0, "count": 1},
            {"id": 71, "planet": {"index": 5}, "type": 0, "count": 2}
        ]),
    );
    let err = cycle(db.clone(), bodies).run_cycle(&ctx()).await.unwrap_err();

    match err {
        CycleError::Degraded(report) => {
            assert_eq!(
                report.transform_failures(),
                &vec![TransformError::MissingField {
                    resource: Resource::Planets,
                    field: "[0].sector".to_string()
                }]
            );
            assert_eq!(report.stats().table("campaign"), TableCounts::new(1, 1, 0));
        }
        other => panic!("expected a degraded cycle, got {}", other),
    }
    assert_eq!(campaign_do::Entity::find().count(&*db).await.unwrap(), 2);
}
