use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use tokio::time::{Duration, Instant};

use war_sync::common::context::CycleContext;
use war_sync::domain::{
    assignment::{Assignment, Reward, Task},
    campaign::Campaign,
    event::Event,
    planet::{Biome, Hazard, Planet, Position},
    snapshot::{EventSnapshot, PlanetSnapshot, Snapshot, StatisticsBuilder, WarSnapshot},
    war::War,
};
use war_sync::infrastructure::db::entities::{
    assignment_do, assignment_task_do, campaign_do, planet_do, planet_snapshot_do, snapshot_do, statistic_do, war_do,
};
use war_sync::infrastructure::db::merge::{
    errors::MergeError, stats::TableCounts, EntityGroup, MergeEngine, MergeEntity,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

async fn setup_database() -> Arc<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    Arc::new(db)
}

fn ctx() -> CycleContext {
    CycleContext::new(Duration::from_secs(55))
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn war(id: i64, end_day: u32) -> MergeEntity {
    MergeEntity::War(War::new(
        id,
        at(1),
        at(end_day),
        vec!["Humans".to_string(), "Terminids".to_string()],
    ))
}

fn planet(id: i64, biome: &str, hazards: &[&str]) -> MergeEntity {
    MergeEntity::Planet(Planet::new(
        id,
        &format!("Planet {}", id),
        "Umlaut",
        Position::new(0.25, -0.5),
        vec![],
        1_000_000,
        false,
        "Humans",
        Biome::new(biome, "Rocky"),
        hazards.iter().map(|h| Hazard::new(h, "Dangerous")).collect(),
    ))
}

fn group(name: &str, entities: Vec<MergeEntity>) -> EntityGroup {
    EntityGroup::new(name, entities)
}

#[tokio::test]
async fn it_should_insert_then_update_the_same_war() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());

    let first = engine
        .merge(&ctx(), &[group("war", vec![war(999, 20)])])
        .await
        .unwrap();
    let second = engine
        .merge(&ctx(), &[group("war", vec![war(999, 20)])])
        .await
        .unwrap();

    assert_eq!(first.table("war"), TableCounts::new(1, 0, 0));
    assert_eq!(second.table("war"), TableCounts::new(0, 1, 0));
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 1);
}

#[tokio::test]
async fn it_should_rewrite_a_changed_row() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());

    engine.merge(&ctx(), &[group("war", vec![war(801, 20)])]).await.unwrap();
    let stats = engine
        .merge(&ctx(), &[group("war", vec![war(801, 28)])])
        .await
        .unwrap();

    assert_eq!(stats.table("war"), TableCounts::new(0, 1, 0));
    let stored = war_do::Entity::find_by_id(801).one(&*db).await.unwrap().unwrap();
    assert_eq!(stored.end_time, at(28));
}

#[tokio::test]
async fn it_should_roll_back_everything_on_a_foreign_key_violation() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());

    let orphan = MergeEntity::Campaign(Campaign::new(70, 42, 0, 1));
    let err = engine
        .merge(
            &ctx(),
            &[group("war", vec![war(801, 20)]), group("campaigns", vec![orphan])],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Database { ref table, .. } if table == "campaign"));
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 0);
}

#[tokio::test]
async fn it_should_roll_back_every_group_when_an_event_misses_its_campaign() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());

    let orphan = MergeEntity::Event(Event::new(4000, 71, 1, "Automaton", 50, at(1), at(3)));
    let err = engine
        .merge(
            &ctx(),
            &[
                group("war", vec![war(801, 20)]),
                group("planets", vec![planet(1, "Mesa", &[])]),
                group("campaigns", vec![MergeEntity::Campaign(Campaign::new(70, 1, 0, 1))]),
                group("events", vec![orphan]),
            ],
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Database { ref table, .. } if table == "event"));
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 0);
    assert_eq!(planet_do::Entity::find().count(&*db).await.unwrap(), 0);
    assert_eq!(campaign_do::Entity::find().count(&*db).await.unwrap(), 0);
}

#[tokio::test]
async fn it_should_count_shared_reference_rows_once() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());

    let stats = engine
        .merge(
            &ctx(),
            &[group(
                "planets",
                vec![
                    planet(1, "Mesa", &["Intense Heat"]),
                    planet(2, "Mesa", &["Intense Heat", "Acid Storms"]),
                ],
            )],
        )
        .await
        .unwrap();

    assert_eq!(stats.table("planet"), TableCounts::new(2, 0, 0));
    assert_eq!(stats.table("biome"), TableCounts::new(1, 0, 1));
    assert_eq!(stats.table("hazard"), TableCounts::new(2, 0, 1));

    let again = engine
        .merge(&ctx(), &[group("planets", vec![planet(1, "Mesa", &["Intense Heat"])])])
        .await
        .unwrap();
    assert_eq!(again.table("biome"), TableCounts::new(0, 1, 0));
}

#[tokio::test]
async fn it_should_embed_task_ids_into_the_assignment() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());
    let assignment = |tasks: Vec<Task>| {
        MergeEntity::Assignment(Assignment::new(
            5,
            Some("MAJOR ORDER".to_string()),
            None,
            None,
            at(10),
            Reward::new(1, 45),
            tasks,
        ))
    };
    let kill = Task::new(3, vec![1, 5000], vec![1, 3]).unwrap();
    let hold = Task::new(11, vec![1], vec![12]).unwrap();

    let stats = engine
        .merge(&ctx(), &[group("assignments", vec![assignment(vec![kill.clone(), hold])])])
        .await
        .unwrap();
    assert_eq!(stats.table("assignment_task"), TableCounts::new(2, 0, 0));

    let stored = assignment_do::Entity::find_by_id(5).one(&*db).await.unwrap().unwrap();
    let task_ids: Vec<i32> = serde_json::from_value(stored.task_ids).unwrap();
    assert_eq!(task_ids.len(), 2);

    engine
        .merge(&ctx(), &[group("assignments", vec![assignment(vec![kill])])])
        .await
        .unwrap();

    let stored = assignment_do::Entity::find_by_id(5).one(&*db).await.unwrap().unwrap();
    let shrunk: Vec<i32> = serde_json::from_value(stored.task_ids).unwrap();
    assert_eq!(shrunk, vec![task_ids[0]]);
    assert_eq!(assignment_task_do::Entity::find().count(&*db).await.unwrap(), 1);
}

#[tokio::test]
async fn it_should_append_a_snapshot_with_its_children() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());
    let statistics = StatisticsBuilder::new()
        .missions(10, 2, 3600)
        .kills(500, 300, 0)
        .rates(83, 44, 1200)
        .build();
    let snapshot = Snapshot::new(
        at(2),
        WarSnapshot::new(801, 0.05),
        vec![5],
        vec![70],
        vec![],
        vec![
            PlanetSnapshot::new(
                1,
                400_000,
                "Automaton",
                1.5,
                vec![2],
                Some(EventSnapshot::new(4000, 10)),
                statistics,
            ),
            PlanetSnapshot::new(2, 1_000_000, "Humans", 0.0, vec![], None, statistics),
        ],
        statistics,
    );
    let groups = [
        group("war", vec![war(801, 20)]),
        group("planets", vec![planet(1, "Mesa", &[]), planet(2, "Mesa", &[])]),
        group("campaigns", vec![MergeEntity::Campaign(Campaign::new(70, 1, 0, 1))]),
        group(
            "events",
            vec![MergeEntity::Event(Event::new(4000, 70, 1, "Automaton", 50, at(1), at(3)))],
        ),
        group("snapshot", vec![MergeEntity::Snapshot(snapshot.clone())]),
    ];

    let stats = engine.merge(&ctx(), &groups).await.unwrap();
    engine
        .merge(&ctx(), &[group("snapshot", vec![MergeEntity::Snapshot(snapshot)])])
        .await
        .unwrap();

    assert_eq!(stats.table("snapshot"), TableCounts::new(1, 0, 0));
    assert_eq!(stats.table("planet_snapshot"), TableCounts::new(2, 0, 0));
    assert_eq!(stats.table("event_snapshot"), TableCounts::new(1, 0, 0));
    assert_eq!(stats.table("statistic"), TableCounts::new(3, 0, 0));
    assert_eq!(snapshot_do::Entity::find().count(&*db).await.unwrap(), 2);
    assert_eq!(statistic_do::Entity::find().count(&*db).await.unwrap(), 6);

    let rows = planet_snapshot_do::Entity::find().all(&*db).await.unwrap();
    assert!(rows.iter().any(|r| r.event_snapshot_id.is_some()));
    assert!(rows.iter().any(|r| r.event_snapshot_id.is_none()));
}

#[tokio::test]
async fn it_should_not_persist_past_the_deadline() {
    init();
    let db = setup_database().await;
    let engine = MergeEngine::new(db.clone());
    let expired = CycleContext::with_deadline(Instant::now());

    let err = engine
        .merge(&expired, &[group("war", vec![war(801, 20)])])
        .await
        .unwrap_err();

    assert!(matches!(err, MergeError::Cancelled(_)));
    assert_eq!(war_do::Entity::find().count(&*db).await.unwrap(), 0);
}
