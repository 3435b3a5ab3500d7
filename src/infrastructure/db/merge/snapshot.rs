//! Append-only merge of one snapshot aggregate.

use sea_orm::{ActiveModelTrait, DatabaseTransaction};

use crate::domain::snapshot::{Snapshot, Statistics};
use crate::infrastructure::db::entities::{
    event_snapshot_do, planet_snapshot_do, snapshot_do, statistic_do, war_snapshot_do,
};

use super::{
    errors::MergeError,
    stats::{MergeOutcome, MergeStats},
};

pub const STATISTIC: &str = "statistic";
pub const WAR_SNAPSHOT: &str = "war_snapshot";
pub const EVENT_SNAPSHOT: &str = "event_snapshot";
pub const PLANET_SNAPSHOT: &str = "planet_snapshot";
pub const SNAPSHOT: &str = "snapshot";

async fn insert_statistics(
    txn: &DatabaseTransaction,
    statistics: &Statistics,
    stats: &mut MergeStats,
) -> Result<i32, MergeError> {
    let row = statistic_do::ActiveModel::from(statistics)
        .insert(txn)
        .await
        .map_err(|e| MergeError::database(STATISTIC, e))?;
    stats.record(STATISTIC, MergeOutcome::Inserted);
    Ok(row.id)
}

/// Writes every sub-snapshot, then the aggregate row referencing their generated ids.
pub async fn merge_snapshot(
    txn: &DatabaseTransaction,
    snapshot: &Snapshot,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let statistic_id = insert_statistics(txn, &snapshot.statistics(), stats).await?;

    let war_snapshot = war_snapshot_do::ActiveModel::from(&snapshot.war())
        .insert(txn)
        .await
        .map_err(|e| MergeError::database(WAR_SNAPSHOT, e))?;
    stats.record(WAR_SNAPSHOT, MergeOutcome::Inserted);

    let mut planet_snapshot_ids = Vec::with_capacity(snapshot.planets().len());
    for planet in snapshot.planets() {
        let event_snapshot_id = match planet.event() {
            Some(event) => {
                let row = event_snapshot_do::ActiveModel::from(event)
                    .insert(txn)
                    .await
                    .map_err(|e| MergeError::database(EVENT_SNAPSHOT, e))?;
                stats.record(EVENT_SNAPSHOT, MergeOutcome::Inserted);
                Some(row.id)
            }
            None => None,
        };
        let planet_statistic_id = insert_statistics(txn, &planet.statistics(), stats).await?;

        let row =
            planet_snapshot_do::ActiveModel::linked(planet, event_snapshot_id, planet_statistic_id)
                .insert(txn)
                .await
                .map_err(|e| MergeError::database(PLANET_SNAPSHOT, e))?;
        stats.record(PLANET_SNAPSHOT, MergeOutcome::Inserted);
        planet_snapshot_ids.push(row.id);
    }

    snapshot_do::ActiveModel::linked(snapshot, war_snapshot.id, planet_snapshot_ids, statistic_id)
        .insert(txn)
        .await
        .map_err(|e| MergeError::database(SNAPSHOT, e))?;
    stats.record(SNAPSHOT, MergeOutcome::Inserted);
    Ok(())
}
