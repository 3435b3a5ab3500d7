//! Merge Engine
//!
//! Applies ordered groups of domain entities to storage inside one transaction. Callers order
//! the groups so that every foreign key resolves to a row written earlier in the same
//! transaction; any failure rolls the whole batch back.

pub mod current;
pub mod errors;
pub mod snapshot;
pub mod stats;
pub mod upsert;

use std::sync::Arc;

use getset::Getters;
use log::{debug, error, info, warn};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::common::context::CycleContext;
use crate::domain::{
    assignment::Assignment, campaign::Campaign, dispatch::Dispatch, event::Event, planet::Planet,
    snapshot::Snapshot, war::War,
};

use self::{errors::MergeError, stats::MergeStats};

pub const DEFAULT_LOG_TARGET: &str = "war_sync::merge";

#[derive(Debug, Clone, PartialEq)]
pub enum MergeEntity {
    War(War),
    Campaign(Campaign),
    Event(Event),
    Planet(Planet),
    Assignment(Assignment),
    Dispatch(Dispatch),
    Snapshot(Snapshot),
}

impl MergeEntity {
    pub async fn apply(
        &self,
        txn: &DatabaseTransaction,
        stats: &mut MergeStats,
    ) -> Result<(), MergeError> {
        match self {
            MergeEntity::War(war) => current::merge_war(txn, war, stats).await,
            MergeEntity::Campaign(campaign) => current::merge_campaign(txn, campaign, stats).await,
            MergeEntity::Event(event) => current::merge_event(txn, event, stats).await,
            MergeEntity::Planet(planet) => current::merge_planet(txn, planet, stats).await,
            MergeEntity::Assignment(assignment) => {
                current::merge_assignment(txn, assignment, stats).await
            }
            MergeEntity::Dispatch(dispatch) => current::merge_dispatch(txn, dispatch, stats).await,
            MergeEntity::Snapshot(snapshot) => snapshot::merge_snapshot(txn, snapshot, stats).await,
        }
    }
}

/// A named batch of entities merged as a unit, in order.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct EntityGroup {
    name: String,
    entities: Vec<MergeEntity>,
}

impl EntityGroup {
    pub fn new(name: &str, entities: Vec<MergeEntity>) -> Self {
        Self {
            name: name.to_string(),
            entities,
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

pub struct MergeEngine {
    db: Arc<DatabaseConnection>,
    log_target: String,
}

impl MergeEngine {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }

    pub fn with_log_target(mut self, target: &str) -> Self {
        self.log_target = target.to_string();
        self
    }

    pub async fn merge(
        &self,
        ctx: &CycleContext,
        groups: &[EntityGroup],
    ) -> Result<MergeStats, MergeError> {
        let target = self.log_target.as_str();
        let txn = ctx
            .bound(self.db.begin())
            .await?
            .map_err(|e| MergeError::BeginFailed(e.to_string()))?;

        let mut stats = MergeStats::default();
        if let Err(e) = self.apply_groups(ctx, &txn, groups, &mut stats).await {
            error!(target: target, "[{}] merge failed, rolling back: {}", ctx.id(), e);
            // Dropping the transaction on expiry still rolls it back.
            match ctx.bound(txn.rollback()).await {
                Ok(Ok(())) => {}
                Ok(Err(rollback_err)) => {
                    error!(target: target, "[{}] rollback failed: {}", ctx.id(), rollback_err);
                }
                Err(reason) => {
                    warn!(target: target, "[{}] rollback abandoned: {}", ctx.id(), reason);
                }
            }
            return Err(e);
        }

        debug!(
            target: target,
            "[{}] committing with {:?} of the cycle budget left",
            ctx.id(),
            ctx.remaining()
        );
        txn.commit()
            .await
            .map_err(|e| MergeError::CommitFailed(e.to_string()))?;
        if ctx.check().is_err() {
            warn!(target: target, "[{}] commit finished past the cycle deadline", ctx.id());
        }
        info!(target: target, "[{}] merge committed: {}", ctx.id(), stats);
        Ok(stats)
    }

    async fn apply_groups(
        &self,
        ctx: &CycleContext,
        txn: &DatabaseTransaction,
        groups: &[EntityGroup],
        stats: &mut MergeStats,
    ) -> Result<(), MergeError> {
        for group in groups {
            info!(
                target: self.log_target.as_str(),
                "[{}] merging {} ({} entities)",
                ctx.id(),
                group.name(),
                group.len()
            );
            for entity in group.entities() {
                ctx.bound(entity.apply(txn, stats)).await??;
            }
        }
        ctx.check()?;
        Ok(())
    }
}
