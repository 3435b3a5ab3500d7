//! Merge of the current-state tables.
//!
//! Every row here is keyed by the upstream id (or name) and upserted. Composite entities merge
//! their children first.

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter};

use crate::domain::{
    assignment::Assignment, campaign::Campaign, dispatch::Dispatch, event::Event, planet::Planet,
    war::War,
};
use crate::infrastructure::db::entities::{
    assignment_do, assignment_task_do, biome_do, campaign_do, dispatch_do, event_do, hazard_do,
    planet_do, war_do,
};

use super::{
    errors::MergeError,
    stats::{MergeOutcome, MergeStats},
    upsert::upsert,
};

pub const WAR: &str = "war";
pub const BIOME: &str = "biome";
pub const HAZARD: &str = "hazard";
pub const PLANET: &str = "planet";
pub const CAMPAIGN: &str = "campaign";
pub const EVENT: &str = "event";
pub const ASSIGNMENT_TASK: &str = "assignment_task";
pub const ASSIGNMENT: &str = "assignment";
pub const DISPATCH: &str = "dispatch";

pub async fn merge_war(
    txn: &DatabaseTransaction,
    war: &War,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let outcome = upsert::<war_do::Entity, war_do::ActiveModel>(txn, war.into())
        .await
        .map_err(|e| MergeError::database(WAR, e))?;
    stats.record(WAR, outcome);
    Ok(())
}

/// Biome and hazards first, each only once per transaction, then the planet row.
pub async fn merge_planet(
    txn: &DatabaseTransaction,
    planet: &Planet,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let biome = planet.biome();
    if stats.first_sighting(BIOME, biome.name()) {
        let outcome = upsert::<biome_do::Entity, biome_do::ActiveModel>(txn, biome.into())
            .await
            .map_err(|e| MergeError::database(BIOME, e))?;
        stats.record(BIOME, outcome);
    } else {
        stats.record(BIOME, MergeOutcome::Noop);
    }

    for hazard in planet.hazards() {
        if !stats.first_sighting(HAZARD, hazard.name()) {
            stats.record(HAZARD, MergeOutcome::Noop);
            continue;
        }
        let outcome = upsert::<hazard_do::Entity, hazard_do::ActiveModel>(txn, hazard.into())
            .await
            .map_err(|e| MergeError::database(HAZARD, e))?;
        stats.record(HAZARD, outcome);
    }

    let outcome = upsert::<planet_do::Entity, planet_do::ActiveModel>(txn, planet.into())
        .await
        .map_err(|e| MergeError::database(PLANET, e))?;
    stats.record(PLANET, outcome);
    Ok(())
}

pub async fn merge_campaign(
    txn: &DatabaseTransaction,
    campaign: &Campaign,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let outcome = upsert::<campaign_do::Entity, campaign_do::ActiveModel>(txn, campaign.into())
        .await
        .map_err(|e| MergeError::database(CAMPAIGN, e))?;
    stats.record(CAMPAIGN, outcome);
    Ok(())
}

pub async fn merge_event(
    txn: &DatabaseTransaction,
    event: &Event,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let outcome = upsert::<event_do::Entity, event_do::ActiveModel>(txn, event.into())
        .await
        .map_err(|e| MergeError::database(EVENT, e))?;
    stats.record(EVENT, outcome);
    Ok(())
}

pub async fn merge_dispatch(
    txn: &DatabaseTransaction,
    dispatch: &Dispatch,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let outcome = upsert::<dispatch_do::Entity, dispatch_do::ActiveModel>(txn, dispatch.into())
        .await
        .map_err(|e| MergeError::database(DISPATCH, e))?;
    stats.record(DISPATCH, outcome);
    Ok(())
}

/// Tasks are matched on (assignment id, position). Their ids are embedded into the assignment
/// row, and tasks past the current list length are removed.
pub async fn merge_assignment(
    txn: &DatabaseTransaction,
    assignment: &Assignment,
    stats: &mut MergeStats,
) -> Result<(), MergeError> {
    let db_err = |e: DbErr| MergeError::database(ASSIGNMENT_TASK, e);
    let mut task_ids = Vec::with_capacity(assignment.tasks().len());

    for (position, task) in assignment.tasks().iter().enumerate() {
        let position = position as i32;
        let stored = assignment_task_do::Entity::find()
            .filter(assignment_task_do::Column::AssignmentId.eq(assignment.id()))
            .filter(assignment_task_do::Column::Position.eq(position))
            .one(txn)
            .await
            .map_err(db_err)?;

        let id = match stored {
            None => {
                let row = assignment_task_do::ActiveModel {
                    id: NotSet,
                    assignment_id: Set(assignment.id()),
                    position: Set(position),
                    task_type: Set(task.task_type()),
                    values: Set(task.values().clone().into()),
                    value_types: Set(task.value_types().clone().into()),
                }
                .insert(txn)
                .await
                .map_err(db_err)?;
                stats.record(ASSIGNMENT_TASK, MergeOutcome::Inserted);
                row.id
            }
            Some(row) if row.holds(task) => {
                stats.record(ASSIGNMENT_TASK, MergeOutcome::Updated);
                row.id
            }
            Some(row) => {
                let id = row.id;
                let mut active: assignment_task_do::ActiveModel = row.into();
                active.task_type = Set(task.task_type());
                active.values = Set(task.values().clone().into());
                active.value_types = Set(task.value_types().clone().into());
                active.update(txn).await.map_err(db_err)?;
                stats.record(ASSIGNMENT_TASK, MergeOutcome::Updated);
                id
            }
        };
        task_ids.push(id);
    }

    assignment_task_do::Entity::delete_many()
        .filter(assignment_task_do::Column::AssignmentId.eq(assignment.id()))
        .filter(assignment_task_do::Column::Position.gte(task_ids.len() as i32))
        .exec(txn)
        .await
        .map_err(db_err)?;

    let model = assignment_do::Model::from_domain(assignment, task_ids);
    let outcome = upsert::<assignment_do::Entity, assignment_do::ActiveModel>(txn, model)
        .await
        .map_err(|e| MergeError::database(ASSIGNMENT, e))?;
    stats.record(ASSIGNMENT, outcome);
    Ok(())
}
