use crate::domain::war::War;
use crate::infrastructure::web::models::{WarIdPayload, WarSummaryPayload};
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

/// Combines the war id with the war summary.
pub fn transform_war(
    war_id: &Option<WarIdPayload>,
    summary: &Option<WarSummaryPayload>,
) -> Result<War, TransformError> {
    let war_id = fetched(war_id, Resource::WarId)?;
    let summary = fetched(summary, Resource::WarSummary)?;

    let id = *Scope::root(Resource::WarId).required(&war_id.id, "id")?;
    let scope = Scope::root(Resource::WarSummary);
    let start_time = *scope.required(&summary.started, "started")?;
    let end_time = *scope.required(&summary.ended, "ended")?;
    let factions = scope.required(&summary.factions, "factions")?.clone();

    Ok(War::new(id, start_time, end_time, factions))
}
