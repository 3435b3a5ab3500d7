use crate::domain::campaign::Campaign;
use crate::infrastructure::web::models::CampaignPayload;
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

pub fn transform_campaigns(
    campaigns: &Option<Vec<CampaignPayload>>,
) -> Result<Vec<Campaign>, TransformError> {
    fetched(campaigns, Resource::Campaigns)?
        .iter()
        .enumerate()
        .map(|(i, campaign)| {
            let scope = Scope::item(Resource::Campaigns, i);
            let id = *scope.required(&campaign.id, "id")?;
            let planet = scope.required(&campaign.planet, "planet")?;
            let planet_id = *scope.child("planet").required(&planet.index, "index")?;
            let campaign_type = *scope.required(&campaign.campaign_type, "type")?;
            let count = *scope.required(&campaign.count, "count")?;
            Ok(Campaign::new(id, planet_id, campaign_type, count))
        })
        .collect()
}
