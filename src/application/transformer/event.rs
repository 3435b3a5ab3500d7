use crate::domain::event::Event;
use crate::infrastructure::web::models::PlanetPayload;
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

/// Events are carried by the planets they are fought on. Planets without one are skipped.
pub fn transform_events(planets: &Option<Vec<PlanetPayload>>) -> Result<Vec<Event>, TransformError> {
    let mut events = Vec::new();
    for (i, planet) in fetched(planets, Resource::Planets)?.iter().enumerate() {
        let event = match &planet.event {
            Some(event) => event,
            None => continue,
        };
        let scope = Scope::item(Resource::Planets, i).child("event");
        events.push(Event::new(
            *scope.required(&event.id, "id")?,
            *scope.required(&event.campaign_id, "campaignId")?,
            *scope.required(&event.event_type, "eventType")?,
            scope.required(&event.faction, "faction")?,
            *scope.required(&event.max_health, "maxHealth")?,
            *scope.required(&event.start_time, "startTime")?,
            *scope.required(&event.end_time, "endTime")?,
        ));
    }
    Ok(events)
}
