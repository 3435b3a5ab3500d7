use crate::domain::planet::{Biome, Hazard, Planet, Position};
use crate::infrastructure::web::models::{NamedPayload, OneOf, PlanetPayload, PositionPayload};
use crate::infrastructure::web::request::Resource;

use super::errors::{fetched, Scope, TransformError};

pub fn transform_planets(planets: &Option<Vec<PlanetPayload>>) -> Result<Vec<Planet>, TransformError> {
    fetched(planets, Resource::Planets)?
        .iter()
        .enumerate()
        .map(|(i, planet)| transform_planet(planet, &Scope::item(Resource::Planets, i)))
        .collect()
}

pub(crate) fn transform_planet(planet: &PlanetPayload, scope: &Scope) -> Result<Planet, TransformError> {
    let id = *scope.required(&planet.index, "index")?;
    let name = scope.required(&planet.name, "name")?;
    let sector = scope.required(&planet.sector, "sector")?;
    let position = resolve_position(scope.required(&planet.position, "position")?, scope)?;
    let waypoints = scope.required(&planet.waypoints, "waypoints")?.clone();
    let max_health = *scope.required(&planet.max_health, "maxHealth")?;
    let disabled = *scope.required(&planet.disabled, "disabled")?;
    let initial_owner = scope.required(&planet.initial_owner, "initialOwner")?;

    let biome_scope = scope.child("biome");
    let (biome_name, biome_description) =
        named(scope.required(&planet.biome, "biome")?, &biome_scope)?;
    let biome = Biome::new(biome_name, biome_description);

    let hazards = scope
        .required(&planet.hazards, "hazards")?
        .iter()
        .enumerate()
        .map(|(i, hazard)| {
            let (name, description) = named(hazard, &scope.child(&format!("hazards[{}]", i)))?;
            Ok(Hazard::new(name, description))
        })
        .collect::<Result<Vec<_>, TransformError>>()?;

    Ok(Planet::new(
        id,
        name,
        sector,
        position,
        waypoints,
        max_health,
        disabled,
        initial_owner,
        biome,
        hazards,
    ))
}

fn named<'a>(payload: &'a NamedPayload, scope: &Scope) -> Result<(&'a str, &'a str), TransformError> {
    let name = scope.required(&payload.name, "name")?;
    let description = scope.required(&payload.description, "description")?;
    Ok((name.as_str(), description.as_str()))
}

fn resolve_position(
    position: &OneOf<PositionPayload>,
    scope: &Scope,
) -> Result<Position, TransformError> {
    match position {
        OneOf::Resolved(PositionPayload::Point { x, y }) => Ok(Position::new(*x, *y)),
        OneOf::Resolved(PositionPayload::Components(components)) => {
            Position::from_components(components).map_err(|e| scope.invalid("position", &e))
        }
        OneOf::Unresolved(_) => Err(scope.unresolved("position")),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn planet(position: Value) -> Value {
        json!({
            "index": 0,
            "name": "Super Earth",
            "sector": "Sol",
            "biome": {"name": "Earth", "description": "Home"},
            "hazards": [],
            "position": position,
            "waypoints": [1, 2],
            "maxHealth": 1000000,
            "disabled": false,
            "initialOwner": "Humans"
        })
    }

    fn parse(values: Vec<Value>) -> Option<Vec<PlanetPayload>> {
        Some(serde_json::from_value(Value::Array(values)).unwrap())
    }

    #[test]
    fn it_should_accept_both_position_shapes() {
        let planets = transform_planets(&parse(vec![
            planet(json!({"x": 0.0, "y": 0.5})),
            planet(json!([0.0, 0.5])),
        ]))
        .unwrap();

        assert_eq!(planets[0].position(), planets[1].position());
        assert_eq!(planets[0].biome().name(), "Earth");
    }

    #[test]
    fn it_should_reject_the_group_on_a_bad_position() {
        let err = transform_planets(&parse(vec![
            planet(json!([0.0, 0.5])),
            planet(json!([0.0, 0.5, 1.0])),
        ]))
        .unwrap_err();

        assert!(matches!(
            err,
            TransformError::InvalidValue { ref field, .. } if field == "[1].position"
        ));

        let err = transform_planets(&parse(vec![planet(json!("north"))])).unwrap_err();
        assert!(matches!(err, TransformError::UnresolvedUnion { .. }));
    }

    #[test]
    fn it_should_report_nested_missing_fields() {
        let mut broken = planet(json!([0.0, 0.5]));
        broken["hazards"] = json!([{"name": "Fire Tornadoes"}]);

        let err = transform_planets(&parse(vec![broken])).unwrap_err();

        assert_eq!(
            err,
            TransformError::MissingField {
                resource: Resource::Planets,
                field: "[0].hazards[0].description".to_string()
            }
        );
    }
}
