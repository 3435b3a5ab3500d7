//! Planet Domain Object Definition
//!
//! Planets carry the static description of a world. The biome and hazards are owned by value
//! and are written to their own tables before the planet itself.

use std::error::Error;
use std::fmt;

use getset::{CopyGetters, Getters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionArityError(pub usize);

impl fmt::Display for PositionArityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a position needs exactly 2 components, got {}", self.0)
    }
}

impl Error for PositionArityError {}

/// Galactic map coordinate. Always exactly two components.
#[derive(Debug, PartialEq, Clone, Copy, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_components(components: &[f64]) -> Result<Self, PositionArityError> {
        match components {
            [x, y] => Ok(Self::new(*x, *y)),
            other => Err(PositionArityError(other.len())),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Getters)]
#[getset(get = "pub")]
pub struct Biome {
    name: String,
    description: String,
}

impl Biome {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Getters)]
#[getset(get = "pub")]
pub struct Hazard {
    name: String,
    description: String,
}

impl Hazard {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Getters, CopyGetters)]
pub struct Planet {
    #[getset(get_copy = "pub")]
    id: i64,

    #[getset(get = "pub")]
    name: String,

    #[getset(get = "pub")]
    sector: String,

    #[getset(get_copy = "pub")]
    position: Position,

    #[getset(get = "pub")]
    waypoints: Vec<i64>,

    #[getset(get_copy = "pub")]
    max_health: i64,

    #[getset(get_copy = "pub")]
    disabled: bool,

    #[getset(get = "pub")]
    initial_owner: String,

    #[getset(get = "pub")]
    biome: Biome,

    #[getset(get = "pub")]
    hazards: Vec<Hazard>,
}

#[allow(clippy::too_many_arguments)]
impl Planet {
    pub fn new(
        id: i64,
        name: &str,
        sector: &str,
        position: Position,
        waypoints: Vec<i64>,
        max_health: i64,
        disabled: bool,
        initial_owner: &str,
        biome: Biome,
        hazards: Vec<Hazard>,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            sector: sector.to_string(),
            position,
            waypoints,
            max_health,
            disabled,
            initial_owner: initial_owner.to_string(),
            biome,
            hazards,
        }
    }

    pub fn hazard_names(&self) -> Vec<String> {
        self.hazards.iter().map(|h| h.name().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_requires_two_components() {
        assert_eq!(
            Position::from_components(&[0.5, -0.25]),
            Ok(Position::new(0.5, -0.25))
        );
        assert_eq!(
            Position::from_components(&[0.5]),
            Err(PositionArityError(1))
        );
        assert_eq!(
            Position::from_components(&[0.5, 1.0, 2.0]),
            Err(PositionArityError(3))
        );
    }
}
