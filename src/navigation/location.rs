use crate::{repository::Building, shared::geo::Coordinate};
use std::{fmt::Display, sync::Arc};

#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A building by its code.
    Building(Arc<str>),
    /// A floor inside a building, reached through the main entrance.
    Room { building: Arc<str>, floor: Arc<str> },
    Coordinate(Coordinate),
}

impl Location {
    pub fn room(building: &str, floor: &str) -> Self {
        Self::Room {
            building: building.into(),
            floor: floor.into(),
        }
    }

    pub fn building_id(&self) -> Option<&str> {
        match self {
            Self::Building(id) | Self::Room { building: id, .. } => Some(id.as_ref()),
            Self::Coordinate(_) => None,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Building(id) => write!(f, "{id}"),
            Self::Room { building, floor } => write!(f, "{building} floor {floor}"),
            Self::Coordinate(coordinate) => write!(f, "{coordinate}"),
        }
    }
}

impl From<&Building> for Location {
    fn from(value: &Building) -> Self {
        Self::Building(value.id.clone())
    }
}

impl From<Building> for Location {
    fn from(value: Building) -> Self {
        Self::Building(value.id)
    }
}

impl From<Coordinate> for Location {
    fn from(value: Coordinate) -> Self {
        Self::Coordinate(value)
    }
}
