use std::sync::Arc;

use crate::{
    campus::Campus,
    shared::{Identifiable, Time, fuzzy::normalize, geo::Coordinate},
    shuttle::ServiceDay,
};

/// A campus building that can be searched for and navigated to.
#[derive(Debug, Default, Clone)]
pub struct Building {
    /// Position in the repository, used for O(1) lookups.
    pub index: u32,
    /// Short code painted on the building, e.g. "H" or "MB".
    pub id: Arc<str>,
    pub name: Arc<str>,
    /// Lowercased name used by the fuzzy search.
    pub normalized_name: Arc<str>,
    pub campus: Campus,
    /// Main entrance.
    pub coordinate: Coordinate,
    pub address: Option<Arc<str>>,
    /// Floor labels, lowest first. Empty when unknown.
    pub floors: Box<[Arc<str>]>,
}

impl Building {
    pub fn new(id: &str, name: &str, campus: Campus, coordinate: Coordinate) -> Self {
        Self {
            index: 0,
            id: id.into(),
            name: name.into(),
            normalized_name: normalize(name).into(),
            campus,
            coordinate,
            address: None,
            floors: Box::default(),
        }
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_floors(mut self, floors: &[&str]) -> Self {
        self.floors = floors.iter().map(|floor| Arc::from(*floor)).collect();
        self
    }

    /// True when the floor is listed, or when the building lists no floors at all.
    pub fn has_floor(&self, label: &str) -> bool {
        self.floors.is_empty() || self.floors.iter().any(|floor| floor.as_ref() == label)
    }
}

impl Identifiable for Building {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// Where the inter-campus shuttle picks up and drops off on one campus.
#[derive(Debug, Default, Clone)]
pub struct ShuttleStop {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub campus: Campus,
    pub coordinate: Coordinate,
}

impl ShuttleStop {
    pub fn new(id: &str, name: &str, campus: Campus, coordinate: Coordinate) -> Self {
        Self {
            index: 0,
            id: id.into(),
            name: name.into(),
            normalized_name: normalize(name).into(),
            campus,
            coordinate,
        }
    }
}

impl Identifiable for ShuttleStop {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

/// One scheduled shuttle departure from a campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub campus: Campus,
    pub time: Time,
    pub service: ServiceDay,
}

impl Departure {
    pub const fn new(campus: Campus, time: Time, service: ServiceDay) -> Self {
        Self {
            campus,
            time,
            service,
        }
    }
}
