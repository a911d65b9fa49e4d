use crate::shared::geo::{Coordinate, Region};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Display,
    str::FromStr,
    sync::{Arc, Weak},
    time::Duration,
};
use thiserror::Error;
use tracing::{debug, trace};

/// Span of the map window after recentering on a campus.
pub const RECENTER_DELTA: f64 = 0.01;
/// How long the map view takes to animate to the new campus.
pub const RECENTER_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Campus {
    /// Sir George Williams, downtown.
    #[default]
    #[serde(rename = "SGW")]
    Sgw,
    #[serde(rename = "LOY", alias = "Loyola")]
    Loyola,
}

impl Campus {
    pub const fn from_is_sgw(is_sgw: bool) -> Self {
        if is_sgw { Self::Sgw } else { Self::Loyola }
    }

    pub const fn is_sgw(&self) -> bool {
        matches!(self, Self::Sgw)
    }

    /// The only transition: each campus flips to the other.
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Sgw => Self::Loyola,
            Self::Loyola => Self::Sgw,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sgw => "SGW",
            Self::Loyola => "LOY",
        }
    }
}

impl Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown campus: {0}")]
pub struct ParseCampusError(String);

impl FromStr for Campus {
    type Err = ParseCampusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sgw" | "sir george williams" => Ok(Self::Sgw),
            "loy" | "loyola" => Ok(Self::Loyola),
            _ => Err(ParseCampusError(value.to_string())),
        }
    }
}

/// The coordinate pair a toggle switches between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CampusCoordinates {
    pub sgw: Coordinate,
    pub loyola: Coordinate,
}

impl Default for CampusCoordinates {
    fn default() -> Self {
        Self {
            sgw: Coordinate::new(45.497_3, -73.579_0),
            loyola: Coordinate::new(45.458_2, -73.640_5),
        }
    }
}

impl CampusCoordinates {
    pub const fn of(&self, campus: Campus) -> Coordinate {
        match campus {
            Campus::Sgw => self.sgw,
            Campus::Loyola => self.loyola,
        }
    }

    /// The campus whose center is closest to `coordinate`.
    pub fn nearest(&self, coordinate: &Coordinate) -> Campus {
        if self.sgw.euclidean_distance(coordinate) <= self.loyola.euclidean_distance(coordinate) {
            Campus::Sgw
        } else {
            Campus::Loyola
        }
    }
}

/// A map view that can be asked to move its viewport.
/// Implementors own the animation; callers never wait on it.
pub trait MapView {
    fn animate_to_region(&self, region: Region, duration: Duration);
}

pub type CampusCallback<'a> = Box<dyn FnMut(bool) + 'a>;

/// Holds which campus is active and keeps an attached map view centered on it.
///
/// The toggle is the single owner of the selection. The map view is held
/// weakly: before it is attached, or after it is dropped, toggling still
/// works and only the recenter is skipped.
pub struct CampusToggle<'a> {
    campus: Campus,
    coordinates: CampusCoordinates,
    on_change: CampusCallback<'a>,
    map: Option<Weak<dyn MapView>>,
}

impl<'a> CampusToggle<'a> {
    pub fn new<F>(coordinates: CampusCoordinates, on_change: F) -> Self
    where
        F: FnMut(bool) + 'a,
    {
        Self {
            campus: Campus::Sgw,
            coordinates,
            on_change: Box::new(on_change),
            map: None,
        }
    }

    pub fn with_initial(mut self, is_sgw: bool) -> Self {
        self.campus = Campus::from_is_sgw(is_sgw);
        self
    }

    /// Only a weak handle is kept, the caller stays the owner of the map.
    pub fn attach_map(&mut self, map: Arc<dyn MapView>) {
        self.map = Some(Arc::downgrade(&map));
    }

    pub fn detach_map(&mut self) {
        self.map = None;
    }

    pub fn is_sgw(&self) -> bool {
        self.campus.is_sgw()
    }

    pub fn campus(&self) -> Campus {
        self.campus
    }

    pub fn coordinates(&self) -> &CampusCoordinates {
        &self.coordinates
    }

    pub fn active_coordinate(&self) -> Coordinate {
        self.coordinates.of(self.campus)
    }

    /// Switches to the other campus, notifies the owner and recenters the map.
    pub fn toggle(&mut self) -> Campus {
        self.campus = self.campus.toggled();
        debug!("Campus toggled to {}", self.campus);
        (self.on_change)(self.campus.is_sgw());

        match self.map.as_ref().and_then(Weak::upgrade) {
            Some(map) => {
                let region =
                    Region::around(self.active_coordinate(), RECENTER_DELTA, RECENTER_DELTA);
                map.animate_to_region(region, RECENTER_DURATION);
            }
            None => trace!("No map view attached, skipping recenter"),
        }
        self.campus
    }
}

impl std::fmt::Debug for CampusToggle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusToggle")
            .field("campus", &self.campus)
            .field("coordinates", &self.coordinates)
            .field("map_attached", &self.map.is_some())
            .finish()
    }
}
