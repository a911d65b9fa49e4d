pub mod itinerary;
pub mod location;

pub use itinerary::*;
pub use location::*;

use crate::{
    campus::Campus,
    indoor::{Floor, IndoorDirection},
    repository::Repository,
    shared::{
        geo::{Coordinate, Distance},
        time::{self, Duration, Time},
    },
    shuttle,
};
use chrono::Weekday;
use thiserror::Error;
use tracing::debug;

/// Entrances are on the first floor unless told otherwise.
const DEFAULT_ENTRANCE_FLOOR: &str = "1";
const DEFAULT_TRANSPORT: &str = "elevator";
/// Time spent per floor travelled, and for any floor change we cannot count.
const PER_FLOOR: Duration = Duration::from_seconds(20);
const UNKNOWN_FLOOR_CHANGE: Duration = Duration::from_minutes(1);

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Building id does not match any entry: {0}")]
    InvalidBuildingId(String),
    #[error("Building {building} has no floor {floor}")]
    InvalidFloor { building: String, floor: String },
    #[error("No shuttle stop on campus {0}")]
    NoShuttleStop(Campus),
    #[error("No shuttle leaves {campus} after {after}")]
    NoDeparture { campus: Campus, after: Time },
}

/// Plans a trip between two locations, walking on the same campus and taking
/// the shuttle across campuses.
pub struct Planner<'a> {
    repository: &'a Repository,
    from: Location,
    to: Location,
    departure: Time,
    weekday: Weekday,
    transport: String,
    entrance_floor: String,
}

impl<'a> Planner<'a> {
    pub fn new(repository: &'a Repository, from: Location, to: Location) -> Self {
        Self {
            repository,
            from,
            to,
            departure: Time::now(),
            weekday: time::today(),
            transport: DEFAULT_TRANSPORT.to_string(),
            entrance_floor: DEFAULT_ENTRANCE_FLOOR.to_string(),
        }
    }

    pub fn departure_at(mut self, departure: Time) -> Self {
        self.departure = departure;
        self
    }

    pub fn on(mut self, weekday: Weekday) -> Self {
        self.weekday = weekday;
        self
    }

    /// How to change floors inside the destination, e.g. "stairs".
    pub fn using(mut self, transport: &str) -> Self {
        self.transport = transport.to_string();
        self
    }

    pub fn entrance_floor(mut self, floor: &str) -> Self {
        self.entrance_floor = floor.to_string();
        self
    }

    pub fn solve(self) -> Result<Itinerary, self::Error> {
        let from_coord = self.coordinate(&self.from)?;
        let to_coord = self.coordinate(&self.to)?;
        self.validate_floor(&self.to)?;

        let campuses = &self.repository.campuses;
        let from_campus = campuses.nearest(&from_coord);
        let to_campus = campuses.nearest(&to_coord);
        debug!(
            "Planning {} ({from_campus}) to {} ({to_campus})",
            self.from, self.to
        );

        let mut legs = Vec::new();
        let mut clock = self.departure;
        if from_campus == to_campus {
            push_walk(&mut legs, &mut clock, from_coord, to_coord);
        } else {
            let pick_up = self
                .repository
                .shuttle_stop_by_campus(from_campus)
                .ok_or(Error::NoShuttleStop(from_campus))?;
            let drop_off = self
                .repository
                .shuttle_stop_by_campus(to_campus)
                .ok_or(Error::NoShuttleStop(to_campus))?;

            push_walk(&mut legs, &mut clock, from_coord, pick_up.coordinate);
            let trip = shuttle::next_trip(self.repository, from_campus, self.weekday, clock)
                .ok_or(Error::NoDeparture {
                    campus: from_campus,
                    after: clock,
                })?;
            debug!("Taking the {} shuttle from {from_campus}", trip.departure.time);
            legs.push(Leg {
                from: pick_up.coordinate,
                to: drop_off.coordinate,
                departure_time: trip.departure.time,
                arrival_time: trip.arrival,
                distance: pick_up.coordinate.network_distance(&drop_off.coordinate),
                leg_type: LegType::Shuttle {
                    from_stop: trip.from_stop,
                    to_stop: trip.to_stop,
                },
            });
            clock = trip.arrival;
            push_walk(&mut legs, &mut clock, drop_off.coordinate, to_coord);
        }

        if let Location::Room { floor, .. } = &self.to {
            let direction = IndoorDirection::new(&self.entrance_floor, floor, &self.transport);
            let arrival_time = clock + floor_change_time(&self.entrance_floor, floor);
            legs.push(Leg {
                from: to_coord,
                to: to_coord,
                departure_time: clock,
                arrival_time,
                distance: Distance::default(),
                leg_type: LegType::Indoor(direction),
            });
        }

        Ok(Itinerary {
            from: self.from,
            to: self.to,
            legs,
        })
    }

    fn coordinate(&self, location: &Location) -> Result<Coordinate, self::Error> {
        self.repository.coordinate_of(location).ok_or_else(|| {
            Error::InvalidBuildingId(location.building_id().unwrap_or_default().to_string())
        })
    }

    fn validate_floor(&self, location: &Location) -> Result<(), self::Error> {
        if let Location::Room { building, floor } = location
            && let Some(found) = self.repository.building_by_id(building)
            && !found.has_floor(floor)
        {
            return Err(Error::InvalidFloor {
                building: building.to_string(),
                floor: floor.to_string(),
            });
        }
        Ok(())
    }
}

/// Adds a walking leg unless the two points coincide.
fn push_walk(legs: &mut Vec<Leg>, clock: &mut Time, from: Coordinate, to: Coordinate) {
    let distance = from.network_distance(&to);
    if distance.as_meters() <= 0.0 {
        return;
    }
    let departure_time = *clock;
    *clock += time_to_walk(distance);
    legs.push(Leg {
        from,
        to,
        departure_time,
        arrival_time: *clock,
        distance,
        leg_type: LegType::Walk,
    });
}

pub fn time_to_walk(distance: Distance) -> Duration {
    // m/s
    const AVERAGE_WALK_SPEED: f64 = 1.5;
    Duration::from_seconds((distance.as_meters() / AVERAGE_WALK_SPEED).ceil() as u32)
}

fn floor_change_time(origin: &str, destination: &str) -> Duration {
    match (Floor::parse(origin).number(), Floor::parse(destination).number()) {
        (Some(from), Some(to)) => {
            let floors = u32::try_from(from.abs_diff(to)).unwrap_or(u32::MAX);
            Duration::from_seconds(PER_FLOOR.as_seconds().saturating_mul(floors))
        }
        _ => UNKNOWN_FLOOR_CHANGE,
    }
}

#[test]
fn walk_time_test() {
    assert_eq!(time_to_walk(Distance::from_meters(150.0)).as_seconds(), 100);
    assert_eq!(time_to_walk(Distance::from_meters(1.0)).as_seconds(), 1);
}

#[test]
fn floor_change_test() {
    assert_eq!(floor_change_time("1", "4").as_seconds(), 60);
    assert_eq!(floor_change_time("1", "1").as_seconds(), 0);
    assert_eq!(floor_change_time("1", "S2"), UNKNOWN_FLOOR_CHANGE);
    assert_eq!(floor_change_time("1", "999999999").as_seconds(), u32::MAX);
}
