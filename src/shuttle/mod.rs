//! The inter-campus shuttle: map markers for its stops and the schedule.

use crate::{
    campus::Campus,
    repository::{Departure, Repository},
    shared::{Coordinate, Duration, Time},
};
use chrono::Weekday;
use serde::Serialize;
use std::{fmt::Display, str::FromStr, sync::Arc};
use thiserror::Error;

/// Door to door ride between the two campus stops.
pub const SHUTTLE_RIDE: Duration = Duration::from_minutes(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServiceDay {
    MondayToThursday,
    Friday,
}

impl ServiceDay {
    /// The shuttle does not run on weekends.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                Some(Self::MondayToThursday)
            }
            Weekday::Fri => Some(Self::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

impl Display for ServiceDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MondayToThursday => f.write_str("mon-thu"),
            Self::Friday => f.write_str("fri"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown shuttle service: {0}")]
pub struct ParseServiceError(String);

impl FromStr for ServiceDay {
    type Err = ParseServiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mon-thu" | "monday-thursday" | "weekday" => Ok(Self::MondayToThursday),
            "fri" | "friday" => Ok(Self::Friday),
            _ => Err(ParseServiceError(value.to_string())),
        }
    }
}

/// What the map shows for a shuttle stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShuttleMarker {
    pub stop_id: String,
    pub name: String,
    pub campus: Campus,
    pub coordinate: Coordinate,
}

pub fn markers(repository: &Repository) -> Vec<ShuttleMarker> {
    repository
        .shuttle_stops
        .iter()
        .map(|stop| ShuttleMarker {
            stop_id: stop.id.to_string(),
            name: stop.name.to_string(),
            campus: stop.campus,
            coordinate: stop.coordinate,
        })
        .collect()
}

/// Up to `count` departures leaving `from` at or after `at` on the given weekday.
pub fn next_departures(
    repository: &Repository,
    from: Campus,
    weekday: Weekday,
    at: Time,
    count: usize,
) -> Vec<Departure> {
    let Some(service) = ServiceDay::from_weekday(weekday) else {
        return Vec::new();
    };
    repository
        .departures_from(from)
        .filter(|departure| departure.service == service && departure.time >= at)
        .take(count)
        .copied()
        .collect()
}

/// A departure paired with where it leaves from and arrives.
#[derive(Debug, Clone)]
pub struct ShuttleTrip {
    pub departure: Departure,
    pub from_stop: Arc<str>,
    pub to_stop: Arc<str>,
    pub arrival: Time,
}

/// The first shuttle from `from` to the other campus leaving at or after `at`.
pub fn next_trip(
    repository: &Repository,
    from: Campus,
    weekday: Weekday,
    at: Time,
) -> Option<ShuttleTrip> {
    let from_stop = repository.shuttle_stop_by_campus(from)?;
    let to_stop = repository.shuttle_stop_by_campus(from.toggled())?;
    let departure = next_departures(repository, from, weekday, at, 1)
        .into_iter()
        .next()?;
    Some(ShuttleTrip {
        departure,
        from_stop: from_stop.id.clone(),
        to_stop: to_stop.id.clone(),
        arrival: departure.time + SHUTTLE_RIDE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_has_no_service() {
        assert_eq!(ServiceDay::from_weekday(Weekday::Sat), None);
        assert_eq!(ServiceDay::from_weekday(Weekday::Sun), None);
        assert_eq!(
            ServiceDay::from_weekday(Weekday::Wed),
            Some(ServiceDay::MondayToThursday)
        );
    }

    #[test]
    fn parse_service() {
        assert_eq!("mon-thu".parse(), Ok(ServiceDay::MondayToThursday));
        assert_eq!("FRI".parse(), Ok(ServiceDay::Friday));
        assert!("sunday".parse::<ServiceDay>().is_err());
    }

    #[test]
    fn service_round_trips_through_display() {
        for service in [ServiceDay::MondayToThursday, ServiceDay::Friday] {
            assert_eq!(service.to_string().parse(), Ok(service));
        }
    }
}
