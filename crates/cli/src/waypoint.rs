use campus_nav::prelude::{Coordinate, Location, Time};

/// `H` is a building, `H:8` a floor in it, `45.49,-73.57` a coordinate.
pub fn location_from_str(value: &str) -> Option<Location> {
    if let Some((latitude, longitude)) = value.split_once(',') {
        let latitude: f64 = latitude.trim().parse().ok()?;
        let longitude: f64 = longitude.trim().parse().ok()?;
        return Some(Coordinate::new(latitude, longitude).into());
    }
    match value.split_once(':') {
        Some((building, floor)) if !building.is_empty() && !floor.is_empty() => {
            Some(Location::room(building, floor))
        }
        Some(_) => None,
        None if value.is_empty() => None,
        None => Some(Location::Building(value.into())),
    }
}

/// Optional `HH:MM` argument, defaulting to the current time.
pub fn time_from_arg(value: Option<&String>) -> Option<Time> {
    match value {
        Some(value) => Time::from_hms(value),
        None => Some(Time::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_buildings_and_rooms() {
        assert_eq!(location_from_str("H"), Some(Location::Building("H".into())));
        assert_eq!(location_from_str("MB:S2"), Some(Location::room("MB", "S2")));
        assert_eq!(location_from_str("H:"), None);
        assert_eq!(location_from_str(""), None);
    }

    #[test]
    fn parses_coordinates() {
        assert_eq!(
            location_from_str("45.5, -73.6"),
            Some(Location::Coordinate(Coordinate::new(45.5, -73.6)))
        );
        assert_eq!(location_from_str("north,-73.6"), None);
    }
}
