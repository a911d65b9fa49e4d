#![allow(dead_code)]

use campus_nav::prelude::*;

pub const HALL: Coordinate = Coordinate::new(45.497_163, -73.578_535);
pub const JMSB: Coordinate = Coordinate::new(45.495_304, -73.579_044);
pub const WEBSTER: Coordinate = Coordinate::new(45.496_890, -73.577_990);
pub const VANIER: Coordinate = Coordinate::new(45.459_026, -73.638_606);
pub const CENTRAL: Coordinate = Coordinate::new(45.458_204, -73.640_300);

pub const SGW_STOP: Coordinate = Coordinate::new(45.497_129, -73.578_469);
pub const LOY_STOP: Coordinate = Coordinate::new(45.458_424, -73.638_369);

pub fn buildings() -> Vec<Building> {
    vec![
        Building::new("H", "Henry F. Hall Building", Campus::Sgw, HALL)
            .with_address("1455 De Maisonneuve Blvd. W.")
            .with_floors(&["S2", "1", "2", "3", "4", "5", "6", "7", "8", "9"]),
        Building::new("MB", "John Molson Building", Campus::Sgw, JMSB)
            .with_address("1450 Guy St.")
            .with_floors(&["S2", "1", "2", "3", "4"]),
        Building::new("LB", "Webster Library", Campus::Sgw, WEBSTER),
        Building::new("VL", "Vanier Library", Campus::Loyola, VANIER)
            .with_floors(&["1", "2"]),
        Building::new("CC", "Central Building", Campus::Loyola, CENTRAL),
    ]
}

pub fn shuttle_stops() -> Vec<ShuttleStop> {
    vec![
        ShuttleStop::new("SGW-HALL", "Hall Building stop", Campus::Sgw, SGW_STOP),
        ShuttleStop::new("LOY-CHAPEL", "Loyola Chapel stop", Campus::Loyola, LOY_STOP),
    ]
}

pub fn departures() -> Vec<Departure> {
    let mut departures = Vec::new();
    for (hours, minutes) in [(9, 30), (10, 0), (10, 30), (17, 45)] {
        departures.push(Departure::new(
            Campus::Sgw,
            Time::from_hm(hours, minutes),
            ServiceDay::MondayToThursday,
        ));
        departures.push(Departure::new(
            Campus::Loyola,
            Time::from_hm(hours, minutes + 15),
            ServiceDay::MondayToThursday,
        ));
    }
    departures.push(Departure::new(
        Campus::Sgw,
        Time::from_hm(9, 45),
        ServiceDay::Friday,
    ));
    departures
}

pub fn repository() -> Repository {
    Repository::new()
        .with_buildings(buildings())
        .with_shuttle_stops(shuttle_stops())
        .with_departures(departures())
}
