mod common;

use campus_nav::{
    navigation::{self, LegType},
    prelude::*,
    shuttle,
};
use chrono::Weekday;

const NINE: Time = Time::from_hm(9, 0);

#[test]
fn same_campus_is_a_single_walk() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::Building("MB".into()))
        .departure_at(NINE)
        .on(Weekday::Mon)
        .solve()
        .unwrap();

    assert_eq!(itinerary.legs.len(), 1);
    assert_eq!(itinerary.legs[0].leg_type, LegType::Walk);
    assert!(!itinerary.uses_shuttle());
    assert_eq!(itinerary.departure_time(), Some(NINE));
    assert!(itinerary.duration().as_seconds() > 0);
    assert!(itinerary.duration().as_minutes() < 10);
}

#[test]
fn cross_campus_takes_next_shuttle() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::Building("VL".into()))
        .departure_at(NINE)
        .on(Weekday::Tue)
        .solve()
        .unwrap();

    let kinds: Vec<_> = itinerary
        .legs
        .iter()
        .map(|leg| match leg.leg_type {
            LegType::Walk => "walk",
            LegType::Shuttle { .. } => "shuttle",
            LegType::Indoor(_) => "indoor",
        })
        .collect();
    assert_eq!(kinds, vec!["walk", "shuttle", "walk"]);

    let ride = &itinerary.legs[1];
    assert_eq!(ride.departure_time, Time::from_hm(9, 30));
    assert_eq!(ride.arrival_time, Time::from_hm(10, 0));
    assert_eq!(
        ride.leg_type,
        LegType::Shuttle {
            from_stop: "SGW-HALL".into(),
            to_stop: "LOY-CHAPEL".into(),
        }
    );
    assert!(itinerary.arrival_time().unwrap() > Time::from_hm(10, 0));
    assert!(itinerary.distance().as_kilometers() > 5.0);
}

#[test]
fn friday_uses_friday_schedule() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("LB".into()), Location::Building("CC".into()))
        .departure_at(NINE)
        .on(Weekday::Fri)
        .solve()
        .unwrap();
    let ride = itinerary
        .legs
        .iter()
        .find(|leg| matches!(leg.leg_type, LegType::Shuttle { .. }))
        .unwrap();
    assert_eq!(ride.departure_time, Time::from_hm(9, 45));
}

#[test]
fn room_destination_ends_indoors() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::room("VL", "2"))
        .departure_at(NINE)
        .on(Weekday::Wed)
        .solve()
        .unwrap();

    let last = itinerary.legs.last().unwrap();
    let LegType::Indoor(direction) = &last.leg_type else {
        panic!("expected an indoor leg, got {:?}", last.leg_type);
    };
    assert_eq!(
        direction.text,
        "Take the elevator up from floor 1 to floor 2\n Please follow the route outline on floor 2"
    );
    assert_eq!(last.instruction(), direction.text);
    assert_eq!(last.duration().as_seconds(), 20);
}

#[test]
fn room_on_entrance_floor() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::room("H", "1"))
        .departure_at(NINE)
        .using("stairs")
        .solve()
        .unwrap();

    assert_eq!(itinerary.legs.len(), 1);
    let LegType::Indoor(direction) = &itinerary.legs[0].leg_type else {
        panic!("expected an indoor leg");
    };
    assert!(direction.is_same_floor());
    assert!(!direction.text.contains("stairs"));
}

#[test]
fn basement_room_has_no_direction_word() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("MB".into()), Location::room("MB", "S2"))
        .departure_at(NINE)
        .using("stairs")
        .solve()
        .unwrap();
    assert_eq!(
        itinerary.instructions().last().unwrap(),
        "Take the stairs  from floor 1 to floor S2\n Please follow the route outline on floor S2"
    );
}

#[test]
fn custom_entrance_floor() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::room("H", "9"))
        .entrance_floor("2")
        .departure_at(NINE)
        .solve()
        .unwrap();
    assert!(
        itinerary
            .instructions()
            .last()
            .unwrap()
            .starts_with("Take the elevator up from floor 2 to floor 9")
    );
}

#[test]
fn coordinates_resolve_to_campus() {
    let repository = common::repository();
    let itinerary = repository
        .planner(common::VANIER.into(), Location::Building("CC".into()))
        .departure_at(NINE)
        .solve()
        .unwrap();
    assert!(!itinerary.uses_shuttle());
}

#[test]
fn weekend_has_no_shuttle() {
    let repository = common::repository();
    let result = repository
        .planner(Location::Building("H".into()), Location::Building("VL".into()))
        .departure_at(NINE)
        .on(Weekday::Sat)
        .solve();
    assert!(matches!(
        result,
        Err(navigation::Error::NoDeparture {
            campus: Campus::Sgw,
            ..
        })
    ));
}

#[test]
fn late_evening_has_no_shuttle() {
    let repository = common::repository();
    let result = repository
        .planner(Location::Building("VL".into()), Location::Building("H".into()))
        .departure_at(Time::from_hm(22, 0))
        .on(Weekday::Mon)
        .solve();
    assert!(matches!(
        result,
        Err(navigation::Error::NoDeparture {
            campus: Campus::Loyola,
            ..
        })
    ));
}

#[test]
fn unknown_building_is_an_error() {
    let repository = common::repository();
    let result = repository
        .planner(Location::Building("XX".into()), Location::Building("H".into()))
        .solve();
    assert_eq!(
        result.unwrap_err(),
        navigation::Error::InvalidBuildingId("XX".to_string())
    );
}

#[test]
fn unknown_floor_is_an_error() {
    let repository = common::repository();
    let result = repository
        .planner(Location::Building("H".into()), Location::room("H", "42"))
        .solve();
    assert_eq!(
        result.unwrap_err(),
        navigation::Error::InvalidFloor {
            building: "H".to_string(),
            floor: "42".to_string(),
        }
    );
}

#[test]
fn buildings_without_floor_list_accept_any_floor() {
    let repository = common::repository();
    let result = repository
        .planner(Location::Building("VL".into()), Location::room("CC", "3"))
        .departure_at(NINE)
        .solve();
    assert!(result.is_ok());
}

#[test]
fn huge_floor_number_saturates_travel_time() {
    let repository = common::repository();
    let itinerary = repository
        .planner(Location::Building("H".into()), Location::room("LB", "999999999"))
        .departure_at(NINE)
        .solve()
        .unwrap();

    let indoor = itinerary.legs.last().unwrap();
    assert!(matches!(indoor.leg_type, LegType::Indoor(_)));
    assert_eq!(indoor.arrival_time.as_seconds(), u32::MAX);
    assert!(
        indoor
            .instruction()
            .starts_with("Take the elevator up from floor 1 to floor 999999999")
    );
}

#[test]
fn missing_shuttle_stop_is_an_error() {
    let repository = Repository::new().with_buildings(common::buildings());
    let result = repository
        .planner(Location::Building("H".into()), Location::Building("VL".into()))
        .departure_at(NINE)
        .solve();
    assert_eq!(
        result.unwrap_err(),
        navigation::Error::NoShuttleStop(Campus::Sgw)
    );
}

#[test]
fn next_departures_respects_time_and_count() {
    let repository = common::repository();
    let departures =
        shuttle::next_departures(&repository, Campus::Sgw, Weekday::Thu, Time::from_hm(9, 31), 2);
    let times: Vec<_> = departures.iter().map(|d| d.time).collect();
    assert_eq!(times, vec![Time::from_hm(10, 0), Time::from_hm(10, 30)]);

    let sunday =
        shuttle::next_departures(&repository, Campus::Sgw, Weekday::Sun, Time::from_hm(0, 0), 5);
    assert!(sunday.is_empty());
}

#[test]
fn next_trip_arrives_after_the_ride() {
    let repository = common::repository();
    let trip = shuttle::next_trip(&repository, Campus::Loyola, Weekday::Mon, NINE).unwrap();
    assert_eq!(trip.departure.time, Time::from_hm(9, 45));
    assert_eq!(trip.arrival, Time::from_hm(9, 45) + shuttle::SHUTTLE_RIDE);
    assert_eq!(trip.to_stop.as_ref(), "SGW-HALL");
}
