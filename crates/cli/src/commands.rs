use crate::waypoint::{location_from_str, time_from_arg};
use campus_nav::{
    bundle,
    navigation::{self, LegType},
    prelude::*,
    shared::time::today,
    shuttle,
};
use std::{sync::Arc, time::Duration};
use thiserror::Error;
use tracing::info;

const SEARCH_RESULTS: usize = 5;
const SHUTTLE_RESULTS: usize = 3;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid arguments")]
    Usage,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Bundle(#[from] bundle::Error),
    #[error(transparent)]
    Navigation(#[from] navigation::Error),
}

pub fn indoor(args: &[String]) -> Result<(), Error> {
    let (origin, destination) = match args {
        [origin, destination, ..] => (origin, destination),
        _ => return Err(Error::Usage),
    };
    let transport = args.get(2).map(String::as_str).unwrap_or("elevator");
    println!(
        "{}",
        generate_indoor_direction(origin, destination, transport)
    );
    Ok(())
}

/// Stands in for the map widget: reports where it was asked to move.
struct LoggingMap;

impl MapView for LoggingMap {
    fn animate_to_region(&self, region: Region, duration: Duration) {
        info!(
            "Recentering map on {} ({} x {}) over {:?}",
            region.center, region.latitude_delta, region.longitude_delta, duration
        );
    }
}

pub fn toggle(args: &[String]) -> Result<(), Error> {
    let times: usize = match args.first() {
        Some(value) => value
            .parse()
            .map_err(|_| Error::InvalidArgument(value.clone()))?,
        None => 1,
    };
    let map = Arc::new(LoggingMap);
    let mut toggle = CampusToggle::new(CampusCoordinates::default(), |is_sgw| {
        println!("{}", Campus::from_is_sgw(is_sgw));
    });
    toggle.attach_map(map.clone());
    (0..times).for_each(|_| {
        toggle.toggle();
    });
    Ok(())
}

pub fn search(repository: &Repository, args: &[String]) -> Result<(), Error> {
    if args.is_empty() {
        return Err(Error::Usage);
    }
    let query = args.join(" ");
    repository
        .search_buildings_by_name(&query)
        .into_iter()
        .take(SEARCH_RESULTS)
        .for_each(|building| {
            println!(
                "{:<4} {} [{}] {}",
                building.id,
                building.name,
                building.campus,
                building.address.as_deref().unwrap_or_default()
            );
        });
    Ok(())
}

pub fn shuttle(repository: &Repository, args: &[String]) -> Result<(), Error> {
    let campus: Campus = args
        .first()
        .ok_or(Error::Usage)?
        .parse()
        .map_err(|_| Error::InvalidArgument(args[0].clone()))?;
    let at = time_from_arg(args.get(1)).ok_or_else(|| Error::InvalidArgument(args[1].clone()))?;

    for marker in shuttle::markers(repository) {
        println!("stop {} {} at {}", marker.campus, marker.name, marker.coordinate);
    }
    let departures = shuttle::next_departures(repository, campus, today(), at, SHUTTLE_RESULTS);
    if departures.is_empty() {
        println!("No more shuttles from {campus} today");
    }
    for departure in departures {
        println!("{} -> {}", departure.time, departure.campus.toggled());
    }
    Ok(())
}

pub fn route(repository: &Repository, args: &[String]) -> Result<(), Error> {
    let (from, to) = match args {
        [from, to, ..] => (from, to),
        _ => return Err(Error::Usage),
    };
    let from = location_from_str(from).ok_or(Error::InvalidArgument(from.clone()))?;
    let to = location_from_str(to).ok_or(Error::InvalidArgument(to.clone()))?;
    let at = time_from_arg(args.get(2)).ok_or_else(|| Error::InvalidArgument(args[2].clone()))?;

    let itinerary = repository.planner(from, to).departure_at(at).solve()?;
    for leg in &itinerary.legs {
        let label = match leg.leg_type {
            LegType::Walk => "walk",
            LegType::Shuttle { .. } => "shuttle",
            LegType::Indoor(_) => "indoor",
        };
        println!("[{label}] {}", leg.instruction());
    }
    println!(
        "{} in total, {}",
        itinerary.duration(),
        itinerary.distance()
    );
    Ok(())
}
