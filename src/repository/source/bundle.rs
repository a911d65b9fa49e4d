use crate::{
    bundle::{self, BundleReader},
    repository::{Building, Departure, Repository, ShuttleStop},
    shared::{Coordinate, Time, fuzzy::normalize},
    shuttle::ServiceDay,
};
use std::{sync::Arc, time::Instant};
use tracing::{debug, warn};

impl Repository {
    /// Loads every table of the bundle. Buildings are required, a bundle
    /// without shuttle tables loads with no shuttle service.
    pub fn load_bundle(mut self, bundle: BundleReader) -> Result<Self, bundle::Error> {
        self.load_buildings(&bundle)?;
        optional(self.load_shuttle_stops(&bundle))?;
        optional(self.load_departures(&bundle))?;
        Ok(self)
    }

    fn load_buildings(&mut self, bundle: &BundleReader) -> Result<(), bundle::Error> {
        debug!("Loading buildings...");
        let now = Instant::now();
        let mut buildings: Vec<Building> = Vec::new();
        bundle.stream_buildings(|(_, row)| {
            let floors = row
                .floors
                .as_deref()
                .map(|floors| {
                    floors
                        .split(';')
                        .map(str::trim)
                        .filter(|floor| !floor.is_empty())
                        .map(Arc::from)
                        .collect()
                })
                .unwrap_or_default();
            buildings.push(Building {
                index: 0,
                normalized_name: normalize(&row.building_name).into(),
                id: row.building_id.into(),
                name: row.building_name.into(),
                campus: row.campus,
                coordinate: Coordinate::new(row.building_lat, row.building_lon),
                address: row.address.map(Arc::from),
                floors,
            });
        })?;
        let count = buildings.len();
        *self = std::mem::take(self).with_buildings(buildings);
        debug!("Loading {count} buildings took {:?}", now.elapsed());
        Ok(())
    }

    fn load_shuttle_stops(&mut self, bundle: &BundleReader) -> Result<(), bundle::Error> {
        debug!("Loading shuttle stops...");
        let now = Instant::now();
        let mut stops: Vec<ShuttleStop> = Vec::new();
        bundle.stream_shuttle_stops(|(_, row)| {
            stops.push(ShuttleStop::new(
                &row.stop_id,
                &row.stop_name,
                row.campus,
                Coordinate::new(row.stop_lat, row.stop_lon),
            ));
        })?;
        *self = std::mem::take(self).with_shuttle_stops(stops);
        debug!("Loading shuttle stops took {:?}", now.elapsed());
        Ok(())
    }

    fn load_departures(&mut self, bundle: &BundleReader) -> Result<(), bundle::Error> {
        debug!("Loading shuttle departures...");
        let now = Instant::now();
        let mut departures: Vec<Departure> = Vec::new();
        bundle.stream_shuttle_departures(|(i, row)| {
            let Some(time) = Time::from_hms(&row.departure_time) else {
                warn!("Departure {i} has an invalid time: {}", row.departure_time);
                return;
            };
            let Ok(service) = row.service.parse::<ServiceDay>() else {
                warn!("Departure {i} has an unknown service: {}", row.service);
                return;
            };
            departures.push(Departure::new(row.campus, time, service));
        })?;
        *self = std::mem::take(self).with_departures(departures);
        debug!("Loading shuttle departures took {:?}", now.elapsed());
        Ok(())
    }
}

fn optional(result: Result<(), bundle::Error>) -> Result<(), bundle::Error> {
    match result {
        Err(bundle::Error::FileNotFound(name)) => {
            warn!("Bundle has no {name}, continuing without it");
            Ok(())
        }
        other => other,
    }
}
