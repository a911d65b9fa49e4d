use std::{collections::HashMap, sync::Arc};

mod entities;
mod source;
pub use entities::*;
use rayon::prelude::*;

use crate::{
    campus::{Campus, CampusCoordinates},
    navigation::{Location, Planner},
    shared::{
        self,
        geo::{Coordinate, Distance},
    },
};

#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub buildings: Box<[Building]>,
    pub shuttle_stops: Box<[ShuttleStop]>,
    /// Sorted by campus, then departure time.
    pub departures: Box<[Departure]>,
    pub campuses: CampusCoordinates,

    building_lookup: HashMap<Arc<str>, u32>,
    campus_to_buildings: HashMap<Campus, Box<[u32]>>,
    campus_to_stop: HashMap<Campus, u32>,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_campuses(mut self, campuses: CampusCoordinates) -> Self {
        self.campuses = campuses;
        self
    }

    pub fn with_buildings(mut self, buildings: Vec<Building>) -> Self {
        self.buildings = buildings.into();
        self.index_buildings();
        self
    }

    pub fn with_shuttle_stops(mut self, stops: Vec<ShuttleStop>) -> Self {
        self.shuttle_stops = stops.into();
        self.index_shuttle_stops();
        self
    }

    pub fn with_departures(mut self, mut departures: Vec<Departure>) -> Self {
        departures.sort_by_key(|departure| (departure.campus.code(), departure.time));
        self.departures = departures.into();
        self
    }

    fn index_buildings(&mut self) {
        let mut building_lookup = HashMap::new();
        let mut campus_to_buildings: HashMap<Campus, Vec<u32>> = HashMap::new();
        self.buildings
            .iter_mut()
            .enumerate()
            .for_each(|(i, building)| {
                building.index = i as u32;
                building_lookup.insert(lookup_key(&building.id), i as u32);
                campus_to_buildings
                    .entry(building.campus)
                    .or_default()
                    .push(i as u32);
            });
        self.building_lookup = building_lookup;
        self.campus_to_buildings = campus_to_buildings
            .into_iter()
            .map(|(campus, indexes)| (campus, indexes.into()))
            .collect();
    }

    /// The first stop listed for a campus is its pick up point.
    fn index_shuttle_stops(&mut self) {
        let mut campus_to_stop = HashMap::new();
        self.shuttle_stops
            .iter_mut()
            .enumerate()
            .for_each(|(i, stop)| {
                stop.index = i as u32;
                campus_to_stop.entry(stop.campus).or_insert(i as u32);
            });
        self.campus_to_stop = campus_to_stop;
    }

    /// Get a building by its code. Codes are matched case-insensitively.
    pub fn building_by_id(&self, id: &str) -> Option<&Building> {
        let key = lookup_key(id);
        let index = self.building_lookup.get(&*key)?;
        Some(&self.buildings[*index as usize])
    }

    pub fn buildings_by_campus(&self, campus: Campus) -> Vec<&Building> {
        self.campus_to_buildings
            .get(&campus)
            .map(|indexes| {
                indexes
                    .iter()
                    .map(|index| &self.buildings[*index as usize])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Buildings within walking `distance` of the coordinate, closest first.
    pub fn buildings_by_coordinate(
        &self,
        coordinate: &Coordinate,
        distance: Distance,
    ) -> Vec<&Building> {
        let mut buildings: Vec<(&Building, Distance)> = self
            .buildings
            .par_iter()
            .map(|building| (building, building.coordinate.network_distance(coordinate)))
            .filter(|(_, walk)| *walk <= distance)
            .collect();
        buildings.par_sort_by(|(a, a_walk), (b, b_walk)| {
            a_walk
                .partial_cmp(b_walk)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });
        buildings.into_iter().map(|(building, _)| building).collect()
    }

    /// Does a fuzzy search on all the buildings, comparing their name and code to the needle.
    pub fn search_buildings_by_name<'a>(&'a self, needle: &str) -> Vec<&'a Building> {
        shared::search(needle, &self.buildings)
    }

    pub fn shuttle_stop_by_campus(&self, campus: Campus) -> Option<&ShuttleStop> {
        let index = self.campus_to_stop.get(&campus)?;
        Some(&self.shuttle_stops[*index as usize])
    }

    /// All departures leaving from a campus, in time order.
    pub fn departures_from(&self, campus: Campus) -> impl Iterator<Item = &Departure> {
        self.departures
            .iter()
            .filter(move |departure| departure.campus == campus)
    }

    /// Resolves a location to the coordinate it stands for.
    pub fn coordinate_of(&self, location: &Location) -> Option<Coordinate> {
        match location {
            Location::Coordinate(coordinate) => Some(*coordinate),
            Location::Building(id) | Location::Room { building: id, .. } => {
                self.building_by_id(id).map(|building| building.coordinate)
            }
        }
    }

    pub fn planner(&'_ self, from: Location, to: Location) -> Planner<'_> {
        Planner::new(self, from, to)
    }
}

fn lookup_key(id: &str) -> Arc<str> {
    id.trim().to_uppercase().into()
}
