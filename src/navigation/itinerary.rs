use crate::{
    indoor::IndoorDirection,
    navigation::location::Location,
    shared::{
        geo::{Coordinate, Distance},
        time::{Duration, Time},
    },
};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum LegType {
    Walk,
    Shuttle {
        from_stop: Arc<str>,
        to_stop: Arc<str>,
    },
    Indoor(IndoorDirection),
}

#[derive(Debug, Clone)]
pub struct Leg {
    pub from: Coordinate,
    pub to: Coordinate,
    pub departure_time: Time,
    pub arrival_time: Time,
    pub distance: Distance,
    pub leg_type: LegType,
}

impl Leg {
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }

    /// One line of text describing the leg.
    pub fn instruction(&self) -> String {
        match &self.leg_type {
            LegType::Walk => format!(
                "Walk {} ({}) until {}",
                self.distance,
                self.duration(),
                self.arrival_time
            ),
            LegType::Shuttle { from_stop, to_stop } => format!(
                "Take the shuttle at {} from {from_stop} to {to_stop}, arriving {}",
                self.departure_time, self.arrival_time
            ),
            LegType::Indoor(direction) => direction.text.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Itinerary {
    pub from: Location,
    pub to: Location,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    pub fn departure_time(&self) -> Option<Time> {
        self.legs.first().map(|leg| leg.departure_time)
    }

    pub fn arrival_time(&self) -> Option<Time> {
        self.legs.last().map(|leg| leg.arrival_time)
    }

    pub fn duration(&self) -> Duration {
        match (self.departure_time(), self.arrival_time()) {
            (Some(departure), Some(arrival)) => arrival - departure,
            _ => Duration::default(),
        }
    }

    /// Total outdoor distance, walking and riding.
    pub fn distance(&self) -> Distance {
        self.legs.iter().map(|leg| leg.distance).sum()
    }

    pub fn uses_shuttle(&self) -> bool {
        self.legs
            .iter()
            .any(|leg| matches!(leg.leg_type, LegType::Shuttle { .. }))
    }

    pub fn instructions(&self) -> Vec<String> {
        self.legs.iter().map(Leg::instruction).collect()
    }
}
