use std::{
    cmp,
    fmt::Display,
    iter::Sum,
    ops::{Add, Sub},
};

use serde::{Deserialize, Serialize};

/// Campus paths are never straight lines, walking distances are stretched by this factor.
const CIRCUITY_FACTOR: f64 = 1.3;
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|distance| distance.0).sum())
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 >= 1000.0 {
            write!(f, "{:.1} km", self.as_kilometers())
        } else {
            write!(f, "{:.0} m", self.0)
        }
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

/// A latitude/longitude pair in decimal degrees.
/// Coordinates are plain values, they are handed to map views and planners
/// but never mutated by them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}, {}", self.latitude, self.longitude))
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(value: Coordinate) -> Self {
        (value.latitude, value.longitude)
    }
}

impl Sum for Coordinate {
    /// Centroid of the coordinates. An empty iterator yields the default coordinate.
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let (count, lat, lon) = iter.fold((0usize, 0.0, 0.0), |(count, lat, lon), coord| {
            (count + 1, lat + coord.latitude, lon + coord.longitude)
        });
        if count == 0 {
            return Self::default();
        }
        Self {
            latitude: lat / count as f64,
            longitude: lon / count as f64,
        }
    }
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great circle distance (haversine).
    pub fn euclidean_distance(&self, coord: &Self) -> Distance {
        let dist_lat = f64::to_radians(coord.latitude - self.latitude);
        let dist_lon = f64::to_radians(coord.longitude - self.longitude);
        let a = f64::powi(f64::sin(dist_lat / 2.0), 2)
            + f64::cos(f64::to_radians(self.latitude))
                * f64::cos(f64::to_radians(coord.latitude))
                * f64::powi(f64::sin(dist_lon / 2.0), 2);
        let c = 2.0 * f64::atan2(f64::sqrt(a), f64::sqrt(1.0 - a));
        Distance::from_kilometers(EARTH_RADIUS_KM * c)
    }

    /// Estimated distance along walkable paths.
    pub fn network_distance(&self, coord: &Self) -> Distance {
        Distance::from_meters(self.euclidean_distance(coord).as_meters() * CIRCUITY_FACTOR)
    }
}

/// The visible window of a map view: a center and the span shown around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub const fn around(center: Coordinate, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            center,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        (coordinate.latitude - self.center.latitude).abs() <= self.latitude_delta / 2.0
            && (coordinate.longitude - self.center.longitude).abs() <= self.longitude_delta / 2.0
    }
}

#[test]
fn distance_test() {
    let hall = Coordinate::new(45.497_163, -73.578_535);
    let loyola = Coordinate::new(45.458_424, -73.638_369);
    let d = hall.euclidean_distance(&loyola);
    assert!((d.as_kilometers() - 6.4).abs() < 0.5);
}

#[test]
fn network_distance_is_longer() {
    let a = Coordinate::new(45.4973, -73.5790);
    let b = Coordinate::new(45.4953, -73.5779);
    assert!(a.network_distance(&b) > a.euclidean_distance(&b));
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_display_test() {
    assert_eq!(Distance::from_meters(420.4).to_string(), "420 m");
    assert_eq!(Distance::from_meters(6400.0).to_string(), "6.4 km");
}

#[test]
fn empty_centroid_is_default() {
    let centroid: Coordinate = Vec::<Coordinate>::new().into_iter().sum();
    assert_eq!(centroid, Coordinate::default());
}

#[test]
fn region_contains_test() {
    let region = Region::around(Coordinate::new(45.0, -73.0), 0.01, 0.01);
    assert!(region.contains(&Coordinate::new(45.004, -73.004)));
    assert!(!region.contains(&Coordinate::new(45.006, -73.0)));
}
