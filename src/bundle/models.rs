use crate::campus::Campus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BundleBuilding {
    pub building_id: String,
    pub building_name: String,
    pub campus: Campus,
    pub building_lat: f64,
    pub building_lon: f64,
    pub address: Option<String>,
    /// Floor labels separated by `;`, lowest first.
    pub floors: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BundleShuttleStop {
    pub stop_id: String,
    pub stop_name: String,
    pub campus: Campus,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BundleDeparture {
    /// Campus the shuttle leaves from.
    pub campus: Campus,
    /// `HH:MM` or `HH:MM:SS`.
    pub departure_time: String,
    /// `mon-thu` or `fri`.
    pub service: String,
}
