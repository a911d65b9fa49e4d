/// File names of the tables inside a campus bundle.
pub struct Config {
    pub buildings_file_name: String,
    pub shuttle_stops_file_name: String,
    pub shuttle_departures_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buildings_file_name: "buildings.txt".into(),
            shuttle_stops_file_name: "shuttle_stops.txt".into(),
            shuttle_departures_file_name: "shuttle_departures.txt".into(),
        }
    }
}
