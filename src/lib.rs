pub mod bundle;
pub mod campus;
pub mod indoor;
pub mod navigation;
pub mod repository;
pub mod shared;
pub mod shuttle;

pub mod prelude {
    pub use crate::bundle::{BundleReader, Config as BundleConfig};
    pub use crate::campus::{Campus, CampusCoordinates, CampusToggle, MapView};
    pub use crate::indoor::{Floor, IndoorDirection, VerticalDirection, generate_indoor_direction};
    pub use crate::navigation::{Itinerary, Leg, LegType, Location, Planner};
    pub use crate::repository::{Building, Departure, Repository, ShuttleStop};
    pub use crate::shared::{Coordinate, Distance, Duration, Region, Time};
    pub use crate::shuttle::{ServiceDay, ShuttleMarker};
}
