//! Geo Module - Coordinates and great-circle distance.
//!
//! Shipping locations and vendor locations arrive as decimal degrees,
//! sometimes as strings from upstream payloads; parsing is permissive for
//! numeric text and rejects everything else. Distance is the haversine
//! approximation on a spherical Earth, adequate for ranking vendors, not
//! for navigation.

mod coordinate;
mod distance;

pub use coordinate::{parse_degrees, Coordinate};
pub use distance::distance_km;
