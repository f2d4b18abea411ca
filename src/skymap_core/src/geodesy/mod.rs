//! # Geodesy
//! Geodesic distances and azimuths on an ellipsoid of revolution.
mod ellipsoid;
mod vincenty;

pub use ellipsoid::Ellipsoid;
pub use vincenty::{Geodesic, GeodesicForward, GeodesicInverse};
