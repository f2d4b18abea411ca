//! Polar stereographic projection centered on the south celestial pole.
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use super::{relative_lon, valid_lat, MapProjection, INVALID_XY};
use crate::errors::SkymapResult;
use crate::frames::normalize_lon;

/// Stereographic projection from the north pole onto the plane tangent to the south
/// pole.
///
/// The south pole maps to the origin and the central meridian points along +y.
/// This projection has no longitude seam, only the north pole itself is
/// unprojectable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SouthPolarStereographic {
    /// Central meridian in degrees.
    pub lon_0: f64,

    /// Latitude of the outer edge of the drawn map in degrees.
    pub bounding_lat: f64,

    /// Radius of the sphere.
    pub radius: f64,
}

impl SouthPolarStereographic {
    /// Construct a new south polar stereographic projection.
    pub fn new(lon_0: f64, bounding_lat: f64, radius: f64) -> Self {
        Self {
            lon_0,
            bounding_lat,
            radius,
        }
    }

    #[inline(always)]
    fn rho(&self, lat: f64) -> f64 {
        2.0 * self.radius * (FRAC_PI_4 + 0.5 * lat.to_radians()).tan()
    }

    /// Distance from the map center to the bounding latitude circle.
    pub fn boundary_radius(&self) -> f64 {
        self.rho(self.bounding_lat)
    }

    /// Is the point inside of the bounding latitude of the map.
    pub fn in_bounds(&self, lat: f64) -> bool {
        lat <= self.bounding_lat
    }
}

impl MapProjection for SouthPolarStereographic {
    fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]> {
        if !valid_lat(lat) || !lon.is_finite() || lat >= 90.0 - 1e-9 {
            return Ok(INVALID_XY);
        }
        let rho = self.rho(lat);
        let (sin_l, cos_l) = relative_lon(lon, self.lon_0).to_radians().sin_cos();
        Ok([rho * sin_l, rho * cos_l])
    }

    fn inverse(&self, x: f64, y: f64) -> SkymapResult<[f64; 2]> {
        if !x.is_finite() || !y.is_finite() {
            return Ok(INVALID_XY);
        }
        let rho = x.hypot(y);
        let lat = 2.0 * (rho / (2.0 * self.radius)).atan() - 2.0 * FRAC_PI_4;
        let lon = if rho == 0.0 {
            self.lon_0
        } else {
            self.lon_0 + x.atan2(y).to_degrees()
        };
        Ok([normalize_lon(lon), lat.to_degrees()])
    }

    fn lon_max(&self) -> f64 {
        self.lon_0 + 180.0
    }

    fn wraps(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::is_valid_xy;

    #[test]
    fn test_pole_and_axes() {
        let proj = SouthPolarStereographic::new(0.0, -20.0, 1.0);
        let [x, y] = proj.project(123.0, -90.0).unwrap();
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);

        // The equator sits at twice the radius.
        let [x, y] = proj.project(0.0, 0.0).unwrap();
        assert!(x.abs() < 1e-12);
        assert!((y - 2.0).abs() < 1e-12);
        let [x, y] = proj.project(90.0, 0.0).unwrap();
        assert!((x - 2.0).abs() < 1e-12);
        assert!(y.abs() < 1e-12);

        assert!(!proj.wraps());
        assert!(!is_valid_xy(&proj.project(0.0, 90.0).unwrap()));
    }

    #[test]
    fn test_boundary() {
        let proj = SouthPolarStereographic::new(0.0, 0.0, 1.0);
        assert!((proj.boundary_radius() - 2.0).abs() < 1e-12);
        assert!(proj.in_bounds(-10.0));
        assert!(!proj.in_bounds(10.0));
    }

    #[test]
    fn test_roundtrip() {
        let proj = SouthPolarStereographic::new(75.0, -20.0, 6370997.0);
        for lat in [-89.5, -60.0, -20.0, 0.0, 45.0] {
            for lon in [0.5, 75.0, 180.0, 254.0, 359.0] {
                let [x, y] = proj.project(lon, lat).unwrap();
                let [lon_b, lat_b] = proj.inverse(x, y).unwrap();
                assert!((lon_b - lon).abs() < 1e-8, "{} {}", lon, lon_b);
                assert!((lat_b - lat).abs() < 1e-8);
            }
        }
    }
}
