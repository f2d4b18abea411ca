//! Plate carrée (equidistant cylindrical) projection in degrees.
use serde::{Deserialize, Serialize};

use super::{relative_lon, valid_lat, MapProjection, INVALID_XY};
use crate::errors::SkymapResult;
use crate::frames::normalize_lon;

/// Longitude and latitude mapped directly onto x and y, in degrees.
///
/// The x coordinate is centered on `lon_0`, so x spans `lon_0 - 180` to
/// `lon_0 + 180`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical {
    /// Central meridian in degrees.
    pub lon_0: f64,

    /// Longitude increases to the left when true.
    pub celestial: bool,
}

impl Cylindrical {
    /// Construct a new cylindrical projection.
    pub fn new(lon_0: f64, celestial: bool) -> Self {
        Self { lon_0, celestial }
    }

    #[inline(always)]
    fn x_sign(&self) -> f64 {
        if self.celestial {
            -1.0
        } else {
            1.0
        }
    }
}

impl MapProjection for Cylindrical {
    fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]> {
        if !valid_lat(lat) || !lon.is_finite() {
            return Ok(INVALID_XY);
        }
        Ok([
            self.lon_0 + self.x_sign() * relative_lon(lon, self.lon_0),
            lat,
        ])
    }

    fn inverse(&self, x: f64, y: f64) -> SkymapResult<[f64; 2]> {
        let delta = self.x_sign() * (x - self.lon_0);
        if !valid_lat(y) || !delta.is_finite() || delta.abs() > 180.0 + 1e-8 {
            return Ok(INVALID_XY);
        }
        Ok([normalize_lon(self.lon_0 + delta), y])
    }

    fn lon_max(&self) -> f64 {
        self.lon_0 + 180.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::is_valid_xy;

    #[test]
    fn test_centered() {
        let proj = Cylindrical::new(100.0, false);
        assert_eq!(proj.project(110.0, 5.0).unwrap(), [110.0, 5.0]);
        // wraps to the left side of the map
        let [x, _] = proj.project(290.0, 5.0).unwrap();
        assert!((x + 70.0).abs() < 1e-12);
        assert_eq!(proj.lon_max(), 280.0);
    }

    #[test]
    fn test_celestial() {
        let proj = Cylindrical::new(100.0, true);
        let [x, y] = proj.project(110.0, 5.0).unwrap();
        assert!((x - 90.0).abs() < 1e-12);
        let [lon, lat] = proj.inverse(x, y).unwrap();
        assert!((lon - 110.0).abs() < 1e-12);
        assert_eq!(lat, 5.0);
    }

    #[test]
    fn test_invalid() {
        let proj = Cylindrical::new(0.0, false);
        assert!(!is_valid_xy(&proj.project(0.0, -90.5).unwrap()));
        assert!(!is_valid_xy(&proj.inverse(181.0, 0.0).unwrap()));
        assert!(!is_valid_xy(&proj.inverse(0.0, 95.0).unwrap()));
    }
}
