//! Reference ellipsoids for geodesic calculations.
use serde::{Deserialize, Serialize};

use crate::constants::{CELESTIAL_SPHERE_RADIUS, WGS84_A, WGS84_B};
use crate::errors::{Error, SkymapResult};

/// Ellipsoid of revolution defined by its semi-major and semi-minor axes in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major (equatorial) axis.
    pub a: f64,

    /// Semi-minor (polar) axis.
    pub b: f64,
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::celestial()
    }
}

impl Ellipsoid {
    /// Construct a new ellipsoid, `a >= b > 0` is required.
    pub fn new(a: f64, b: f64) -> SkymapResult<Self> {
        if !(a.is_finite() && b.is_finite() && b > 0.0 && a >= b) {
            Err(Error::ValueError(format!(
                "Ellipsoid axes must satisfy a >= b > 0, got a={} b={}",
                a, b
            )))?;
        }
        Ok(Self { a, b })
    }

    /// A sphere of the specified radius.
    pub fn sphere(radius: f64) -> SkymapResult<Self> {
        Self::new(radius, radius)
    }

    /// The WGS84 ellipsoid.
    pub fn wgs84() -> Self {
        Self {
            a: WGS84_A,
            b: WGS84_B,
        }
    }

    /// Sphere used to draw sky maps.
    pub fn celestial() -> Self {
        Self {
            a: CELESTIAL_SPHERE_RADIUS,
            b: CELESTIAL_SPHERE_RADIUS,
        }
    }

    /// Flattening of the ellipsoid.
    #[inline(always)]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// Second eccentricity squared, (a^2 - b^2) / b^2.
    #[inline(always)]
    pub(crate) fn second_ecc2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattening() {
        let wgs = Ellipsoid::wgs84();
        assert!((1.0 / wgs.flattening() - 298.257223563).abs() < 1e-6);
        assert_eq!(Ellipsoid::celestial().flattening(), 0.0);
    }

    #[test]
    fn test_invalid() {
        assert!(Ellipsoid::new(1.0, 2.0).is_err());
        assert!(Ellipsoid::new(1.0, 0.0).is_err());
        assert!(Ellipsoid::sphere(f64::NAN).is_err());
        assert!(Ellipsoid::sphere(2.0).is_ok());
    }
}
