//! Mollweide equal area projection.
//!
//! <https://en.wikipedia.org/wiki/Mollweide_projection>
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use super::{relative_lon, valid_lat, MapProjection, INVALID_XY};
use crate::errors::{Error, SkymapResult};
use crate::frames::normalize_lon;

/// Mollweide projection of a sphere.
///
/// The full sky fits in an ellipse of half axes `2 sqrt(2) R` by `sqrt(2) R`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mollweide {
    /// Central meridian in degrees.
    pub lon_0: f64,

    /// Radius of the sphere.
    pub radius: f64,

    /// Longitude increases to the left when true.
    pub celestial: bool,
}

/// Solve for the auxiliary angle theta of the projection, where
/// `2 theta + sin(2 theta) = pi sin(lat)`.
///
/// This is a Newton-Raphson solve on `2 theta`. Near the poles the derivative vanishes
/// and convergence slows down, if the iteration runs out there the pole is returned.
fn auxiliary_angle(lat: f64) -> SkymapResult<f64> {
    if (FRAC_PI_2 - lat.abs()).abs() < 1e-12 {
        return Ok(FRAC_PI_2.copysign(lat));
    }
    let target = PI * lat.sin();

    let mut t = lat;
    for _ in 0..100 {
        let der = 1.0 + t.cos();
        if !der.is_finite() || der.abs() < 1e-300 {
            break;
        }
        let step = (t + t.sin() - target) / der;
        t -= step;
        if !t.is_finite() {
            break;
        }
        if step.abs() < 1e-13 {
            return Ok(0.5 * t);
        }
    }
    if lat.cos() < 1e-6 {
        return Ok(FRAC_PI_2.copysign(lat));
    }
    Err(Error::Convergence(format!(
        "Mollweide auxiliary angle failed to converge for latitude {} rad.",
        lat
    )))
}

impl Mollweide {
    /// Construct a new Mollweide projection.
    pub fn new(lon_0: f64, radius: f64, celestial: bool) -> Self {
        Self {
            lon_0,
            radius,
            celestial,
        }
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

impl MapProjection for Mollweide {
    fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]> {
        if !valid_lat(lat) || !lon.is_finite() {
            return Ok(INVALID_XY);
        }
        let lambda = relative_lon(lon, self.lon_0).to_radians();
        let theta = auxiliary_angle(lat.to_radians())?;
        let (sin_t, cos_t) = theta.sin_cos();
        let x = self.radius * 2.0 * SQRT_2 / PI * lambda * cos_t;
        let y = self.radius * SQRT_2 * sin_t;
        Ok([self.x_sign() * x, y])
    }

    fn inverse(&self, x: f64, y: f64) -> SkymapResult<[f64; 2]> {
        let x = self.x_sign() * x;
        let sin_t = y / (SQRT_2 * self.radius);
        if !sin_t.is_finite() || sin_t.abs() > 1.0 {
            return Ok(INVALID_XY);
        }
        let theta = sin_t.asin();
        let cos_t = theta.cos();
        let lambda = if cos_t < 1e-15 {
            0.0
        } else {
            PI * x / (2.0 * SQRT_2 * self.radius * cos_t)
        };
        if lambda.abs() > PI + 1e-9 {
            return Ok(INVALID_XY);
        }
        let sin_lat = ((2.0 * theta + (2.0 * theta).sin()) / PI).clamp(-1.0, 1.0);
        Ok([
            normalize_lon(self.lon_0 + lambda.to_degrees()),
            sin_lat.asin().to_degrees(),
        ])
    }

    fn lon_max(&self) -> f64 {
        self.lon_0 + 180.0
    }
}
