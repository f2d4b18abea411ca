//! Forward and inverse geodesic problems on an ellipsoid.
//!
//! Implementation of Vincenty's iterative formulas, which are accurate to well below a
//! millimeter on the Earth ellipsoid. The inverse problem fails to converge for nearly
//! antipodal points, in which case a [`Error::Convergence`] is returned. Karney's
//! algorithm, as found in GeographicLib and PROJ, converges there, this solver does
//! not. Footprint circles only solve the inverse problem along a meridian, where
//! the iteration always converges, and are not affected.
//!
//! Angles are in degrees, distances in the units of the ellipsoid axes.
//!
//! <https://en.wikipedia.org/wiki/Vincenty%27s_formulae>
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::Ellipsoid;
use crate::constants::{GEODESIC_MAX_ITER, GEODESIC_TOL};
use crate::errors::{Error, SkymapResult};

/// Result of the inverse geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicInverse {
    /// Azimuth at the first point toward the second, degrees east of north.
    pub azimuth_forward: f64,

    /// Azimuth at the second point pointing back toward the first.
    pub azimuth_back: f64,

    /// Length of the geodesic between the points.
    pub distance: f64,
}

/// Result of the forward geodesic problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicForward {
    /// Longitude of the destination in [-180, 180).
    pub lon: f64,

    /// Latitude of the destination.
    pub lat: f64,

    /// Azimuth at the destination pointing back toward the start.
    pub azimuth_back: f64,
}

/// Geodesic solver on a fixed ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Geodesic {
    /// Reference ellipsoid.
    pub ellipsoid: Ellipsoid,
}

/// Wrap an angle in degrees to (-180, 180].
#[inline(always)]
fn wrap_azimuth(az: f64) -> f64 {
    let az = az.rem_euclid(360.0);
    if az > 180.0 {
        az - 360.0
    } else {
        az
    }
}

/// Wrap a longitude in degrees to [-180, 180).
#[inline(always)]
fn wrap_lon(lon: f64) -> f64 {
    let lon = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if lon >= 180.0 {
        -180.0
    } else {
        lon
    }
}

fn check_lat(lat: f64) -> SkymapResult<()> {
    if !(-90.0..=90.0).contains(&lat) {
        Err(Error::ValueError(format!(
            "Latitude must be within [-90, 90] degrees, got {}",
            lat
        )))?;
    }
    Ok(())
}

/// The A and B series coefficients of Vincenty's formulas.
#[inline(always)]
fn series_coefficients(u2: f64) -> (f64, f64) {
    let a = 1.0 + u2 / 16384.0 * (4096.0 + u2 * (-768.0 + u2 * (320.0 - 175.0 * u2)));
    let b = u2 / 1024.0 * (256.0 + u2 * (-128.0 + u2 * (74.0 - 47.0 * u2)));
    (a, b)
}

/// Difference between the arc length on the auxiliary sphere and the ellipsoid.
#[inline(always)]
fn delta_sigma(b: f64, sin_sigma: f64, cos_sigma: f64, cos_2sm: f64) -> f64 {
    let cos2 = cos_2sm * cos_2sm;
    b * sin_sigma
        * (cos_2sm
            + b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos2)
                    - b / 6.0 * cos_2sm * (-3.0 + 4.0 * sin_sigma * sin_sigma) * (-3.0 + 4.0 * cos2)))
}

/// Reduced latitude (sin, cos) for a geodetic latitude in radians.
#[inline(always)]
fn reduced_latitude(lat: f64, flattening: f64) -> (f64, f64) {
    ((1.0 - flattening) * lat.tan()).atan().sin_cos()
}

impl Geodesic {
    /// Construct a solver for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Solve the inverse problem, the distance and azimuths between two points.
    ///
    /// ```
    ///     use skymap_core::geodesy::{Ellipsoid, Geodesic};
    ///     let geod = Geodesic::new(Ellipsoid::sphere(1.0).unwrap());
    ///     let inv = geod.inverse(10.0, 20.0, 10.0, 24.0).unwrap();
    ///     assert!(inv.azimuth_forward.abs() < 1e-10);
    ///     assert!((inv.distance - 4f64.to_radians()).abs() < 1e-12);
    /// ```
    pub fn inverse(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
    ) -> SkymapResult<GeodesicInverse> {
        check_lat(lat1)?;
        check_lat(lat2)?;
        let f = self.ellipsoid.flattening();

        let big_l = wrap_lon(lon2 - lon1).to_radians();
        let (sin_u1, cos_u1) = reduced_latitude(lat1.to_radians(), f);
        let (sin_u2, cos_u2) = reduced_latitude(lat2.to_radians(), f);

        let mut lambda = big_l;
        let mut converged = false;
        let (mut sin_sigma, mut cos_sigma, mut sigma) = (0.0, 1.0, 0.0);
        let (mut cos2_alpha, mut cos_2sm) = (1.0, 0.0);
        let (mut sin_lambda, mut cos_lambda) = lambda.sin_cos();

        for _ in 0..GEODESIC_MAX_ITER {
            (sin_lambda, cos_lambda) = lambda.sin_cos();
            let t1 = cos_u2 * sin_lambda;
            let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
            sin_sigma = (t1 * t1 + t2 * t2).sqrt();
            if sin_sigma == 0.0 {
                // coincident points
                return Ok(GeodesicInverse {
                    azimuth_forward: 0.0,
                    azimuth_back: 180.0,
                    distance: 0.0,
                });
            }
            cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            cos2_alpha = 1.0 - sin_alpha * sin_alpha;
            // Along the equator cos2_alpha is zero and cos_2sm is undefined.
            cos_2sm = if cos2_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
            } else {
                0.0
            };
            let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
            let lambda_prev = lambda;
            lambda = big_l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma * (cos_2sm + c * cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)));

            // lambda may exceed pi a little for nearly antipodal points, but never 2 pi.
            if !lambda.is_finite() || lambda.abs() > TAU {
                break;
            }
            if (lambda - lambda_prev).abs() < GEODESIC_TOL {
                converged = true;
                (sin_lambda, cos_lambda) = lambda.sin_cos();
                break;
            }
        }
        if !converged {
            Err(Error::Convergence(format!(
                "Inverse geodesic failed to converge between ({}, {}) and ({}, {}), points may \
                 be nearly antipodal.",
                lon1, lat1, lon2, lat2
            )))?;
        }

        let u2 = cos2_alpha * self.ellipsoid.second_ecc2();
        let (big_a, big_b) = series_coefficients(u2);
        let d_sigma = delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sm);
        let distance = self.ellipsoid.b * big_a * (sigma - d_sigma);

        let alpha1 = (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
        let alpha2 = (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

        Ok(GeodesicInverse {
            azimuth_forward: wrap_azimuth(alpha1.to_degrees()),
            azimuth_back: wrap_azimuth(alpha2.to_degrees() + 180.0),
            distance,
        })
    }

    /// Solve the forward problem, the destination after traveling `distance` from
    /// the start along the specified initial azimuth.
    pub fn forward(
        &self,
        lon: f64,
        lat: f64,
        azimuth: f64,
        distance: f64,
    ) -> SkymapResult<GeodesicForward> {
        check_lat(lat)?;
        if !distance.is_finite() || !azimuth.is_finite() {
            Err(Error::ValueError(format!(
                "Forward geodesic requires finite inputs, got azimuth={} distance={}",
                azimuth, distance
            )))?;
        }
        let f = self.ellipsoid.flattening();
        let b = self.ellipsoid.b;

        let (sin_a1, cos_a1) = azimuth.to_radians().sin_cos();
        let u1 = ((1.0 - f) * lat.to_radians().tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let sigma1 = u1.tan().atan2(cos_a1);
        let sin_alpha = cos_u1 * sin_a1;
        let cos2_alpha = 1.0 - sin_alpha * sin_alpha;
        let u2 = cos2_alpha * self.ellipsoid.second_ecc2();
        let (big_a, big_b) = series_coefficients(u2);

        let sigma_base = distance / (b * big_a);
        let mut sigma = sigma_base;
        let mut converged = false;
        let (mut sin_sigma, mut cos_sigma, mut cos_2sm) = (0.0, 1.0, 0.0);
        for _ in 0..GEODESIC_MAX_ITER {
            cos_2sm = (2.0 * sigma1 + sigma).cos();
            (sin_sigma, cos_sigma) = sigma.sin_cos();
            let sigma_prev = sigma;
            sigma = sigma_base + delta_sigma(big_b, sin_sigma, cos_sigma, cos_2sm);
            if (sigma - sigma_prev).abs() < GEODESIC_TOL {
                converged = true;
                cos_2sm = (2.0 * sigma1 + sigma).cos();
                (sin_sigma, cos_sigma) = sigma.sin_cos();
                break;
            }
        }
        if !converged {
            Err(Error::Convergence(format!(
                "Forward geodesic failed to converge from ({}, {}) along azimuth {}.",
                lon, lat, azimuth
            )))?;
        }

        let tmp = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_a1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_a1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + tmp * tmp).sqrt());
        let lambda = (sin_sigma * sin_a1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_a1);
        let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
        let big_l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sm + c * cos_sigma * (-1.0 + 2.0 * cos_2sm * cos_2sm)));
        let alpha2 = sin_alpha.atan2(-tmp);

        Ok(GeodesicForward {
            lon: wrap_lon(lon + big_l.to_degrees()),
            lat: lat2.to_degrees(),
            azimuth_back: wrap_azimuth(alpha2.to_degrees() + 180.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::SphericalPoint;

    fn unit_sphere() -> Geodesic {
        Geodesic::new(Ellipsoid::sphere(1.0).unwrap())
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_lon(180.0), -180.0);
        assert_eq!(wrap_lon(-180.0), -180.0);
        assert!((wrap_lon(359.0) + 1.0).abs() < 1e-12);
        assert_eq!(wrap_azimuth(-180.0), 180.0);
        assert!((wrap_azimuth(270.0) + 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_inverse() {
        let geod = unit_sphere();
        let inv = geod.inverse(0.0, 0.0, 90.0, 0.0).unwrap();
        assert!((inv.distance - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((inv.azimuth_forward - 90.0).abs() < 1e-10);
        assert!((inv.azimuth_back + 90.0).abs() < 1e-10);

        let inv = geod.inverse(30.0, 10.0, 30.0, 10.0).unwrap();
        assert_eq!(inv.distance, 0.0);
    }

    #[test]
    fn test_sphere_forward_matches_angle() {
        let geod = unit_sphere();
        let center = SphericalPoint::new(179.0, 10.0);
        let dist = 4f64.to_radians();
        for idx in 0..36 {
            let az = idx as f64 * 10.0;
            let fwd = geod.forward(center.lon, center.lat, az, dist).unwrap();
            let angle = center.angle_to(&SphericalPoint::new(fwd.lon, fwd.lat));
            assert!((angle - 4.0).abs() < 1e-8);
        }
    }

    #[test]
    fn test_forward_inverse_roundtrip() {
        let geod = Geodesic::new(Ellipsoid::wgs84());
        let fwd = geod.forward(-70.0, -30.0, 33.0, 1.5e6).unwrap();
        let inv = geod.inverse(-70.0, -30.0, fwd.lon, fwd.lat).unwrap();
        assert!((inv.distance - 1.5e6).abs() < 1e-3);
        assert!((inv.azimuth_forward - 33.0).abs() < 1e-6);
        assert!((inv.azimuth_back - fwd.azimuth_back).abs() < 1e-6);
    }

    #[test]
    fn test_flinders_peak_buninyong() {
        // Classic test case from Vincenty's paper, Flinders Peak to Buninyong.
        let geod = Geodesic::new(Ellipsoid::wgs84());
        let lat1 = -(37.0 + 57.0 / 60.0 + 3.72030 / 3600.0);
        let lon1 = 144.0 + 25.0 / 60.0 + 29.52440 / 3600.0;
        let lat2 = -(37.0 + 39.0 / 60.0 + 10.15610 / 3600.0);
        let lon2 = 143.0 + 55.0 / 60.0 + 35.38390 / 3600.0;
        let inv = geod.inverse(lon1, lat1, lon2, lat2).unwrap();
        assert!((inv.distance - 54972.271).abs() < 0.01);
        let az1 = 306.0 + 52.0 / 60.0 + 5.37 / 3600.0;
        assert!((inv.azimuth_forward.rem_euclid(360.0) - az1).abs() < 1e-4);
    }

    #[test]
    fn test_antipodal_fails() {
        let geod = Geodesic::new(Ellipsoid::wgs84());
        let res = geod.inverse(0.0, 0.0, 179.7, 0.5);
        assert!(matches!(res, Err(Error::Convergence(_))));
    }

    #[test]
    fn test_meridian_always_converges() {
        let geod = Geodesic::new(Ellipsoid::wgs84());
        for idx in 1..=170 {
            let lat2 = -85.0 + idx as f64;
            let inv = geod.inverse(10.0, -85.0, 10.0, lat2).unwrap();
            assert!(inv.distance > 0.0);
            assert!(inv.azimuth_forward.abs() < 1e-9);
        }
    }

    #[test]
    fn test_bad_latitude() {
        let geod = unit_sphere();
        assert!(matches!(
            geod.inverse(0.0, 91.0, 0.0, 0.0),
            Err(Error::ValueError(_))
        ));
        assert!(geod.forward(0.0, -95.0, 0.0, 1.0).is_err());
    }
}
