//! Points and curves on the celestial sphere.
//!
//! All angles are in degrees. In the Equatorial frame, lon = ra and lat = dec.
//!
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::errors::{check_same_len, SkymapResult};

/// A point on the celestial sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPoint {
    /// Longitude of the point in degrees.
    pub lon: f64,

    /// Latitude of the point in degrees.
    pub lat: f64,
}

impl SphericalPoint {
    /// Construct a new point from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Copy of this point with the longitude normalized to [0, 360).
    #[inline(always)]
    pub fn normalized(&self) -> Self {
        Self::new(normalize_lon(self.lon), self.lat)
    }

    /// Unit vector pointing at this point.
    #[inline(always)]
    pub fn to_vec(&self) -> Vector3<f64> {
        Vector3::from(from_lat_lon(self.lat.to_radians(), self.lon.to_radians()))
    }

    /// Point a unit vector (or any non-zero vector) is pointing at.
    /// The longitude is in the range [0, 360).
    #[inline(always)]
    pub fn from_vec(vec: &Vector3<f64>) -> Self {
        let (lat, lon) = to_lat_lon(vec[0], vec[1], vec[2]);
        Self::new(normalize_lon(lon.to_degrees()), lat.to_degrees())
    }

    /// Great circle angle between two points in degrees.
    pub fn angle_to(&self, other: &Self) -> f64 {
        self.to_vec().angle(&other.to_vec()).to_degrees()
    }
}

/// Ordered sequence of points on the sphere, consecutive points are joined by edges.
///
/// The curve may be open, or implicitly closed with the last point joined back to
/// the first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SphericalPolyline {
    /// Vertices of the curve.
    pub points: Vec<SphericalPoint>,
}

impl SphericalPolyline {
    /// Construct a polyline from its vertices.
    pub fn new(points: Vec<SphericalPoint>) -> Self {
        Self { points }
    }

    /// Construct a polyline from separate longitude and latitude arrays in degrees.
    ///
    /// ```
    ///     use skymap_core::frames::SphericalPolyline;
    ///     let line = SphericalPolyline::from_lon_lat(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
    ///     assert_eq!(line.len(), 2);
    ///     assert!(SphericalPolyline::from_lon_lat(&[1.0], &[3.0, 4.0]).is_err());
    /// ```
    pub fn from_lon_lat(lon: &[f64], lat: &[f64]) -> SkymapResult<Self> {
        check_same_len(lon, lat)?;
        Ok(Self::new(
            lon.iter()
                .zip(lat)
                .map(|(lon, lat)| SphericalPoint::new(*lon, *lat))
                .collect(),
        ))
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Longitudes of all vertices.
    pub fn lon(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lon).collect()
    }

    /// Latitudes of all vertices.
    pub fn lat(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.lat).collect()
    }

    /// Copy of the polyline with every longitude normalized to [0, 360).
    pub fn normalized(&self) -> Self {
        Self::new(self.points.iter().map(SphericalPoint::normalized).collect())
    }
}

impl FromIterator<SphericalPoint> for SphericalPolyline {
    fn from_iter<T: IntoIterator<Item = SphericalPoint>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Normalize a longitude in degrees to the range [0, 360).
#[inline(always)]
pub fn normalize_lon(lon: f64) -> f64 {
    let lon = lon.rem_euclid(360.0);
    // rem_euclid may round tiny negative values up to exactly 360.
    if lon >= 360.0 {
        0.0
    } else {
        lon
    }
}

/// Create a unit vector from latitude and longitude in radians.
///
/// <https://en.wikipedia.org/wiki/Spherical_coordinate_system#Cartesian_coordinates>
#[inline(always)]
pub fn from_lat_lon(lat: f64, lon: f64) -> [f64; 3] {
    let (lat_sin, lat_cos) = lat.sin_cos();
    let (lon_sin, lon_cos) = lon.sin_cos();
    [lat_cos * lon_cos, lat_cos * lon_sin, lat_sin]
}

/// Convert a vector to latitude and longitude in radians.
///
/// Longitude is returned in the range (-pi, pi].
#[inline(always)]
pub fn to_lat_lon(x: f64, y: f64, z: f64) -> (f64, f64) {
    let r = Vector3::new(x, y, z).norm();
    if r < 1e-10 {
        return (0.0, 0.0);
    }
    let lat = (z / r).clamp(-1.0, 1.0).asin();
    let lon = y.atan2(x);
    (lat, lon)
}

/// Convert HEALPix style spherical coordinates to ra/dec.
///
/// `theta` is the colatitude and `phi` the azimuth, both in radians. Returns ra in
/// [0, 360) and dec in [-90, 90] in degrees.
#[inline(always)]
pub fn to_celestial(theta: f64, phi: f64) -> (f64, f64) {
    (normalize_lon(phi.to_degrees()), 90.0 - theta.to_degrees())
}

/// Convert ra/dec in degrees to HEALPix style colatitude and azimuth in radians.
#[inline(always)]
pub fn to_spherical(ra: f64, dec: f64) -> (f64, f64) {
    ((90.0 - dec).to_radians(), normalize_lon(ra).to_radians())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lon() {
        assert_eq!(normalize_lon(0.0), 0.0);
        assert_eq!(normalize_lon(360.0), 0.0);
        assert!((normalize_lon(-4.0) - 356.0).abs() < 1e-12);
        assert!((normalize_lon(725.0) - 5.0).abs() < 1e-12);
        assert!(normalize_lon(-1e-20) < 360.0);
    }

    #[test]
    fn test_vec_roundtrip() {
        for idx in -8..9 {
            let lat = idx as f64 * 10.0;
            for idy in 0..12 {
                let lon = idy as f64 * 30.0 + 1.5;
                let p = SphericalPoint::new(lon, lat);
                let back = SphericalPoint::from_vec(&p.to_vec());
                assert!((back.lat - lat).abs() < 1e-10);
                if lat.abs() < 89.0 {
                    assert!((back.lon - lon).abs() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_celestial_roundtrip() {
        let (theta, phi) = to_spherical(-10.0, 30.0);
        assert!((theta - 60f64.to_radians()).abs() < 1e-12);
        let (ra, dec) = to_celestial(theta, phi);
        assert!((ra - 350.0).abs() < 1e-10);
        assert!((dec - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_angle_to() {
        let a = SphericalPoint::new(10.0, 0.0);
        let b = SphericalPoint::new(10.0, 4.0);
        assert!((a.angle_to(&b) - 4.0).abs() < 1e-10);
        let c = SphericalPoint::new(370.0, 0.0);
        assert!(a.angle_to(&c) < 1e-5);
    }

    #[test]
    fn test_polyline_normalized() {
        let line = SphericalPolyline::from_lon_lat(&[-1.0, 361.0], &[0.0, 5.0]).unwrap();
        let norm = line.normalized();
        assert!((norm.points[0].lon - 359.0).abs() < 1e-12);
        assert!((norm.points[1].lon - 1.0).abs() < 1e-12);
        assert_eq!(norm.lat(), vec![0.0, 5.0]);
    }
}
