//! # Map projections
//! Projections of the celestial sphere onto a plane.
//!
//! Projections accept longitude and latitude in degrees. Points which cannot be
//! projected are mapped to [`INVALID_COORD`], and are recognized by [`is_valid_xy`].
//!
//! Projections with a longitude seam (see [`MapProjection::wraps`]) are discontinuous
//! at [`MapProjection::lon_max`], which is always the central meridian plus 180
//! degrees. Shapes which straddle the seam have to be split before being projected,
//! see [`crate::polygon`].
mod cylindrical;
mod mollweide;
mod stereographic;

pub use cylindrical::Cylindrical;
pub use mollweide::Mollweide;
pub use stereographic::SouthPolarStereographic;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::constants::{INVALID_COORD, INVALID_THRESHOLD};
use crate::errors::{check_same_len, Error, SkymapResult};

/// Projection of the sphere onto the plane.
pub trait MapProjection: Sync + Send + Debug {
    /// Project a longitude and latitude in degrees to planar x, y.
    ///
    /// Points outside of the domain of the projection return [`INVALID_COORD`] for
    /// both coordinates, numerical failures return an error.
    fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]>;

    /// Inverse of [`MapProjection::project`], returning longitude in [0, 360) and
    /// latitude in degrees. Points off the map return [`INVALID_COORD`].
    fn inverse(&self, x: f64, y: f64) -> SkymapResult<[f64; 2]>;

    /// Longitude at which the projection is discontinuous.
    fn lon_max(&self) -> f64;

    /// Does the projection wrap around at [`MapProjection::lon_max`].
    ///
    /// Azimuthal projections are continuous in longitude and have no seam.
    fn wraps(&self) -> bool {
        true
    }

    /// Project a collection of points.
    fn project_many(&self, lon: &[f64], lat: &[f64]) -> SkymapResult<Vec<[f64; 2]>> {
        check_same_len(lon, lat)?;
        lon.iter()
            .zip(lat)
            .map(|(lon, lat)| self.project(*lon, *lat))
            .collect()
    }
}

/// Is the projected point a valid position on the map.
#[inline(always)]
pub fn is_valid_xy(xy: &[f64; 2]) -> bool {
    xy.iter().all(|v| v.is_finite() && v.abs() < INVALID_THRESHOLD)
}

/// Sentinel position for unprojectable points.
pub(crate) const INVALID_XY: [f64; 2] = [INVALID_COORD, INVALID_COORD];

/// Longitude relative to the central meridian in degrees, in the range [-180, 180].
///
/// Values already inside of the range (with a small tolerance) are left untouched, so
/// a point sitting on the seam stays on the side it was assigned to.
#[inline(always)]
pub(crate) fn relative_lon(lon: f64, lon_0: f64) -> f64 {
    let delta = lon - lon_0;
    if delta.abs() <= 180.0 + 1e-8 {
        delta
    } else {
        (delta + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Is a latitude projectable at all.
#[inline(always)]
pub(crate) fn valid_lat(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

/// Supported kinds of projections, used to configure maps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectionKind {
    /// Equal area Mollweide projection of the whole sky.
    Mollweide,

    /// Plate carrée, longitude and latitude in degrees used directly.
    Cylindrical,

    /// Stereographic projection centered on the south pole.
    SouthPolarStereographic {
        /// Latitude of the edge of the map in degrees.
        bounding_lat: f64,
    },
}

impl ProjectionKind {
    /// Look up a projection by its Basemap name, "moll", "cyl", or "spstere".
    ///
    /// ```
    ///     use skymap_core::projection::ProjectionKind;
    ///     assert_eq!(ProjectionKind::from_name("moll").unwrap(), ProjectionKind::Mollweide);
    ///     assert!(ProjectionKind::from_name("robin").is_err());
    /// ```
    pub fn from_name(name: &str) -> SkymapResult<Self> {
        match name {
            "moll" => Ok(ProjectionKind::Mollweide),
            "cyl" => Ok(ProjectionKind::Cylindrical),
            "spstere" => Ok(ProjectionKind::SouthPolarStereographic {
                bounding_lat: -20.0,
            }),
            _ => Err(Error::ValueError(format!(
                "Unsupported projection '{}', expected one of moll, cyl, spstere.",
                name
            ))),
        }
    }
}

/// Any of the supported projections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    /// Mollweide projection.
    Mollweide(Mollweide),

    /// Plate carrée projection.
    Cylindrical(Cylindrical),

    /// South polar stereographic projection.
    SouthPolarStereographic(SouthPolarStereographic),
}

impl Projection {
    /// Construct a projection of the given kind.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which projection to build.
    /// * `lon_0` - Central meridian in degrees.
    /// * `radius` - Radius of the projected sphere, unused by the cylindrical
    ///              projection which works in degrees.
    /// * `celestial` - Use the astronomical convention, longitude increasing to the
    ///                 left. Ignored by the stereographic projection.
    pub fn new(kind: ProjectionKind, lon_0: f64, radius: f64, celestial: bool) -> Self {
        match kind {
            ProjectionKind::Mollweide => {
                Projection::Mollweide(Mollweide::new(lon_0, radius, celestial))
            }
            ProjectionKind::Cylindrical => {
                Projection::Cylindrical(Cylindrical::new(lon_0, celestial))
            }
            ProjectionKind::SouthPolarStereographic { bounding_lat } => {
                Projection::SouthPolarStereographic(SouthPolarStereographic::new(
                    lon_0,
                    bounding_lat,
                    radius,
                ))
            }
        }
    }

    /// Central meridian of the projection in degrees.
    pub fn lon_0(&self) -> f64 {
        match self {
            Projection::Mollweide(p) => p.lon_0,
            Projection::Cylindrical(p) => p.lon_0,
            Projection::SouthPolarStereographic(p) => p.lon_0,
        }
    }
}

impl MapProjection for Projection {
    fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]> {
        match self {
            Projection::Mollweide(p) => p.project(lon, lat),
            Projection::Cylindrical(p) => p.project(lon, lat),
            Projection::SouthPolarStereographic(p) => p.project(lon, lat),
        }
    }

    fn inverse(&self, x: f64, y: f64) -> SkymapResult<[f64; 2]> {
        match self {
            Projection::Mollweide(p) => p.inverse(x, y),
            Projection::Cylindrical(p) => p.inverse(x, y),
            Projection::SouthPolarStereographic(p) => p.inverse(x, y),
        }
    }

    fn lon_max(&self) -> f64 {
        match self {
            Projection::Mollweide(p) => p.lon_max(),
            Projection::Cylindrical(p) => p.lon_max(),
            Projection::SouthPolarStereographic(p) => p.lon_max(),
        }
    }

    fn wraps(&self) -> bool {
        match self {
            Projection::Mollweide(p) => p.wraps(),
            Projection::Cylindrical(p) => p.wraps(),
            Projection::SouthPolarStereographic(p) => p.wraps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_lon() {
        assert_eq!(relative_lon(180.0, 0.0), 180.0);
        assert_eq!(relative_lon(-180.0, 0.0), -180.0);
        assert_eq!(relative_lon(180.0 + 1e-10, 0.0), 180.0 + 1e-10);
        assert!((relative_lon(181.0, 0.0) + 179.0).abs() < 1e-12);
        assert!((relative_lon(350.0, 0.0) + 10.0).abs() < 1e-12);
        assert!((relative_lon(10.0, 200.0) - 170.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_valid_xy() {
        assert!(is_valid_xy(&[1.0, -2.0]));
        assert!(!is_valid_xy(&INVALID_XY));
        assert!(!is_valid_xy(&[0.0, -1e25]));
        assert!(!is_valid_xy(&[f64::NAN, 0.0]));
    }

    #[test]
    fn test_project_many() {
        let proj = Projection::new(ProjectionKind::Cylindrical, 0.0, 1.0, false);
        let xy = proj.project_many(&[10.0, 20.0], &[1.0, 2.0]).unwrap();
        assert_eq!(xy, vec![[10.0, 1.0], [20.0, 2.0]]);
        assert!(matches!(
            proj.project_many(&[10.0], &[1.0, 2.0]),
            Err(Error::ValueError(_))
        ));
    }

    #[test]
    fn test_dispatch() {
        for kind in [
            ProjectionKind::Mollweide,
            ProjectionKind::Cylindrical,
            ProjectionKind::SouthPolarStereographic { bounding_lat: -20.0 },
        ] {
            let proj = Projection::new(kind, 30.0, 1.0, false);
            assert_eq!(proj.lon_0(), 30.0);
            assert_eq!(proj.lon_max(), 210.0);
            let xy = proj.project(40.0, -35.0).unwrap();
            let [lon, lat] = proj.inverse(xy[0], xy[1]).unwrap();
            assert!((lon - 40.0).abs() < 1e-8);
            assert!((lat + 35.0).abs() < 1e-8);
        }
    }
}
