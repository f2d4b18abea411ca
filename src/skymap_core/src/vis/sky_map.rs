//! A map of the sky, a projection paired with the geodesics used to draw on it.
use serde::{Deserialize, Serialize};

use crate::constants::SEAM_EPSILON;
use crate::errors::SkymapResult;
use crate::frames::{SphericalPoint, SphericalPolyline};
use crate::geodesy::{Ellipsoid, Geodesic};
use crate::polygon::{generate_circle, project_polygon, PlanarPolygon};
use crate::projection::{is_valid_xy, MapProjection, Projection, ProjectionKind};

/// Map projection with footprint drawing support.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyMap {
    /// Projection of the map.
    pub projection: Projection,

    /// Geodesics used to construct circles.
    pub geodesic: Geodesic,

    /// Tolerance in degrees for points on the seam.
    pub epsilon: f64,
}

impl SkyMap {
    /// Construct a new map.
    pub fn new(projection: Projection, ellipsoid: Ellipsoid) -> Self {
        Self {
            projection,
            geodesic: Geodesic::new(ellipsoid),
            epsilon: SEAM_EPSILON,
        }
    }

    /// Map of the projection kind, scaled to the semi-major axis of the ellipsoid.
    pub fn from_kind(
        kind: ProjectionKind,
        lon_0: f64,
        celestial: bool,
        ellipsoid: Ellipsoid,
    ) -> Self {
        Self::new(
            Projection::new(kind, lon_0, ellipsoid.a, celestial),
            ellipsoid,
        )
    }

    /// Project a point, see [`MapProjection::project`].
    pub fn project(&self, lon: f64, lat: f64) -> SkymapResult<[f64; 2]> {
        self.projection.project(lon, lat)
    }

    /// Longitude of the seam of the map.
    pub fn lon_max(&self) -> f64 {
        self.projection.lon_max()
    }

    /// Project a curve on the sky, split at the seam of the map.
    pub fn project_curve(&self, curve: &SphericalPolyline) -> SkymapResult<Vec<PlanarPolygon>> {
        project_polygon(curve, &self.projection, self.lon_max(), self.epsilon)
    }

    /// Circle of `radius_deg` around `(lon_0, lat_0)` drawn with `npts` vertices.
    ///
    /// The circle is split where it crosses the seam of the map, so one or two
    /// polygons are returned, or none if the circle is entirely off the map.
    pub fn tissot(
        &self,
        lon_0: f64,
        lat_0: f64,
        radius_deg: f64,
        npts: usize,
    ) -> SkymapResult<Vec<PlanarPolygon>> {
        let circle = generate_circle(
            &SphericalPoint::new(lon_0, lat_0),
            radius_deg,
            npts,
            &self.geodesic,
        )?;
        self.project_curve(&circle)
    }

    /// Project the points as a single polygon without any seam handling, dropping
    /// points which are not on the map.
    pub fn polygonize(&self, lon: &[f64], lat: &[f64]) -> SkymapResult<PlanarPolygon> {
        let xy = self.projection.project_many(lon, lat)?;
        Ok(PlanarPolygon::new(
            xy.into_iter().filter(is_valid_xy).collect(),
        ))
    }
}
