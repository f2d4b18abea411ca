//! Projection of spherical curves into planar polygons.
use serde::{Deserialize, Serialize};

use super::split::{needs_split, split_polygon_segments};
use crate::errors::{check_same_len, Error, SkymapResult};
use crate::frames::SphericalPolyline;
use crate::projection::{is_valid_xy, MapProjection};

/// Ordered vertices of a polygon on the map plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarPolygon {
    /// Projected (x, y) vertices.
    pub points: Vec<[f64; 2]>,
}

impl PlanarPolygon {
    /// Construct a polygon from its vertices.
    pub fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinates of the vertices.
    pub fn x(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[0]).collect()
    }

    /// Y coordinates of the vertices.
    pub fn y(&self) -> Vec<f64> {
        self.points.iter().map(|p| p[1]).collect()
    }
}

/// Project a single segment, dropping unprojectable points.
///
/// Returns `None` if less than two valid points remain.
fn project_segment<P: MapProjection + ?Sized>(
    segment: &SphericalPolyline,
    projection: &P,
) -> SkymapResult<Option<PlanarPolygon>> {
    let mut points = Vec::with_capacity(segment.len());
    for point in segment.points.iter() {
        let xy = projection.project(point.lon, point.lat)?;
        if is_valid_xy(&xy) {
            points.push(xy);
        }
    }
    let dropped = segment.len() - points.len();
    if dropped > 0 {
        log::debug!(
            "Dropped {} of {} points outside of the projection domain.",
            dropped,
            segment.len()
        );
    }
    if points.len() < 2 {
        return Ok(None);
    }
    Ok(Some(PlanarPolygon::new(points)))
}

/// Project a curve on the sphere, splitting it where it crosses the seam of the
/// projection.
///
/// Longitudes are normalized to [0, 360) first. If the projection wraps and the curve
/// crosses the seam at `split_lon` (see [`needs_split`]), the vertices are partitioned
/// into the west and east side of the seam with [`split_polygon_segments`], otherwise
/// the whole curve is a single segment. Each segment is projected, unprojectable
/// points are dropped, and segments with at least 2 remaining points are returned.
///
/// Empty and single point curves produce no polygons.
///
/// # Arguments
///
/// * `vertices` - Curve on the sphere, degrees.
/// * `projection` - Map projection to draw on.
/// * `split_lon` - Longitude of the seam, usually [`MapProjection::lon_max`].
/// * `epsilon` - Tolerance in degrees for points on the seam, these are kept on the
///               west side.
pub fn project_polygon<P: MapProjection + ?Sized>(
    vertices: &SphericalPolyline,
    projection: &P,
    split_lon: f64,
    epsilon: f64,
) -> SkymapResult<Vec<PlanarPolygon>> {
    if vertices.len() < 2 {
        return Ok(Vec::new());
    }
    let vertices = vertices.normalized();

    let segments = if projection.wraps() && needs_split(&vertices, split_lon, epsilon) {
        let (west, east) = split_polygon_segments(&vertices, split_lon, epsilon);
        log::debug!(
            "Curve crosses the seam at {}, split into {} west and {} east points.",
            split_lon,
            west.len(),
            east.len()
        );
        vec![west, east]
    } else {
        vec![vertices]
    };

    let mut polygons = Vec::with_capacity(segments.len());
    for segment in segments.iter() {
        if let Some(poly) = project_segment(segment, projection)? {
            polygons.push(poly);
        }
    }
    Ok(polygons)
}

/// [`project_polygon`] with the curve given as separate longitude and latitude
/// arrays, which must be the same length.
pub fn project_polygon_arrays<P: MapProjection + ?Sized>(
    lon: &[f64],
    lat: &[f64],
    projection: &P,
    split_lon: f64,
    epsilon: f64,
) -> SkymapResult<Vec<PlanarPolygon>> {
    let vertices = SphericalPolyline::from_lon_lat(lon, lat)?;
    project_polygon(&vertices, projection, split_lon, epsilon)
}

/// Project the concatenated boundaries of several HEALPix pixels.
///
/// The arrays hold `4 * step` vertices for each of the `num_pixels` pixels, as
/// produced by [`crate::healpix::boundaries_many`]. Every pixel is split and projected
/// on its own, the result holds the polygons of each pixel in order.
pub fn project_pixel_boundaries<P: MapProjection + ?Sized>(
    lon: &[f64],
    lat: &[f64],
    step: usize,
    num_pixels: usize,
    projection: &P,
    split_lon: f64,
    epsilon: f64,
) -> SkymapResult<Vec<Vec<PlanarPolygon>>> {
    check_same_len(lon, lat)?;
    let per_pixel = 4 * step;
    if per_pixel == 0 || lon.len() != per_pixel * num_pixels {
        Err(Error::ValueError(format!(
            "Expected {} boundary points for {} pixels with step {}, got {}.",
            per_pixel * num_pixels,
            num_pixels,
            step,
            lon.len()
        )))?;
    }
    lon.chunks(per_pixel)
        .zip(lat.chunks(per_pixel))
        .map(|(lon, lat)| project_polygon_arrays(lon, lat, projection, split_lon, epsilon))
        .collect()
}
