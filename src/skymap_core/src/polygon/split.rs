//! Cutting spherical curves at the longitude seam of a projection.
//!
//! Longitudes are compared through their offset eastward from the seam, which is in
//! the range (epsilon, 360 + epsilon]. Points whose offset is below 180 are just east
//! of the seam, everything else, including points within epsilon east of the seam,
//! is on the west side.
use itertools::Itertools;

use crate::frames::{normalize_lon, SphericalPoint, SphericalPolyline};

/// Offset of a longitude eastward from the seam in degrees.
#[inline(always)]
fn seam_offset(lon: f64, split_lon: f64, epsilon: f64) -> f64 {
    let offset = normalize_lon(lon - split_lon);
    if offset <= epsilon {
        offset + 360.0
    } else {
        offset
    }
}

/// Longitude counted from `split_lon - 360`, so that the west side of the seam runs
/// up to `split_lon` and the east side is below `split_lon - 180`.
#[inline(always)]
fn renormalize(point: &SphericalPoint, offset: f64, split_lon: f64) -> SphericalPoint {
    SphericalPoint::new(split_lon - 360.0 + offset, point.lat)
}

/// Does the curve cross the seam at `split_lon`.
///
/// This is true when any two consecutive vertices, including the closing edge from
/// the last vertex back to the first, are more than 180 degrees apart when measured
/// from the seam. Such an edge is shorter going across the seam than going around
/// the sphere the other way.
///
/// ```
///     use skymap_core::frames::SphericalPolyline;
///     use skymap_core::polygon::needs_split;
///
///     let far = SphericalPolyline::from_lon_lat(&[10.0, 20.0, 15.0], &[0.0, 0.0, 5.0]).unwrap();
///     assert!(!needs_split(&far, 180.0, 1e-10));
///     let near = SphericalPolyline::from_lon_lat(&[178.0, 182.0, 180.0], &[0.0, 0.0, 5.0]).unwrap();
///     assert!(needs_split(&near, 180.0, 1e-10));
/// ```
pub fn needs_split(polyline: &SphericalPolyline, split_lon: f64, epsilon: f64) -> bool {
    if polyline.len() < 2 {
        return false;
    }
    polyline
        .points
        .iter()
        .map(|p| seam_offset(p.lon, split_lon, epsilon))
        .circular_tuple_windows()
        .any(|(a, b): (f64, f64)| (a - b).abs() > 180.0)
}

/// Partition the vertices of a curve into the groups west and east of the seam.
///
/// Vertices keep their original order inside of each group. The crossing point with
/// the seam is not interpolated. Longitudes are renormalized so that the west group
/// lies in `[split_lon - 180, split_lon + epsilon]` and the east group in
/// `(split_lon - 360, split_lon - 180)`, for a seam at 180 this leaves the west group
/// unchanged and moves the east group to negative longitudes.
///
/// Either group may be empty. Vertices exactly on the seam always belong to the
/// west group, so a curve lying east of the seam but touching it leaves those
/// vertices behind as a sliver on the opposite edge of the map.
///
/// ```
///     use skymap_core::frames::SphericalPolyline;
///     use skymap_core::polygon::split_polygon_segments;
///
///     let line = SphericalPolyline::from_lon_lat(&[178.0, 182.0, 180.0], &[0.0, 0.0, 5.0]).unwrap();
///     let (west, east) = split_polygon_segments(&line, 180.0, 1e-10);
///     assert_eq!(west.lon(), vec![178.0, 180.0]);
///     assert_eq!(east.len(), 1);
///     assert!((east.points[0].lon + 178.0).abs() < 1e-10);
/// ```
pub fn split_polygon_segments(
    polyline: &SphericalPolyline,
    split_lon: f64,
    epsilon: f64,
) -> (SphericalPolyline, SphericalPolyline) {
    let (east, west): (Vec<_>, Vec<_>) = polyline
        .points
        .iter()
        .map(|p| {
            let offset = seam_offset(p.lon, split_lon, epsilon);
            (offset < 180.0, renormalize(p, offset, split_lon))
        })
        .partition(|(is_east, _)| *is_east);
    (
        west.into_iter().map(|(_, p)| p).collect(),
        east.into_iter().map(|(_, p)| p).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(lon: &[f64]) -> SphericalPolyline {
        SphericalPolyline::from_lon_lat(lon, &vec![0.0; lon.len()]).unwrap()
    }

    #[test]
    fn test_seam_offset() {
        assert_eq!(seam_offset(180.0, 180.0, 1e-10), 360.0);
        assert!((seam_offset(190.0, 180.0, 1e-10) - 10.0).abs() < 1e-12);
        assert!((seam_offset(170.0, 180.0, 1e-10) - 350.0).abs() < 1e-12);
        assert!((seam_offset(180.0 + 1e-11, 180.0, 1e-10) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_needs_split() {
        assert!(!needs_split(&line(&[]), 180.0, 1e-10));
        assert!(!needs_split(&line(&[179.0]), 180.0, 1e-10));
        assert!(!needs_split(&line(&[100.0, 170.0, 160.0]), 180.0, 1e-10));
        assert!(needs_split(&line(&[170.0, 190.0]), 180.0, 1e-10));
        // the closing edge also counts
        assert!(needs_split(&line(&[170.0, 175.0, 179.0, 183.0]), 180.0, 1e-10));
        // the same curve does not cross a seam on the other side of the sphere
        assert!(!needs_split(&line(&[170.0, 175.0, 179.0, 183.0]), 0.0, 1e-10));
        assert!(needs_split(&line(&[358.0, 2.0, 1.0]), 0.0, 1e-10));
    }

    #[test]
    fn test_partition_order() {
        let input = line(&[176.0, 178.0, 182.0, 184.0, 183.0, 179.0]);
        let (west, east) = split_polygon_segments(&input, 180.0, 1e-10);
        assert_eq!(west.lon(), vec![176.0, 178.0, 179.0]);
        let east_lon = east.lon();
        let expected = [-178.0, -176.0, -177.0];
        assert_eq!(east_lon.len(), 3);
        for (lon, exp) in east_lon.iter().zip(expected) {
            assert!((lon - exp).abs() < 1e-10);
        }
    }

    #[test]
    fn test_renormalized_ranges() {
        // Every longitude around the sphere ends up in the range of its own side, for
        // any seam position.
        for split in [180.0, 210.0, 0.0, 95.5] {
            let lon: Vec<f64> = (0..72).map(|idx| idx as f64 * 5.0 + 0.5).collect();
            let (west, east) = split_polygon_segments(&line(&lon), split, 1e-10);
            assert_eq!(west.len() + east.len(), 72);
            for lon in west.lon() {
                assert!(lon >= split - 180.0 && lon <= split + 1e-10);
            }
            for lon in east.lon() {
                assert!(lon > split - 360.0 && lon < split - 180.0);
            }
        }
    }

    #[test]
    fn test_east_curve_touching_seam() {
        let input = line(&[180.0, 180.0, 190.0, 190.0]);
        assert!(needs_split(&input, 180.0, 1e-10));
        let (west, east) = split_polygon_segments(&input, 180.0, 1e-10);
        assert_eq!(west.lon(), vec![180.0, 180.0]);
        assert_eq!(east.len(), 2);
        for lon in east.lon() {
            assert!((lon + 170.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_seam_point_stays_west() {
        let (west, east) = split_polygon_segments(&line(&[180.0, 540.0, -180.0]), 180.0, 1e-10);
        assert_eq!(west.len(), 3);
        assert!(east.is_empty());
        for lon in west.lon() {
            assert!((lon - 180.0).abs() < 1e-10);
        }
    }
}
