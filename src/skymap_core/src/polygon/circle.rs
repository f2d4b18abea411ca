//! Circular footprints drawn with geodesics.
use crate::errors::{Error, SkymapResult};
use crate::frames::{SphericalPoint, SphericalPolyline};
use crate::geodesy::Geodesic;

/// Vertices of a circle on the sphere (a Tissot indicatrix).
///
/// The geodesic distance from the center to the point `radius` degrees due north is
/// measured once, then `num_points` points are placed at that distance from the
/// center with the azimuth increasing in equal steps. On an ellipsoid the distance
/// is not azimuth invariant, so this is only an approximation of a circle.
///
/// The first vertex is the northern seed point, and the last vertex returns to it, so
/// `num_points + 1` vertices are returned. If the seed would pass over the pole it is
/// reflected to the far side of the pole.
///
/// Large radii close to the poles produce self intersecting curves, this is not
/// checked.
///
/// # Arguments
///
/// * `center` - Center of the circle, degrees.
/// * `radius` - Angular radius in degrees, must be positive.
/// * `num_points` - Number of azimuth steps, at least 3.
/// * `geodesic` - Solver on the reference ellipsoid.
///
/// ```
///     use skymap_core::frames::SphericalPoint;
///     use skymap_core::geodesy::Geodesic;
///     use skymap_core::polygon::generate_circle;
///
///     let center = SphericalPoint::new(45.0, -20.0);
///     let circle = generate_circle(&center, 4.0, 100, &Geodesic::default()).unwrap();
///     assert_eq!(circle.len(), 101);
/// ```
pub fn generate_circle(
    center: &SphericalPoint,
    radius: f64,
    num_points: usize,
    geodesic: &Geodesic,
) -> SkymapResult<SphericalPolyline> {
    if num_points < 3 {
        Err(Error::ValueError(format!(
            "A circle needs at least 3 points, got {}",
            num_points
        )))?;
    }
    if !radius.is_finite() || radius <= 0.0 {
        Err(Error::ValueError(format!(
            "Circle radius must be positive and finite, got {}",
            radius
        )))?;
    }

    let seed = if center.lat + radius > 90.0 {
        SphericalPoint::new(center.lon + 180.0, 180.0 - center.lat - radius)
    } else {
        SphericalPoint::new(center.lon, center.lat + radius)
    };
    let inv = geodesic.inverse(center.lon, center.lat, seed.lon, seed.lat)?;

    let step = 360.0 / num_points as f64;
    let mut points = Vec::with_capacity(num_points + 1);
    points.push(seed);
    for idx in 1..=num_points {
        let azimuth = inv.azimuth_forward + step * idx as f64;
        let fwd = geodesic.forward(center.lon, center.lat, azimuth, inv.distance)?;
        points.push(SphericalPoint::new(fwd.lon, fwd.lat));
    }
    Ok(SphericalPolyline::new(points))
}
