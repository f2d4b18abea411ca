//! # HEALPix
//! Hierarchical Equal Area isoLatitude Pixelization of the sphere.
//!
//! The sphere is divided into 12 base faces, each of which is split into
//! `nside * nside` pixels of equal area. Pixels are numbered in either the
//! [`Ordering::Nested`] or the [`Ordering::Ring`] scheme.
//!
//! Positions are given either as HEALPix colatitude/azimuth in radians (`theta`,
//! `phi`), or in celestial ra/dec degrees, see [`to_celestial`] and [`to_spherical`].
mod index;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub use crate::frames::{to_celestial, to_spherical};
use crate::errors::{Error, SkymapResult};
use crate::frames::{from_lat_lon, SphericalPoint, SphericalPolyline};
use index::{loc2xyf, nest2xyf, ring2xyf, xyf2loc, xyf2nest, xyf2ring, FacePixel};

/// Largest supported nside, 2^29.
pub const MAX_NSIDE: u64 = 1 << 29;

/// Distance from a pole in degrees below which a vertex is on the pole.
const POLE_TOLERANCE: f64 = 1e-9;

/// Pixel numbering scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering {
    /// Hierarchical numbering, children of a pixel have consecutive indices.
    Nested,

    /// Pixels numbered along rings of constant latitude from north to south.
    Ring,
}

/// Fail unless nside is a power of two no larger than [`MAX_NSIDE`].
pub fn check_nside(nside: u64) -> SkymapResult<()> {
    if nside == 0 || !nside.is_power_of_two() || nside > MAX_NSIDE {
        Err(Error::ValueError(format!(
            "nside must be a power of two between 1 and 2^29, got {}",
            nside
        )))?;
    }
    Ok(())
}

fn check_pix(nside: u64, pix: u64) -> SkymapResult<()> {
    check_nside(nside)?;
    let npix = nside2npix(nside);
    if pix >= npix {
        Err(Error::ValueError(format!(
            "Pixel {} is out of range for nside {}, which has {} pixels.",
            pix, nside, npix
        )))?;
    }
    Ok(())
}

/// Total number of pixels for the given nside.
///
/// ```
///     use skymap_core::healpix::nside2npix;
///     assert_eq!(nside2npix(1), 12);
///     assert_eq!(nside2npix(64), 49152);
/// ```
pub fn nside2npix(nside: u64) -> u64 {
    12 * nside * nside
}

/// Maximum angular distance in radians between any pixel center and its corners.
pub fn max_pixrad(nside: u64) -> SkymapResult<f64> {
    check_nside(nside)?;
    let nsf = nside as f64;
    let vec_a = z_phi_vec(2.0 / 3.0, PI / (4.0 * nsf));
    let t1 = (1.0 - 1.0 / nsf).powi(2);
    let vec_b = z_phi_vec(1.0 - t1 / 3.0, 0.0);
    Ok(vec_a.angle(&vec_b))
}

fn z_phi_vec(z: f64, phi: f64) -> nalgebra::Vector3<f64> {
    nalgebra::Vector3::from(from_lat_lon(z.asin(), phi))
}

fn face_pixel(nside: u64, pix: u64, ordering: Ordering) -> FacePixel {
    match ordering {
        Ordering::Nested => nest2xyf(nside as i64, pix as i64),
        Ordering::Ring => ring2xyf(nside as i64, pix as i64),
    }
}

/// Pixel containing the point at colatitude `theta` and azimuth `phi` in radians.
pub fn ang2pix(nside: u64, theta: f64, phi: f64, ordering: Ordering) -> SkymapResult<u64> {
    check_nside(nside)?;
    if !(0.0..=PI).contains(&theta) || !phi.is_finite() {
        Err(Error::ValueError(format!(
            "theta must be within [0, pi] and phi finite, got theta={} phi={}",
            theta, phi
        )))?;
    }
    let xyf = loc2xyf(nside as i64, theta, phi);
    let pix = match ordering {
        Ordering::Nested => xyf2nest(nside as i64, xyf),
        Ordering::Ring => xyf2ring(nside as i64, xyf),
    };
    Ok(pix as u64)
}

/// Colatitude and azimuth in radians of the center of a pixel.
pub fn pix2ang(nside: u64, pix: u64, ordering: Ordering) -> SkymapResult<(f64, f64)> {
    check_pix(nside, pix)?;
    let xyf = face_pixel(nside, pix, ordering);
    let nsf = nside as f64;
    Ok(xyf2loc(
        (xyf.ix as f64 + 0.5) / nsf,
        (xyf.iy as f64 + 0.5) / nsf,
        xyf.face,
    ))
}

/// Center of a pixel as ra/dec in degrees.
pub fn pix_center(nside: u64, pix: u64, ordering: Ordering) -> SkymapResult<SphericalPoint> {
    let (theta, phi) = pix2ang(nside, pix, ordering)?;
    let (ra, dec) = to_celestial(theta, phi);
    Ok(SphericalPoint::new(ra, dec))
}

/// Boundary of a pixel as ra/dec in degrees.
///
/// Each of the four edges is sampled with `step` points, starting at the corner with
/// the largest face coordinates, so `4 * step` points are returned. The curve is
/// implicitly closed. A corner on a pole takes the longitude of the vertex before
/// it, so the outline stays local on cylindrical maps.
///
/// ```
///     use skymap_core::healpix::{boundaries, Ordering};
///     let edge = boundaries(16, 100, 3, Ordering::Nested).unwrap();
///     assert_eq!(edge.len(), 12);
/// ```
pub fn boundaries(
    nside: u64,
    pix: u64,
    step: usize,
    ordering: Ordering,
) -> SkymapResult<SphericalPolyline> {
    check_pix(nside, pix)?;
    if step == 0 {
        Err(Error::ValueError(
            "Boundary step must be at least 1.".into(),
        ))?;
    }
    let xyf = face_pixel(nside, pix, ordering);
    let nsf = nside as f64;
    let dc = 0.5 / nsf;
    let xc = (xyf.ix as f64 + 0.5) / nsf;
    let yc = (xyf.iy as f64 + 0.5) / nsf;
    let d = 1.0 / (step as f64 * nsf);

    let edges: [(f64, f64, f64, f64); 4] = [
        (xc + dc, yc + dc, -d, 0.0),
        (xc - dc, yc + dc, 0.0, -d),
        (xc - dc, yc - dc, d, 0.0),
        (xc + dc, yc - dc, 0.0, d),
    ];
    let mut points: Vec<SphericalPoint> = edges
        .iter()
        .flat_map(|(x0, y0, dx, dy)| {
            (0..step).map(move |idx| {
                let idx = idx as f64;
                let (theta, phi) = xyf2loc(x0 + idx * dx, y0 + idx * dy, xyf.face);
                let (ra, dec) = to_celestial(theta, phi);
                SphericalPoint::new(ra, dec)
            })
        })
        .collect();

    // A corner on the pole has no azimuth, take the one of the preceding vertex.
    let n = points.len();
    for idx in 0..n {
        if 90.0 - points[idx].lat.abs() < POLE_TOLERANCE {
            points[idx].lon = points[(idx + n - 1) % n].lon;
        }
    }
    Ok(SphericalPolyline::new(points))
}

/// Boundaries of several pixels concatenated, `4 * step` points per pixel.
pub fn boundaries_many(
    nside: u64,
    pixels: &[u64],
    step: usize,
    ordering: Ordering,
) -> SkymapResult<SphericalPolyline> {
    let mut points = Vec::with_capacity(4 * step * pixels.len());
    for pix in pixels {
        points.extend(boundaries(nside, *pix, step, ordering)?.points);
    }
    Ok(SphericalPolyline::new(points))
}

/// Nested pixel containing the celestial position, ra/dec in degrees.
///
/// ```
///     use skymap_core::healpix::tile_id_from_celestial;
///     // The north celestial pole is on the corner of the first base pixel.
///     assert_eq!(tile_id_from_celestial(0.0, 90.0, 1).unwrap(), 0);
/// ```
pub fn tile_id_from_celestial(ra: f64, dec: f64, nside: u64) -> SkymapResult<u64> {
    let (theta, phi) = to_spherical(ra, dec);
    ang2pix(nside, theta, phi, Ordering::Nested)
}
