//! Outline of the band of sky obscured by the Milky Way.
use crate::frames::{GalacticFrame, SphericalPoint, SphericalPolyline};

/// Number of samples along each edge of the band.
const MW_SAMPLES: usize = 30;

/// Spacing of the samples in galactic longitude, radians.
const MW_STEP: f64 = 0.2;

/// Galactic colatitudes of the southern and northern edge of the band, degrees.
const MW_EDGES: (f64, f64) = (110.0, 70.0);

fn band_edge(frame: &GalacticFrame, colatitude: f64, min_dec: f64) -> Vec<SphericalPoint> {
    let theta = colatitude.to_radians();
    (1..=MW_SAMPLES)
        .map(|idx| frame.to_equatorial(theta, idx as f64 * MW_STEP))
        .filter(|p| p.lat > min_dec)
        .collect()
}

/// Closed outline of the Milky Way band, 20 degrees to either side of the galactic
/// plane, in equatorial coordinates.
///
/// Both edges are sampled from galactic longitude 0.2 to 6.0 radians, points at or
/// below `min_dec` are discarded. The outline is the southern edge followed by the
/// northern edge in reverse, where the last point of the northern edge is omitted.
pub fn milky_way_boundary(frame: &GalacticFrame, min_dec: f64) -> SphericalPolyline {
    let low = band_edge(frame, MW_EDGES.0, min_dec);
    let mut high = band_edge(frame, MW_EDGES.1, min_dec);
    let _ = high.pop();
    low.into_iter().chain(high.into_iter().rev()).collect()
}
