/// Coordinate value returned by a projection for points which cannot be projected.
pub const INVALID_COORD: f64 = 1e30;

/// Projected coordinates with a magnitude at or beyond this are treated as invalid.
pub const INVALID_THRESHOLD: f64 = 1e20;

/// Default tolerance in degrees used when comparing longitudes against a seam.
pub const SEAM_EPSILON: f64 = 1e-10;

/// Default radius of a camera footprint in degrees.
pub const DEFAULT_FOV_RADIUS: f64 = 4.0;

/// Default number of vertices used to draw a footprint circle.
pub const DEFAULT_CIRCLE_POINTS: usize = 100;

/// Default number of boundary steps per edge of a HEALPix tile.
pub const DEFAULT_HEALPIX_STEP: usize = 10;

/// Rotation matrix from equatorial to galactic coordinates, row major.
///
/// From the kapteyn package celestial background notes. Only roughly accurate, at
/// the arcsec level, which is plenty for drawing the Milky Way.
pub const GALACTIC_ROTATION: [[f64; 3]; 3] = [
    [-0.054875539396, -0.873437104728, -0.48383499177],
    [0.494109453628, -0.444829594298, 0.7469822487],
    [-0.867666135683, -0.198076389613, 0.455983794521],
];
