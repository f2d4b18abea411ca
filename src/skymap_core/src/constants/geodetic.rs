/// Earth semi major axis in meters as defined by WGS84.
pub const WGS84_A: f64 = 6378137.0;

/// Earth inverse flattening as defined by WGS84.
pub const WGS84_INV_FLAT: f64 = 298.257223563;

/// Earth semi minor axis in meters, calculated from the two values above.
/// b = a * (1 - flattening)
pub const WGS84_B: f64 = 6356752.314245179;

/// Radius of the sphere used for sky maps in meters.
///
/// This is the default sphere of the Basemap toolkit, survey plots have always been
/// drawn with it, so footprint distances are measured on it as well.
pub const CELESTIAL_SPHERE_RADIUS: f64 = 6370997.0;

/// Maximum number of iterations of the Vincenty geodesic solvers.
pub const GEODESIC_MAX_ITER: usize = 200;

/// Convergence tolerance of the Vincenty geodesic solvers, in radians.
pub const GEODESIC_TOL: f64 = 1e-12;
