//! Conversion from the galactic frame back to equatorial coordinates.
//!
//! The rotation is supplied as an equatorial to galactic matrix, and applied
//! inverted. This is only roughly accurate, probably at the arcsec level, and should
//! not be used for astrometry.
use lazy_static::lazy_static;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use super::SphericalPoint;
use crate::constants::GALACTIC_ROTATION;
use crate::errors::{Error, SkymapResult};

lazy_static! {
    static ref DEFAULT_ROTATION: Matrix3<f64> = matrix_from_rows(&GALACTIC_ROTATION);
}

fn matrix_from_rows(rows: &[[f64; 3]; 3]) -> Matrix3<f64> {
    Matrix3::new(
        rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
        rows[2][1], rows[2][2],
    )
}

/// Galactic to equatorial transformation, built from the inverse of an equatorial to
/// galactic rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticFrame {
    inverse: Matrix3<f64>,
}

impl Default for GalacticFrame {
    fn default() -> Self {
        // The default matrix is orthonormal, its inverse is its transpose.
        Self {
            inverse: DEFAULT_ROTATION.transpose(),
        }
    }
}

impl GalacticFrame {
    /// Construct from a row major equatorial to galactic matrix.
    ///
    /// The matrix is inverted numerically, so it does not need to be exactly
    /// orthonormal, but it must not be singular.
    pub fn from_rows(rows: &[[f64; 3]; 3]) -> SkymapResult<Self> {
        let inverse = matrix_from_rows(rows)
            .try_inverse()
            .ok_or(Error::ValueError(
                "Galactic rotation matrix is singular and cannot be inverted.".into(),
            ))?;
        Ok(Self { inverse })
    }

    /// Convert a galactic colatitude and azimuth in radians to equatorial ra/dec.
    ///
    /// `theta` is measured from the galactic north pole, so the disk of the Milky Way
    /// sits at theta = pi / 2.
    #[inline(always)]
    pub fn to_equatorial(&self, theta: f64, phi: f64) -> SphericalPoint {
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();
        let vec = Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t);
        SphericalPoint::from_vec(&(self.inverse * vec))
    }
}
