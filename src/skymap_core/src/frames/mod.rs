//! Coordinate frames and related conversions.
//!
//! Angles are in degrees unless a function says otherwise.
//!

mod galactic;
mod sphere;

pub use galactic::*;
pub use sphere::*;
