//! # Constants
//! Constants used throughout skymap.
//!
//! Angles are in degrees unless stated otherwise, lengths in meters.

mod geodetic;
mod sky;

pub use geodetic::*;
pub use sky::*;
