//! # Configuration
//! Settings controlling how survey pointings are drawn.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_CIRCLE_POINTS, DEFAULT_FOV_RADIUS};
use crate::geodesy::Ellipsoid;
use crate::io::FileIO;
use crate::projection::ProjectionKind;
use crate::vis::Color;

/// Settings of [`crate::vis::AllSkyVisualization`].
///
/// ```
///     use skymap_core::config::VisualizationConfig;
///     use skymap_core::vis::Color;
///
///     let config = VisualizationConfig::default();
///     assert_eq!(config.band_color("r"), Color::RED);
///     assert_eq!(config.radius_deg, 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationConfig {
    /// Color of the camera outline for each filter band.
    pub band_colors: BTreeMap<String, Color>,

    /// Color used for bands missing from `band_colors`.
    pub default_color: Color,

    /// Radius of the camera field of view in degrees.
    pub radius_deg: f64,

    /// Number of vertices of the field of view circle.
    pub num_points: usize,

    /// Width of the camera outline.
    pub camera_line_width: f64,

    /// Projection of the whole sky map.
    pub projection: ProjectionKind,

    /// Central meridian of the map in degrees.
    pub lon_0: f64,

    /// Draw with right ascension increasing to the left.
    pub celestial: bool,

    /// Ellipsoid used for the map and for footprint geodesics.
    pub ellipsoid: Ellipsoid,

    /// Color of the sky.
    pub bg_color: Color,

    /// Draw the Milky Way band.
    pub show_mw: bool,

    /// Fill color of the Milky Way band.
    pub mw_color: Color,

    /// Opacity of the Milky Way band.
    pub mw_alpha: f64,

    /// Parts of the Milky Way south of this declination are not drawn, degrees.
    pub mw_min_dec: f64,

    /// Draw transients as a scatter plot.
    pub show_var_scatter: bool,

    /// Color transients by redshift.
    pub color_code_redshifts: bool,

    /// Redshifts mapped to the ends of the color scale.
    pub z_range: (f64, f64),
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        let band_colors = [("g", Color::GREEN), ("r", Color::RED), ("i", Color::YELLOW)]
            .into_iter()
            .map(|(band, color)| (band.to_string(), color))
            .collect();
        Self {
            band_colors,
            default_color: Color::BLACK,
            radius_deg: DEFAULT_FOV_RADIUS,
            num_points: DEFAULT_CIRCLE_POINTS,
            camera_line_width: 2.0,
            projection: ProjectionKind::Mollweide,
            lon_0: 0.0,
            celestial: true,
            ellipsoid: Ellipsoid::celestial(),
            bg_color: Color::BLUE,
            show_mw: true,
            mw_color: Color::GREEN,
            mw_alpha: 1.0,
            mw_min_dec: -30.0,
            show_var_scatter: false,
            color_code_redshifts: true,
            z_range: (0.0, 0.2),
        }
    }
}

impl VisualizationConfig {
    /// Outline color of a band, falling back to `default_color` with a warning.
    pub fn band_color(&self, band: &str) -> Color {
        match self.band_colors.get(band) {
            Some(color) => *color,
            None => {
                log::warn!(
                    "No color configured for band '{}', known bands are {:?}, using {}.",
                    band,
                    self.band_colors.keys().collect::<Vec<_>>(),
                    self.default_color
                );
                self.default_color
            }
        }
    }
}

impl FileIO for VisualizationConfig {}
