//! Whole sky images of single survey pointings.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{Color, Marker, MilkyWayExtension, Patch, PatchStyle, SkyCanvas, SkyMap};
use crate::config::VisualizationConfig;
use crate::errors::SkymapResult;
use crate::projection::is_valid_xy;

/// A single exposure of the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pointing {
    /// Right ascension of the field center, degrees.
    pub ra: f64,

    /// Declination of the field center, degrees.
    pub dec: f64,

    /// Time of the exposure, MJD.
    pub mjd: f64,

    /// Filter band of the exposure.
    pub band: String,
}

/// A transient visible during an exposure, drawn as a scatter point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transient {
    /// Right ascension, degrees.
    pub ra: f64,

    /// Declination, degrees.
    pub dec: f64,

    /// Marker area.
    pub area: f64,

    /// Redshift.
    pub z: f64,
}

/// Whole sky visualization of survey pointings, with the field of view drawn in the
/// color of its band on top of the sky and the Milky Way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllSkyVisualization {
    /// Drawing settings.
    pub config: VisualizationConfig,
}

impl Default for AllSkyVisualization {
    fn default() -> Self {
        Self::new(VisualizationConfig::default())
    }
}

impl AllSkyVisualization {
    /// Construct from settings.
    pub fn new(config: VisualizationConfig) -> Self {
        Self { config }
    }

    /// The whole sky map described by the settings.
    pub fn sky_map(&self) -> SkyMap {
        SkyMap::from_kind(
            self.config.projection,
            self.config.lon_0,
            self.config.celestial,
            self.config.ellipsoid,
        )
    }

    /// Patches of the Milky Way band.
    pub fn generate_mw_polygons(&self, map: &SkyMap) -> SkymapResult<Vec<Patch>> {
        MilkyWayExtension::new(
            PatchStyle::filled(self.config.mw_color, self.config.mw_alpha),
            self.config.mw_min_dec,
        )
        .polygons(map)
    }

    /// Empty map with the sky background, and the Milky Way if enabled.
    pub fn generate_image_bg(&self) -> SkymapResult<(SkyCanvas, SkyMap)> {
        let map = self.sky_map();
        let mut canvas = SkyCanvas::new(self.config.bg_color);
        if self.config.show_mw {
            canvas.patches.extend(self.generate_mw_polygons(&map)?);
        }
        Ok((canvas, map))
    }

    /// Outline of the camera field of view centered on `(ra, dec)`, colored by band.
    pub fn generate_camera(
        &self,
        ra: f64,
        dec: f64,
        map: &SkyMap,
        band: &str,
    ) -> SkymapResult<Vec<Patch>> {
        let style = PatchStyle::outline(
            self.config.band_color(band),
            self.config.camera_line_width,
        );
        Ok(map
            .tissot(ra, dec, self.config.radius_deg, self.config.num_points)?
            .into_iter()
            .map(|polygon| Patch { polygon, style })
            .collect())
    }

    /// Title of an image taken at the given time.
    ///
    /// ```
    ///     use skymap_core::vis::AllSkyVisualization;
    ///     let vis = AllSkyVisualization::default();
    ///     assert_eq!(vis.label_time_image(59580.123456789), "59580.12346");
    /// ```
    pub fn label_time_image(&self, mjd: f64) -> String {
        format!("{:.5}", mjd)
    }

    /// Scatter points for the transients, colored by redshift if enabled.
    ///
    /// Transients which are not on the map are skipped.
    pub fn generate_var_scatter(
        &self,
        map: &SkyMap,
        transients: &[Transient],
    ) -> SkymapResult<Vec<Marker>> {
        let (z_low, z_high) = self.config.z_range;
        let mut markers = Vec::with_capacity(transients.len());
        for transient in transients {
            let xy = map.project(transient.ra, transient.dec)?;
            if !is_valid_xy(&xy) {
                continue;
            }
            let value = if self.config.color_code_redshifts && z_high > z_low {
                Some((transient.z - z_low) / (z_high - z_low))
            } else {
                None
            };
            markers.push(Marker {
                xy,
                size: transient.area,
                color: Color::WHITE,
                value,
            });
        }
        Ok(markers)
    }

    /// Full image of a pointing, the background, the camera and optionally the
    /// transients, titled with the time of the exposure.
    pub fn generate_image(
        &self,
        pointing: &Pointing,
        transients: Option<&[Transient]>,
    ) -> SkymapResult<SkyCanvas> {
        let (mut canvas, map) = self.generate_image_bg()?;
        canvas
            .patches
            .extend(self.generate_camera(pointing.ra, pointing.dec, &map, &pointing.band)?);

        if self.config.show_var_scatter {
            if let Some(transients) = transients {
                for marker in self.generate_var_scatter(&map, transients)? {
                    canvas.add_marker(marker);
                }
            }
        }
        canvas.set_title(self.label_time_image(pointing.mjd));
        Ok(canvas)
    }

    /// Images of many pointings, computed in parallel.
    pub fn generate_images(&self, pointings: &[Pointing]) -> SkymapResult<Vec<SkyCanvas>> {
        pointings
            .par_iter()
            .map(|pointing| self.generate_image(pointing, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pointing(ra: f64, band: &str) -> Pointing {
        Pointing {
            ra,
            dec: -20.0,
            mjd: 59580.5,
            band: band.into(),
        }
    }

    #[test]
    fn test_generate_image() {
        let vis = AllSkyVisualization::default();
        let canvas = vis.generate_image(&pointing(45.0, "r"), None).unwrap();
        assert_eq!(canvas.title, "59580.50000");
        assert_eq!(canvas.background, Color::BLUE);
        let camera = canvas.patches.last().unwrap();
        assert_eq!(camera.style.edge_color, Color::RED);
        assert!(!camera.style.fill);
        assert_eq!(camera.polygon.len(), 101);
    }

    #[test]
    fn test_camera_fallback_color() {
        let vis = AllSkyVisualization::default();
        let map = vis.sky_map();
        let patches = vis.generate_camera(180.0, 0.0, &map, "u").unwrap();
        assert_eq!(patches.len(), 2);
        assert!(patches.iter().all(|p| p.style.edge_color == Color::BLACK));
    }

    #[test]
    fn test_no_milky_way() {
        let mut config = VisualizationConfig::default();
        config.show_mw = false;
        let vis = AllSkyVisualization::new(config);
        let (canvas, _) = vis.generate_image_bg().unwrap();
        assert!(canvas.patches.is_empty());
    }

    #[test]
    fn test_var_scatter() {
        let mut config = VisualizationConfig::default();
        config.show_var_scatter = true;
        let vis = AllSkyVisualization::new(config);
        let transients = [
            Transient {
                ra: 10.0,
                dec: -5.0,
                area: 3.0,
                z: 0.1,
            },
            Transient {
                ra: 10.0,
                dec: 95.0,
                area: 3.0,
                z: 0.1,
            },
        ];
        let canvas = vis
            .generate_image(&pointing(10.0, "g"), Some(&transients))
            .unwrap();
        assert_eq!(canvas.markers.len(), 1);
        assert!((canvas.markers[0].value.unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_generate_images() {
        let vis = AllSkyVisualization::default();
        let pointings: Vec<_> = (0..8).map(|idx| pointing(idx as f64 * 45.0, "i")).collect();
        let canvases = vis.generate_images(&pointings).unwrap();
        assert_eq!(canvases.len(), 8);
        for (canvas, pointing) in canvases.iter().zip(pointings.iter()) {
            let single = vis.generate_image(pointing, None).unwrap();
            assert_eq!(canvas, &single);
        }
    }
}
