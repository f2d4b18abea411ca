//! The Milky Way band drawn as a filled patch.
use serde::{Deserialize, Serialize};

use super::{Patch, PatchStyle, SkyMap};
use crate::errors::SkymapResult;
use crate::frames::GalacticFrame;
use crate::polygon::milky_way_boundary;

/// Region of the sky obscured by the Milky Way.
///
/// The galactic frame is built from an equatorial to galactic rotation, only roughly
/// accurate, which is plenty for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilkyWayExtension {
    /// Galactic to equatorial conversion.
    pub frame: GalacticFrame,

    /// Fill style of the band.
    pub style: PatchStyle,

    /// Parts of the band south of this declination are cut off, degrees.
    pub min_dec: f64,
}

impl Default for MilkyWayExtension {
    fn default() -> Self {
        Self {
            frame: GalacticFrame::default(),
            style: PatchStyle::filled(super::Color::YELLOW, 1.0),
            min_dec: -30.0,
        }
    }
}

impl MilkyWayExtension {
    /// Band drawn with the default rotation.
    pub fn new(style: PatchStyle, min_dec: f64) -> Self {
        Self {
            style,
            min_dec,
            ..Default::default()
        }
    }

    /// Patches outlining the band on the map, split at the seam of the map.
    pub fn polygons(&self, map: &SkyMap) -> SkymapResult<Vec<Patch>> {
        let boundary = milky_way_boundary(&self.frame, self.min_dec);
        Ok(map
            .project_curve(&boundary)?
            .into_iter()
            .map(|polygon| Patch {
                polygon,
                style: self.style,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesy::Ellipsoid;
    use crate::projection::ProjectionKind;
    use crate::vis::Color;

    #[test]
    fn test_polygons() {
        let map = SkyMap::from_kind(ProjectionKind::Mollweide, 0.0, true, Ellipsoid::celestial());
        let mw = MilkyWayExtension::new(PatchStyle::filled(Color::GREEN, 0.5), -30.0);
        let patches = mw.polygons(&map).unwrap();
        assert!(!patches.is_empty());
        assert!(patches.len() <= 2);
        assert!(patches.iter().all(|p| p.style.face_color == Color::GREEN));
        assert!(patches.iter().all(|p| p.polygon.len() >= 2));
    }
}
