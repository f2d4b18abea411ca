//! HEALPix tiles and the pointings which cover them.
use serde::{Deserialize, Serialize};

use super::{Color, MapCorners, Patch, PatchStyle, SkyCanvas, SkyMap};
use crate::errors::{check_same_len, SkymapResult};
use crate::frames::SphericalPoint;
use crate::geodesy::Ellipsoid;
use crate::healpix::{boundaries, boundaries_many, check_nside, max_pixrad, pix_center, Ordering};
use crate::polygon::project_pixel_boundaries;
use crate::projection::{relative_lon, Projection, ProjectionKind, SouthPolarStereographic};

/// Patches of nested HEALPix pixels, split where they cross the seam of the map.
pub fn pixel_patches(
    map: &SkyMap,
    ipix: &[u64],
    nside: u64,
    step: usize,
    style: PatchStyle,
) -> SkymapResult<Vec<Patch>> {
    let edges = boundaries_many(nside, ipix, step, Ordering::Nested)?;
    let polygons = project_pixel_boundaries(
        &edges.lon(),
        &edges.lat(),
        step,
        ipix.len(),
        &map.projection,
        map.lon_max(),
        map.epsilon,
    )?;
    Ok(polygons
        .into_iter()
        .flatten()
        .map(|polygon| Patch { polygon, style })
        .collect())
}

/// A drawing of one tile with the pointings overlapping it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilePlot {
    /// The drawing.
    pub canvas: SkyCanvas,

    /// Center of the map, degrees.
    pub center: SphericalPoint,

    /// Limits of the map.
    pub corners: MapCorners,
}

/// Visualization of nested HEALPix tiles together with survey pointings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpTileVis {
    /// Resolution of the tiles.
    pub nside: u64,

    /// Number of boundary points per tile edge.
    pub step: usize,
}

impl HpTileVis {
    /// Construct for the given tile resolution.
    pub fn new(nside: u64, step: usize) -> SkymapResult<Self> {
        check_nside(nside)?;
        Ok(Self { nside, step })
    }

    /// Center of a tile, ra/dec degrees.
    pub fn tile_center(&self, tile_id: u64) -> SkymapResult<SphericalPoint> {
        pix_center(self.nside, tile_id, Ordering::Nested)
    }

    /// Plot a tile on a cylindrical map centered on it, with the field of view of
    /// each of the `pointings`.
    ///
    /// The map extends `(max_pixrad + radius) * padding_factor` degrees to every side
    /// of the center, unless `corners` are given. With a padding factor of 1 every
    /// pointing which overlaps the tile is centered on the map. Pointings centered
    /// outside of the corners are skipped.
    ///
    /// # Arguments
    ///
    /// * `tile_id` - Nested id of the tile.
    /// * `pointings` - Centers of the pointings to draw, may be empty.
    /// * `radius` - Radius of the field of view, degrees.
    /// * `padding_factor` - Scale of the map relative to the size of the tile.
    /// * `center` - Center of the map, defaults to the center of the tile.
    /// * `corners` - Limits of the map.
    /// * `style` - Style of the field of view outlines.
    #[allow(clippy::too_many_arguments)]
    pub fn plot_tile_pointings(
        &self,
        tile_id: u64,
        pointings: &[SphericalPoint],
        radius: f64,
        padding_factor: f64,
        center: Option<SphericalPoint>,
        corners: Option<MapCorners>,
        style: PatchStyle,
    ) -> SkymapResult<TilePlot> {
        let padding = max_pixrad(self.nside)?.to_degrees() + radius;
        let center = match center {
            Some(center) => center,
            None => self.tile_center(tile_id)?,
        };
        let corners = corners
            .unwrap_or_else(|| MapCorners::around(center.lon, center.lat, padding * padding_factor));

        let map = SkyMap::from_kind(
            ProjectionKind::Cylindrical,
            center.lon,
            false,
            Ellipsoid::celestial(),
        );
        let mut canvas = SkyCanvas::new(Color::WHITE);
        canvas.extent = Some(corners);

        for pointing in pointings {
            let lon = center.lon + relative_lon(pointing.lon, center.lon);
            if !corners.contains(lon, pointing.lat) {
                continue;
            }
            canvas.add_patches(map.tissot(pointing.lon, pointing.lat, radius, 100)?, style);
        }

        let outline = boundaries(self.nside, tile_id, self.step, Ordering::Nested)?;
        canvas.add_patches(
            map.project_curve(&outline)?,
            PatchStyle::outline(Color::BLACK, 2.0),
        );

        Ok(TilePlot {
            canvas,
            center,
            corners,
        })
    }
}

/// Footprints of pointings on a stereographic map of the southern sky.
///
/// # Arguments
///
/// * `ra` - Right ascension of the pointings, degrees.
/// * `dec` - Declination of the pointings, degrees.
/// * `num_points` - Vertices per footprint.
/// * `radius` - Radius of each footprint, degrees.
/// * `boundary` - Latitude of the edge of the map, degrees.
pub fn plot_south_steradian_view(
    ra: &[f64],
    dec: &[f64],
    num_points: usize,
    radius: f64,
    boundary: f64,
) -> SkymapResult<SkyCanvas> {
    check_same_len(ra, dec)?;
    let ellipsoid = Ellipsoid::celestial();
    let map = SkyMap::new(
        Projection::SouthPolarStereographic(SouthPolarStereographic::new(
            0.0,
            boundary,
            ellipsoid.a,
        )),
        ellipsoid,
    );
    let mut canvas = SkyCanvas::new(Color::WHITE);
    for (ra, dec) in ra.iter().zip(dec) {
        canvas.add_patches(
            map.tissot(*ra, *dec, radius, num_points)?,
            PatchStyle::outline(Color::BLACK, 1.0),
        );
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::healpix::tile_id_from_celestial;

    #[test]
    fn test_pixel_patches() {
        let map = SkyMap::from_kind(ProjectionKind::Mollweide, 0.0, true, Ellipsoid::celestial());
        let style = PatchStyle::filled(Color::BLACK, 1.0);
        // nside 1 pixel 0 spans ra 0 to 90, pixel 5 is centered on ra 90
        let patches = pixel_patches(&map, &[0, 5], 1, 10, style).unwrap();
        assert_eq!(patches.len(), 2);
        assert_eq!(patches[0].polygon.len(), 40);

        // every pixel of the whole sphere, some are cut in two at the seam
        let all: Vec<u64> = (0..48).collect();
        let patches = pixel_patches(&map, &all, 2, 4, style).unwrap();
        assert!(patches.len() > 48);
        assert!(patches.iter().all(|p| p.polygon.len() >= 2));
    }

    #[test]
    fn test_tile_pointings() {
        let vis = HpTileVis::new(16, 10).unwrap();
        let center = vis.tile_center(1000).unwrap();
        let pointings = [
            center,
            SphericalPoint::new(center.lon + 1.0, center.lat - 0.5),
        ];
        let plot = vis
            .plot_tile_pointings(
                1000,
                &pointings,
                1.75,
                1.0,
                None,
                None,
                PatchStyle::outline(Color::RED, 1.0),
            )
            .unwrap();
        assert_eq!(plot.center, center);
        let padding = max_pixrad(16).unwrap().to_degrees() + 1.75;
        assert!((plot.corners.urcrnrlat - center.lat - padding).abs() < 1e-12);
        assert_eq!(plot.canvas.patches.len(), 3);
        assert_eq!(plot.canvas.patches[2].polygon.len(), 40);
        assert_eq!(plot.canvas.extent, Some(plot.corners));
        assert!(HpTileVis::new(10, 10).is_err());
    }

    #[test]
    fn test_tile_pointings_outside_corners() {
        let vis = HpTileVis::new(16, 10).unwrap();
        // tile on the equator at ra 0, its corners straddle ra 0
        let tile = tile_id_from_celestial(0.5, 0.5, 16).unwrap();
        let center = vis.tile_center(tile).unwrap();
        let pointings = [
            SphericalPoint::new(center.lon, center.lat),
            SphericalPoint::new(center.lon + 359.5, center.lat),
            SphericalPoint::new(center.lon + 40.0, center.lat),
            SphericalPoint::new(center.lon, center.lat + 40.0),
        ];
        let plot = vis
            .plot_tile_pointings(
                tile,
                &pointings,
                1.75,
                1.0,
                None,
                None,
                PatchStyle::outline(Color::RED, 1.0),
            )
            .unwrap();
        // two footprints and the outline of the tile
        assert_eq!(plot.canvas.patches.len(), 3);
        assert_eq!(plot.canvas.patches[2].style.edge_color, Color::BLACK);
    }

    #[test]
    fn test_south_view() {
        let canvas =
            plot_south_steradian_view(&[0.0, 120.0, 240.0], &[-60.0, -70.0, -80.0], 50, 1.75, -20.0)
                .unwrap();
        assert_eq!(canvas.patches.len(), 3);
        assert!(canvas.patches.iter().all(|p| p.polygon.len() == 51));
        assert!(plot_south_steradian_view(&[0.0], &[], 50, 1.75, -20.0).is_err());
    }
}
