//! Drawing surface holding everything that makes up a single sky plot.
//!
//! A canvas is not rasterized here, it is the ordered list of styled shapes which a
//! renderer draws back to front.
use serde::{Deserialize, Serialize};

use super::Color;
use crate::polygon::PlanarPolygon;

/// How a polygon is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatchStyle {
    /// Fill the inside of the polygon.
    pub fill: bool,

    /// Fill color.
    pub face_color: Color,

    /// Outline color.
    pub edge_color: Color,

    /// Outline width in points, 0 disables the outline.
    pub line_width: f64,

    /// Opacity between 0 and 1.
    pub alpha: f64,
}

impl Default for PatchStyle {
    fn default() -> Self {
        Self {
            fill: true,
            face_color: Color::BLUE,
            edge_color: Color::BLACK,
            line_width: 1.0,
            alpha: 1.0,
        }
    }
}

impl PatchStyle {
    /// Unfilled outline of the given color and width.
    pub fn outline(edge_color: Color, line_width: f64) -> Self {
        Self {
            fill: false,
            edge_color,
            line_width,
            ..Default::default()
        }
    }

    /// Filled shape without an outline.
    pub fn filled(face_color: Color, alpha: f64) -> Self {
        Self {
            fill: true,
            face_color,
            edge_color: face_color,
            line_width: 0.0,
            alpha,
        }
    }
}

/// A styled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    /// Vertices on the map plane.
    pub polygon: PlanarPolygon,

    /// Drawing style.
    pub style: PatchStyle,
}

/// A point of a scatter plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Position on the map plane.
    pub xy: [f64; 2],

    /// Marker area in points squared.
    pub size: f64,

    /// Color used when there is no color scale value.
    pub color: Color,

    /// Value on a normalized color scale, where 0 and 1 are the ends of the scale.
    pub value: Option<f64>,
}

/// Longitude and latitude limits of a regional map, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCorners {
    /// Latitude of the lower left corner.
    pub llcrnrlat: f64,

    /// Longitude of the lower left corner.
    pub llcrnrlon: f64,

    /// Latitude of the upper right corner.
    pub urcrnrlat: f64,

    /// Longitude of the upper right corner.
    pub urcrnrlon: f64,
}

impl MapCorners {
    /// Square box around a center point, `half_width` degrees to each side.
    pub fn around(lon: f64, lat: f64, half_width: f64) -> Self {
        Self {
            llcrnrlat: lat - half_width,
            llcrnrlon: lon - half_width,
            urcrnrlat: lat + half_width,
            urcrnrlon: lon + half_width,
        }
    }

    /// Is the point inside of the box, longitudes are compared without wrapping.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        (self.llcrnrlat..=self.urcrnrlat).contains(&lat)
            && (self.llcrnrlon..=self.urcrnrlon).contains(&lon)
    }
}

/// Collection of shapes making up one plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyCanvas {
    /// Color of the sky inside the map boundary.
    pub background: Color,

    /// Title of the plot.
    pub title: String,

    /// Polygons in drawing order.
    pub patches: Vec<Patch>,

    /// Scatter points, drawn above the patches.
    pub markers: Vec<Marker>,

    /// Limits of a regional map, `None` for whole sky maps.
    pub extent: Option<MapCorners>,
}

impl Default for SkyCanvas {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl SkyCanvas {
    /// Empty canvas with the given background.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            title: String::new(),
            patches: Vec::new(),
            markers: Vec::new(),
            extent: None,
        }
    }

    /// Set the title of the plot.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Add a single polygon.
    pub fn add_patch(&mut self, polygon: PlanarPolygon, style: PatchStyle) {
        self.patches.push(Patch { polygon, style });
    }

    /// Add several polygons sharing a style.
    pub fn add_patches<I>(&mut self, polygons: I, style: PatchStyle)
    where
        I: IntoIterator<Item = PlanarPolygon>,
    {
        self.patches
            .extend(polygons.into_iter().map(|polygon| Patch { polygon, style }));
    }

    /// Add a scatter point.
    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut canvas = SkyCanvas::new(Color::BLUE);
        let poly = PlanarPolygon::new(vec![[0.0, 0.0], [1.0, 1.0]]);
        canvas.add_patch(poly.clone(), PatchStyle::default());
        canvas.add_patches(vec![poly.clone(), poly], PatchStyle::outline(Color::RED, 2.0));
        assert_eq!(canvas.patches.len(), 3);
        assert!(!canvas.patches[2].style.fill);
        assert_eq!(canvas.patches[2].style.edge_color, Color::RED);
        canvas.set_title("59580.00000");
        assert_eq!(canvas.title, "59580.00000");

        canvas.add_marker(Marker {
            xy: [0.5, -0.5],
            size: 4.0,
            color: Color::WHITE,
            value: None,
        });
        assert_eq!(canvas.markers.len(), 1);
        assert_eq!(canvas.markers[0].xy, [0.5, -0.5]);
    }

    #[test]
    fn test_corners() {
        let box_ = MapCorners::around(10.0, -20.0, 5.0);
        assert_eq!(box_.llcrnrlat, -25.0);
        assert_eq!(box_.urcrnrlon, 15.0);
        assert!(box_.contains(12.0, -18.0));
        assert!(!box_.contains(16.0, -18.0));
    }
}
