//! # Visualization
//! Sky plots of survey pointings.
//!
//! Plots are collected on an explicit [`SkyCanvas`] as styled patches and markers,
//! there is no global plotting state. Each canvas is built by a single call and may
//! be built in parallel with others, but must not be shared while it is being
//! filled.
mod canvas;
mod color;
mod milky_way;
mod sky_map;
mod tiles;
mod visualization;

pub use canvas::{MapCorners, Marker, Patch, PatchStyle, SkyCanvas};
pub use color::Color;
pub use milky_way::MilkyWayExtension;
pub use sky_map::SkyMap;
pub use tiles::{pixel_patches, plot_south_steradian_view, HpTileVis, TilePlot};
pub use visualization::{AllSkyVisualization, Pointing, Transient};
