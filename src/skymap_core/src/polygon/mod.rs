//! # Polygons
//! Footprints on the sky and their projection onto maps.
//!
//! Shapes are built on the sphere as [`crate::frames::SphericalPolyline`]s, either as
//! geodesic circles ([`generate_circle`]), HEALPix pixel outlines
//! ([`crate::healpix::boundaries`]) or the Milky Way band ([`milky_way_boundary`]).
//! [`project_polygon`] turns them into [`PlanarPolygon`]s, cutting them where they
//! cross the longitude seam of the projection so no edge is drawn across the map.
mod circle;
mod milky_way;
mod projector;
mod split;

pub use circle::generate_circle;
pub use milky_way::milky_way_boundary;
pub use projector::{
    project_pixel_boundaries, project_polygon, project_polygon_arrays, PlanarPolygon,
};
pub use split::{needs_split, split_polygon_segments};
