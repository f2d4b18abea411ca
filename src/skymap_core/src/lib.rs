//! # skymap Core
//! Footprints of survey pointings on maps of the sky.
//!
//! Circular fields of view, HEALPix tiles and the Milky Way are constructed on the
//! celestial sphere, and projected onto maps. Shapes which cross the longitude seam of
//! a projection are cut in pieces before they are drawn, see [`polygon`].
//!
//! Map projections, geodesics and HEALPix indexing are implemented here directly, so
//! the crate has no dependency on plotting or GIS libraries.
//!

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    unconditional_recursion,
    unused,
    while_true,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    unused_results
)]

pub mod config;
pub mod constants;
pub mod errors;
pub mod frames;
pub mod geodesy;
pub mod healpix;
pub mod io;
pub mod polygon;
pub mod projection;
pub mod vis;

/// Common useful imports
pub mod prelude {
    pub use crate::config::VisualizationConfig;
    pub use crate::errors::{Error, SkymapResult};
    pub use crate::frames::{GalacticFrame, SphericalPoint, SphericalPolyline};
    pub use crate::geodesy::{Ellipsoid, Geodesic};
    pub use crate::healpix::Ordering;
    pub use crate::io::FileIO;
    pub use crate::polygon::{generate_circle, milky_way_boundary, project_polygon, PlanarPolygon};
    pub use crate::projection::{MapProjection, Projection, ProjectionKind};
    pub use crate::vis::{AllSkyVisualization, SkyCanvas, SkyMap};
}
