//! Scene snapshots and their SVG / pixel output.

pub(crate) mod frame;
pub(crate) mod raster;
pub(crate) mod svg;
