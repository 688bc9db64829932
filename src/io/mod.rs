//! Input/output around the badge core.
//!
//! - rating ingest from argv or a ratings file (`ingest`)
//! - SVG file output (`export`)
//! - PNG rasterization (`raster`)
//! - ZIP packaging (`archive`)
//! - run manifest JSON (`manifest`)

pub mod archive;
pub mod export;
pub mod ingest;
pub mod manifest;
pub mod raster;

pub use archive::*;
pub use export::*;
pub use ingest::*;
pub use manifest::*;
pub use raster::*;
