//! Rating badge core: rating string -> SVG document.
//!
//! Responsibilities:
//!
//! - split a rating string into its upper/lower segments (`parser`)
//! - map a rating value to a gradient tier and its definition (`gradient`)
//! - compose the final SVG markup (`svg`)
//!
//! Everything here is pure and synchronous; callers are free to run it from
//! any number of threads.

pub mod gradient;
pub mod parser;
pub mod svg;

pub use gradient::*;
pub use parser::*;
pub use svg::*;
