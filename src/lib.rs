//! `rating-badge` library crate.
//!
//! The binary (`rating-badge`) is a thin wrapper around this library so that:
//!
//! - the rendering core is testable without spawning processes
//! - the badge renderer can be embedded elsewhere (e.g. a web handler)
//!   without pulling in the CLI

pub mod app;
pub mod badge;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;
