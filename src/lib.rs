//! isoart - generative art gallery
//!
//! Host crate: configuration, the offline frame loop, and SVG export.

pub mod config;
pub mod systems;
