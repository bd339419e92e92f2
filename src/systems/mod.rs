//! Application systems
//!
//! Host-side systems that drive the gallery outside a browser.

mod export;
mod frame_loop;

pub use export::{file_stem, ExportError, ExportSystem};
pub use frame_loop::FrameQueue;
