//! Pipeline conversions module
//!
//! Orchestration logic: single-file conversion with decode fallback, and the
//! sequential batch runner built on top of it.

mod batch;
mod image_to_png;


pub use batch::{BatchRunner, BatchStatus, BatchSummary};
pub use image_to_png::ImageToPngPipeline;
