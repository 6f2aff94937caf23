//! PNG writing module
//!
//! This module provides PNG encoding with configurable compression and row
//! filtering.

mod standard_png_writer;
mod writer;
pub mod types;

pub use standard_png_writer::StandardPngWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, PngCompression, PngFilter};
pub use writer::PngWriter;
