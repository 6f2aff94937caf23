//! Image conversion pipeline module
//!
//! This module provides a structured approach to image to PNG conversion,
//! with separate modules for decoding, demosaicing, PNG writing, and batch
//! orchestration.

pub mod common;
pub mod conversions;
pub mod decode;
pub mod demosaic;
pub mod png;

pub use common::paths::{default_output_dir, derive_output_path, ensure_output_dir};
pub use common::{ConversionError, Result};

pub use decode::{GenericDecoder, ImageDecoder, RawImageData, RawLoaderDecoder};

pub use demosaic::{CpuDemosaic, RgbImageData};

pub use png::{
    ConversionConfig, ConversionConfigBuilder, PngCompression, PngFilter, PngWriter,
    StandardPngWriter,
};

pub use conversions::{BatchRunner, BatchStatus, BatchSummary, ImageToPngPipeline};
