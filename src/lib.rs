//! Batch image and camera RAW to PNG conversion.
//!
//! The crate pairs two decode capabilities (RAW via rawloader plus a CPU
//! demosaic, generic via the image crate) behind a try-then-fallback pipeline,
//! with a sequential batch runner reporting per-item progress.

pub mod cli;
pub mod image_pipeline;
pub mod logger;
pub mod reveal;
