use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::decoder::ImageDecoder;

/// Generic decode capability backed by the image crate's content-sniffing
/// loader. Handles JPEG, PNG, BMP, TIFF, WebP and GIF inputs regardless of
/// their file extension.
pub struct GenericDecoder;

impl ImageDecoder for GenericDecoder {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        debug!("Decoding with generic loader, {} bytes", data.len());
        image::load_from_memory(data).map_err(|e| ConversionError::DecodeError(e.to_string()))
    }
}
