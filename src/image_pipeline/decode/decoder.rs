use image::DynamicImage;

use crate::image_pipeline::common::error::Result;

/// A decode capability: turns encoded file bytes into an in-memory raster.
pub trait ImageDecoder {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage>;
}
