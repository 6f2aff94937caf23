use std::io::Write;

use image::DynamicImage;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::ConversionConfig;

pub trait PngWriter {
    fn write_png(
        &self,
        image: &DynamicImage,
        output: &mut dyn Write,
        config: &ConversionConfig,
    ) -> Result<()>;
}
