use std::io::Write;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    common::paths::derive_output_path,
    decode::{GenericDecoder, ImageDecoder, RawLoaderDecoder},
    png::{ConversionConfig, PngWriter, StandardPngWriter},
};

/// Converts a single input file to PNG.
///
/// Decoding is a two-stage attempt: the RAW capability first, then the generic
/// capability on any RAW failure. The error surfaced to the caller is always
/// the final attempt's; the RAW diagnostic is logged at debug level.
pub struct ImageToPngPipeline<R: ImageDecoder, F: ImageDecoder, W: PngWriter> {
    raw_decoder: R,
    fallback_decoder: F,
    writer: W,
    config: ConversionConfig,
}

impl ImageToPngPipeline<RawLoaderDecoder, GenericDecoder, StandardPngWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            raw_decoder: RawLoaderDecoder::new(),
            fallback_decoder: GenericDecoder,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: ImageDecoder, F: ImageDecoder, W: PngWriter> ImageToPngPipeline<R, F, W> {
    pub fn with_custom(raw_decoder: R, fallback_decoder: F, writer: W, config: ConversionConfig) -> Self {
        Self {
            raw_decoder,
            fallback_decoder,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    fn decode_image(&self, input_data: &[u8]) -> Result<DynamicImage> {
        let raw_attempt = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.raw_decoder.decode(input_data)
        };

        let image = match raw_attempt {
            Ok(image) => image,
            Err(raw_err) => {
                debug!("RAW decode failed, falling back to generic decoder: {}", raw_err);
                let _span = tracing::info_span!("decode_generic").entered();
                self.fallback_decoder.decode(input_data)?
            }
        };

        self.validate_dimensions(image.width() as usize, image.height() as usize)?;
        Ok(image)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        let image = self.decode_image(input_data)?;

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&image, output, &self.config)?;
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Conversion complete"
        );
        Ok(())
    }

    /// Converts `input_path` to `<output_dir>/<stem>.png` and returns the
    /// output path.
    ///
    /// An existing file at the output path is overwritten without warning. The
    /// output file is only created once decoding has succeeded, so a failed
    /// item leaves nothing behind.
    #[instrument(skip(self, input_path, output_dir))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_dir: Q,
    ) -> Result<PathBuf> {
        let input_path = input_path.as_ref();
        let output_path = derive_output_path(input_path, output_dir.as_ref())?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let image = self.decode_image(&input_data)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(&output_path).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&image, &mut output_file, &self.config)?;
        }

        info!(
            width = image.width(),
            height = image.height(),
            "Conversion complete"
        );
        Ok(output_path)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
