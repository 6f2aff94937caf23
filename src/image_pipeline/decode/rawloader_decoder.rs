//! RAW decode capability built on the rawloader library.
//!
//! Supports any RAW format rawloader can decode (ARW, CR2, NEF, DNG, RAF, RW2
//! and others). Decoding yields the bare sensor raster; a CPU demosaic pass
//! develops it into RGB before it is handed to the encoder.

use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, Rgb};
use rawloader::RawImageData as RawloaderImageData;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::decoder::ImageDecoder;
use crate::image_pipeline::decode::types::RawImageData;
use crate::image_pipeline::demosaic::CpuDemosaic;

/// Default bit depth when no white level information is available from the RAW file.
const DEFAULT_BITS_PER_SAMPLE: u32 = 16;

/// The bit width of the u16 data type, used for calculating actual bits per sample.
const U16_BITS: u32 = 16;

pub struct RawLoaderDecoder {
    demosaic: CpuDemosaic,
}

impl RawLoaderDecoder {
    pub fn new() -> Self {
        Self {
            demosaic: CpuDemosaic::new(),
        }
    }

    /// Decodes the file with rawloader and normalizes the sensor raster to u16,
    /// carrying along the develop metadata the demosaic stage needs.
    fn read_sensor(&self, data: &[u8]) -> Result<RawImageData> {
        debug!("Decoding RAW image, {} bytes", data.len());

        let decoded = rawloader::decode(&mut Cursor::new(data))
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        if decoded.cpp != 1 {
            // Demosaicing only applies to single-channel CFA data; anything
            // else falls through to the generic capability.
            return Err(ConversionError::UnsupportedFormat(format!(
                "{} components per pixel",
                decoded.cpp
            )));
        }

        let width = decoded.width;
        let height = decoded.height;
        debug!("Decoded sensor raster: {}x{}", width, height);

        let cam_to_xyz = decoded.cam_to_xyz();
        let cfa_name = decoded.cfa.name.clone();
        let blacklevels = decoded.blacklevels;
        let whitelevels = decoded.whitelevels;
        let wb_coeffs = decoded.wb_coeffs;

        // Integer data is cast directly, float data (normalized 0.0-1.0) is
        // scaled to the u16 range
        let data: Vec<u16> = match decoded.data {
            RawloaderImageData::Integer(values) => values.iter().map(|&v| v as u16).collect(),
            RawloaderImageData::Float(values) => values
                .iter()
                .map(|&v| (v * u16::MAX as f32) as u16)
                .collect(),
        };

        // The white level is the maximum value the sensor can produce, which
        // gives the actual bit depth (12, 14, 16, ...) for any RAW format.
        let max_white_level = whitelevels.iter().max().copied().unwrap_or(u16::MAX);
        let bits_per_sample = if max_white_level == 0 {
            DEFAULT_BITS_PER_SAMPLE
        } else {
            U16_BITS - max_white_level.leading_zeros()
        };

        debug!(
            "Calculated bits_per_sample: {} (max white level: {})",
            bits_per_sample, max_white_level
        );

        Ok(RawImageData {
            width,
            height,
            data,
            bits_per_sample,
            cfa_name,
            blacklevels,
            whitelevels,
            wb_coeffs,
            cam_to_xyz,
        })
    }
}

impl ImageDecoder for RawLoaderDecoder {
    fn decode(&self, data: &[u8]) -> Result<DynamicImage> {
        let sensor = self.read_sensor(data)?;
        let rgb = self
            .demosaic
            .process(&sensor)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let buffer: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_raw(rgb.width as u32, rgb.height as u32, rgb.data).ok_or_else(
                || {
                    ConversionError::DecodeError(
                        "demosaiced buffer does not match image dimensions".to_string(),
                    )
                },
            )?;
        Ok(DynamicImage::ImageRgb16(buffer))
    }
}
