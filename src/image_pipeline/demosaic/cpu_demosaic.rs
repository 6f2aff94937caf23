use std::io::Cursor;

use anyhow::Result;
use bayer::{BayerDepth, CFA, Demosaic, RasterDepth, RasterMut};
use tracing::{debug, info};

use crate::image_pipeline::decode::types::RawImageData;
use crate::image_pipeline::demosaic::types::RgbImageData;

/// Standard XYZ to sRGB matrix, D65 illuminant.
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

pub struct CpuDemosaic;

impl CpuDemosaic {
    pub fn new() -> Self {
        Self
    }

    /// Demosaics a CFA sensor raster and develops it into display-ready RGB:
    /// black level subtraction, normalization, white balance, camera matrix
    /// (Cam -> XYZ -> sRGB), sRGB transfer curve, scaled to u16.
    pub fn process(&self, raw_image: &RawImageData) -> Result<RgbImageData> {
        let width = raw_image.width;
        let height = raw_image.height;
        info!("Demosaicing {}x{} sensor raster", width, height);

        // The bayer crate only supports 8 and 16 bit depths
        let (bayer_depth, raster_depth, bytes_per_pixel) = if raw_image.bits_per_sample <= 8 {
            (BayerDepth::Depth8, RasterDepth::Depth8, 1)
        } else {
            (BayerDepth::Depth16LE, RasterDepth::Depth16, 2)
        };

        // It also consumes bytes, not u16 samples
        let bayer_bytes: Vec<u8> = if raw_image.bits_per_sample <= 8 {
            raw_image.data.iter().map(|&val| val as u8).collect()
        } else {
            raw_image
                .data
                .iter()
                .flat_map(|&val| val.to_le_bytes())
                .collect()
        };

        let cfa = cfa_from_name(&raw_image.cfa_name);
        debug!(
            "Running demosaic with depth={:?}, CFA={}, algo=Linear",
            bayer_depth, raw_image.cfa_name
        );

        let output_buf_size = width * height * 3 * bytes_per_pixel;
        let mut output_buf = vec![0u8; output_buf_size];
        let mut cursor = Cursor::new(&bayer_bytes[..]);
        let mut output_raster = RasterMut::new(width, height, raster_depth, &mut output_buf);

        bayer::run_demosaic(&mut cursor, bayer_depth, cfa, Demosaic::Linear, &mut output_raster)
            .map_err(|e| anyhow::anyhow!("Demosaic failed: {:?}", e))?;

        // Combined matrix: Cam -> XYZ -> sRGB. cam_to_xyz is 3x4 with the
        // offset in column 3.
        let mut cam_to_srgb = [[0.0f32; 4]; 3];
        for r in 0..3 {
            for c in 0..4 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += XYZ_TO_SRGB[r][k] * raw_image.cam_to_xyz[k][c];
                }
                cam_to_srgb[r][c] = sum;
            }
        }

        let black_level = raw_image.blacklevels[0] as f32;
        let white_level = raw_image.whitelevels[0] as f32;
        let range = (white_level - black_level).max(1.0);

        let wb_r = wb_ratio(raw_image.wb_coeffs[0], raw_image.wb_coeffs[1]);
        let wb_g = 1.0;
        let wb_b = wb_ratio(raw_image.wb_coeffs[2], raw_image.wb_coeffs[1]);

        let rgb_data: Vec<u16> = output_buf
            .chunks_exact(bytes_per_pixel * 3)
            .flat_map(|pixel_bytes| {
                let (r_raw, g_raw, b_raw) = if bytes_per_pixel == 1 {
                    (
                        pixel_bytes[0] as f32,
                        pixel_bytes[1] as f32,
                        pixel_bytes[2] as f32,
                    )
                } else {
                    (
                        u16::from_le_bytes([pixel_bytes[0], pixel_bytes[1]]) as f32,
                        u16::from_le_bytes([pixel_bytes[2], pixel_bytes[3]]) as f32,
                        u16::from_le_bytes([pixel_bytes[4], pixel_bytes[5]]) as f32,
                    )
                };

                // Black level & normalize & WB
                let r_lin = ((r_raw - black_level).max(0.0) / range) * wb_r;
                let g_lin = ((g_raw - black_level).max(0.0) / range) * wb_g;
                let b_lin = ((b_raw - black_level).max(0.0) / range) * wb_b;

                // Color matrix (Cam -> sRGB)
                let r_out = cam_to_srgb[0][0] * r_lin
                    + cam_to_srgb[0][1] * g_lin
                    + cam_to_srgb[0][2] * b_lin
                    + cam_to_srgb[0][3];
                let g_out = cam_to_srgb[1][0] * r_lin
                    + cam_to_srgb[1][1] * g_lin
                    + cam_to_srgb[1][2] * b_lin
                    + cam_to_srgb[1][3];
                let b_out = cam_to_srgb[2][0] * r_lin
                    + cam_to_srgb[2][1] * g_lin
                    + cam_to_srgb[2][2] * b_lin
                    + cam_to_srgb[2][3];

                [
                    (srgb_encode(r_out) * 65535.0).clamp(0.0, 65535.0) as u16,
                    (srgb_encode(g_out) * 65535.0).clamp(0.0, 65535.0) as u16,
                    (srgb_encode(b_out) * 65535.0).clamp(0.0, 65535.0) as u16,
                ]
            })
            .collect();

        Ok(RgbImageData {
            width,
            height,
            data: rgb_data,
            bits_per_sample: 16,
        })
    }
}

/// sRGB transfer curve for a linear value, clamped to [0, 1].
fn srgb_encode(v: f32) -> f32 {
    let v = v.clamp(0.0, 1.0);
    if v <= 0.003_130_8 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// As-shot channel gain relative to green. Invalid coefficients (zero or
/// non-finite green) collapse to 1.0.
fn wb_ratio(channel: f32, green: f32) -> f32 {
    let ratio = channel / green;
    if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 }
}

fn cfa_from_name(name: &str) -> CFA {
    match name {
        "BGGR" => CFA::BGGR,
        "GRBG" => CFA::GRBG,
        "GBRG" => CFA::GBRG,
        // "RGGB" and anything the bayer crate cannot represent
        _ => CFA::RGGB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_sensor(width: usize, height: usize) -> RawImageData {
        RawImageData {
            width,
            height,
            data: vec![20000u16; width * height],
            bits_per_sample: 16,
            cfa_name: "RGGB".to_string(),
            blacklevels: [0; 4],
            whitelevels: [u16::MAX; 4],
            wb_coeffs: [1.0, 1.0, 1.0, f32::NAN],
            // sRGB forward matrix: combined with XYZ_TO_SRGB this is identity
            cam_to_xyz: [
                [0.4124564, 0.3575761, 0.1804375, 0.0],
                [0.2126729, 0.7151522, 0.0721750, 0.0],
                [0.0193339, 0.1191920, 0.9503041, 0.0],
            ],
        }
    }

    #[test]
    fn demosaic_produces_interleaved_rgb() {
        let out = CpuDemosaic::new().process(&neutral_sensor(8, 8)).unwrap();
        assert_eq!(out.width, 8);
        assert_eq!(out.height, 8);
        assert_eq!(out.data.len(), 8 * 8 * 3);
        assert_eq!(out.bits_per_sample, 16);
    }

    #[test]
    fn flat_field_develops_to_near_neutral_gray() {
        let out = CpuDemosaic::new().process(&neutral_sensor(8, 8)).unwrap();
        let center = (4 * 8 + 4) * 3;
        let (r, g, b) = (out.data[center], out.data[center + 1], out.data[center + 2]);
        assert!(r.abs_diff(g) < 2048, "r={} g={}", r, g);
        assert!(g.abs_diff(b) < 2048, "g={} b={}", g, b);
    }

    #[test]
    fn unknown_cfa_pattern_falls_back_to_rggb() {
        let mut sensor = neutral_sensor(4, 4);
        sensor.cfa_name = "XTRANS".to_string();
        let out = CpuDemosaic::new().process(&sensor).unwrap();
        assert_eq!(out.data.len(), 4 * 4 * 3);
    }
}
