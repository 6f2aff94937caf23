//! Decoded sensor data types

/// Single-channel sensor raster plus the metadata needed to develop it.
#[derive(Debug, Clone)]
pub struct RawImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Raw pixel data (single channel, CFA sample pattern)
    pub data: Vec<u16>,
    /// Actual bits per sample from the sensor (e.g., 12, 14, or 16)
    pub bits_per_sample: u32,
    /// CFA pattern name as reported by the decoder (e.g., "RGGB")
    pub cfa_name: String,
    /// Per-channel black levels
    pub blacklevels: [u16; 4],
    /// Per-channel white levels
    pub whitelevels: [u16; 4],
    /// As-shot white balance coefficients
    pub wb_coeffs: [f32; 4],
    /// Camera space to XYZ matrix (3x4, offset in the last column)
    pub cam_to_xyz: [[f32; 4]; 3],
}
