//! Types for demosaicing operations

/// RGB image data after demosaicing and development
#[derive(Debug, Clone)]
pub struct RgbImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u16>,
    /// Bits per sample of the developed raster
    pub bits_per_sample: u32,
}
