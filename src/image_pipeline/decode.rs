//! Decode capabilities
//!
//! Two capabilities with disjoint coverage: a RAW decoder for camera sensor
//! formats and a generic decoder for ordinary raster formats. The conversion
//! pipeline tries them in that order.

mod decoder;
mod generic_decoder;
mod rawloader_decoder;
pub mod types;

pub use decoder::ImageDecoder;
pub use generic_decoder::GenericDecoder;
pub use rawloader_decoder::RawLoaderDecoder;
pub use types::RawImageData;
