//! PNG conversion configuration types

/// PNG compression levels supported by the encoder
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Minimal compression effort (fastest, largest file)
    Fast,
    /// Encoder default (balanced)
    Default,
    /// Highest compression effort (slowest, smallest file)
    Best,
}

/// PNG row filter strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngFilter {
    NoFilter,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Pick a filter per row
    Adaptive,
}

/// Configuration for image to PNG conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression level to use
    pub compression: PngCompression,
    /// Row filter strategy
    pub filter: PngFilter,
    /// Whether to validate image dimensions before encoding
    pub validate_dimensions: bool,
    /// Upper bound on either dimension when validation is enabled
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: PngCompression::Default,
            filter: PngFilter::Adaptive,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<PngCompression>,
    filter: Option<PngFilter>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn filter(mut self, filter: PngFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            filter: self.filter.unwrap_or(default.filter),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
