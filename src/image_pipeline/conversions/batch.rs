use std::path::{Path, PathBuf};

use tracing::{error, info, instrument, warn};

use crate::image_pipeline::conversions::image_to_png::ImageToPngPipeline;
use crate::image_pipeline::{
    decode::{GenericDecoder, ImageDecoder, RawLoaderDecoder},
    png::{ConversionConfig, PngWriter, StandardPngWriter},
};

/// Aggregate outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Number of inputs processed
    pub total: usize,
    /// Number of inputs that converted successfully
    pub success_count: usize,
    /// Output paths of the successes, in input order
    pub outputs: Vec<PathBuf>,
}

/// Terminal state of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// The input sequence was empty; nothing was attempted
    NothingSelected,
    /// Every item failed
    AllFailed,
    /// At least one item succeeded
    Completed,
}

impl BatchSummary {
    pub fn status(&self) -> BatchStatus {
        if self.total == 0 {
            BatchStatus::NothingSelected
        } else if self.success_count == 0 {
            BatchStatus::AllFailed
        } else {
            BatchStatus::Completed
        }
    }
}

/// Runs the conversion pipeline over an ordered list of inputs, one at a time.
///
/// Individual failures are logged and counted; the runner itself never fails.
/// The progress callback is invoked after every item, success or not, with the
/// number of completed items and the batch total.
pub struct BatchRunner<R: ImageDecoder, F: ImageDecoder, W: PngWriter> {
    pipeline: ImageToPngPipeline<R, F, W>,
    output_dir: PathBuf,
}

impl BatchRunner<RawLoaderDecoder, GenericDecoder, StandardPngWriter> {
    pub fn new(output_dir: PathBuf, config: ConversionConfig) -> Self {
        Self {
            pipeline: ImageToPngPipeline::new(config),
            output_dir,
        }
    }
}

impl<R: ImageDecoder, F: ImageDecoder, W: PngWriter> BatchRunner<R, F, W> {
    pub fn with_pipeline(pipeline: ImageToPngPipeline<R, F, W>, output_dir: PathBuf) -> Self {
        Self {
            pipeline,
            output_dir,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[instrument(skip(self, inputs, progress), fields(total = inputs.len()))]
    pub fn run<P>(&self, inputs: &[PathBuf], mut progress: P) -> BatchSummary
    where
        P: FnMut(usize, usize),
    {
        let total = inputs.len();
        let mut summary = BatchSummary {
            total,
            ..BatchSummary::default()
        };

        for (idx, input) in inputs.iter().enumerate() {
            match self.pipeline.convert_file(input, &self.output_dir) {
                Ok(output) => {
                    summary.success_count += 1;
                    summary.outputs.push(output);
                }
                Err(e) => {
                    warn!(input = %input.display(), "Conversion failed: {}", e);
                }
            }
            progress(idx + 1, total);
        }

        match summary.status() {
            BatchStatus::Completed => info!(
                "Converted {} of {} file(s) -> {}",
                summary.success_count,
                summary.total,
                self.output_dir.display()
            ),
            BatchStatus::AllFailed => {
                error!("Conversion failed for all {} file(s)", summary.total)
            }
            BatchStatus::NothingSelected => info!("No files to convert"),
        }

        summary
    }
}
