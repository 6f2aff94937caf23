use std::path::PathBuf;

use clap::Parser;

use crate::image_pipeline::PngCompression;

#[derive(Parser, Debug)]
#[command(
    name = "getpng",
    version,
    about = "Convert images and camera RAW files to PNG"
)]
pub struct Cli {
    /// Input image or RAW files; a native file picker opens when omitted
    pub inputs: Vec<PathBuf>,

    /// Output directory (default: the download directory plus "getpng")
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// PNG compression level
    #[arg(long, default_value = "default", value_parser = ["fast", "default", "best"])]
    pub compression: String,

    /// Reveal the output directory in the system file manager when done
    #[arg(long, default_value_t = false)]
    pub open: bool,

    /// Disable the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl Cli {
    pub fn compression(&self) -> PngCompression {
        match self.compression.as_str() {
            "fast" => PngCompression::Fast,
            "best" => PngCompression::Best,
            _ => PngCompression::Default,
        }
    }
}

/// Opens the native multi-file picker. Cancelling it yields an empty list,
/// which callers treat as "nothing selected".
pub fn pick_input_files() -> Vec<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select images")
        .add_filter(
            "Images",
            &["jpg", "jpeg", "png", "bmp", "tif", "tiff", "webp", "gif"],
        )
        .add_filter("RAW", &["dng", "nef", "cr2", "arw", "raf", "rw2"])
        .add_filter("All files", &["*"])
        .pick_files()
        .unwrap_or_default()
}
