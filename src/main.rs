use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use getpng::cli::{self, Cli};
use getpng::image_pipeline::{
    BatchRunner, BatchStatus, ConversionConfig, default_output_dir, ensure_output_dir,
};
use getpng::{logger, reveal};

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    let inputs = if cli.inputs.is_empty() {
        cli::pick_input_files()
    } else {
        cli.inputs.clone()
    };
    if inputs.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }
    info!("Selected {} file(s)", inputs.len());

    let output_dir = cli
        .output
        .clone()
        .or_else(default_output_dir)
        .context("could not resolve an output directory")?;
    ensure_output_dir(&output_dir)
        .with_context(|| format!("could not create output directory {}", output_dir.display()))?;

    let config = ConversionConfig::builder()
        .compression(cli.compression())
        .build();
    let runner = BatchRunner::new(output_dir.clone(), config);

    let bar = if cli.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(inputs.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("Converting [{bar:40}] {pos}/{len}")
                .unwrap()
                .progress_chars("##-"),
        );
        bar
    };

    let summary = runner.run(&inputs, |completed, _total| {
        bar.set_position(completed as u64)
    });
    bar.finish_and_clear();

    match summary.status() {
        BatchStatus::Completed => {
            println!(
                "Done. Converted {} of {} file(s) -> {}",
                summary.success_count,
                summary.total,
                output_dir.display()
            );
            if cli.open {
                reveal::reveal_in_file_manager(&output_dir);
            }
        }
        BatchStatus::AllFailed => println!("Conversion failed for all files."),
        BatchStatus::NothingSelected => println!("Nothing selected."),
    }

    Ok(())
}
