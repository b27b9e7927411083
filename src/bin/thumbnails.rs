// make-thumbnails: shrink every PNG in a directory to thumbnail size.
// Output files carry a `_thumbnail` suffix; reruns overwrite them.

use std::path::PathBuf;

use clap::Parser;

use d1_seed_tools::logger;
use d1_seed_tools::progress::ProgressManager;
use d1_seed_tools::resize;

// Command-line flags.
#[derive(Parser, Debug)]
#[command(author, version, about = "Batch-resize PNG images into thumbnails")]
struct Args {
    /// Directory holding the original PNG images.
    #[arg(long)]
    input_dir: PathBuf,

    /// Directory thumbnails are written to (created if missing).
    #[arg(long)]
    output_dir: PathBuf,

    /// Maximum thumbnail width; height scales to keep the aspect ratio.
    #[arg(long, default_value_t = 300)]
    max_width: u32,

    /// Enable debug logging (disables the progress bar).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    logger::set_debug(args.debug);
    logger::info("Starting resize job...");
    logger::info(&format!("Input Directory: {}", args.input_dir.display()));
    logger::info(&format!("Output Directory: {}", args.output_dir.display()));

    // Progress bar is disabled in debug mode to avoid mangled output.
    let progress = ProgressManager::new(!args.debug);

    let summary = resize::resize_directory(
        &args.input_dir,
        &args.output_dir,
        args.max_width,
        &progress,
    )?;

    logger::info(&format!(
        "Image processing complete: {} resized, {} copied, {} failed.",
        summary.resized, summary.copied, summary.failed
    ));
    Ok(())
}
