// Thumbnail batch: shrink every PNG in a directory to a maximum width,
// preserving aspect ratio, and save it under a `_thumbnail` suffix.
// Images already at or below the limit are saved as-is under the new name.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::GenericImageView;

use crate::logger;
use crate::progress::ProgressManager;

// Totals for the completion summary. Per-file failures are counted, not
// fatal: one broken PNG must not stop the rest of the batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchSummary {
    pub resized: usize,
    pub copied: usize,
    pub failed: usize,
}

// Target dimensions for an image of (width, height) constrained to
// max_width. Height is scaled proportionally and rounded down. Images
// already within the limit keep their size.
pub fn target_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }
    let scaled = (height as u64 * max_width as u64) / width as u64;
    (max_width, scaled as u32)
}

// Output filename for a source PNG: `page_001.png` -> `page_001_thumbnail.png`.
pub fn thumbnail_name(source: &Path) -> Option<String> {
    let stem = source.file_stem()?.to_str()?;
    let ext = source.extension()?.to_str()?;
    Some(format!("{}_thumbnail.{}", stem, ext))
}

// True for files with a .png extension, case-insensitive.
fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

// Collect the PNG files directly inside a directory, sorted by filename so
// the batch order (and therefore the log output) is deterministic.
fn list_pngs(input_dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
    let mut pngs = Vec::new();
    let entries = fs::read_dir(input_dir)
        .map_err(|e| format!("cannot read directory {}: {}", input_dir.display(), e))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_png(&path) {
            pngs.push(path);
        }
    }
    pngs.sort();
    Ok(pngs)
}

// Process every PNG in input_dir into output_dir. The output directory is
// created if needed; existing thumbnails are overwritten.
pub fn resize_directory(
    input_dir: &Path,
    output_dir: &Path,
    max_width: u32,
    progress: &ProgressManager,
) -> Result<BatchSummary, Box<dyn std::error::Error + Send + Sync>> {
    fs::create_dir_all(output_dir)
        .map_err(|e| format!("cannot create {}: {}", output_dir.display(), e))?;

    let pngs = list_pngs(input_dir)?;
    logger::info(&format!(
        "Resizing {} PNG file(s) from {} into {}",
        pngs.len(),
        input_dir.display(),
        output_dir.display()
    ));

    let bar = progress.new_image_bar(pngs.len() as u64);
    let mut summary = BatchSummary::default();

    for source in &pngs {
        match process_one(source, output_dir, max_width) {
            Ok(resized) => {
                if resized {
                    summary.resized += 1;
                } else {
                    summary.copied += 1;
                }
            }
            Err(e) => {
                logger::error(&format!("Error processing {}: {}", source.display(), e));
                summary.failed += 1;
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }

    if let Some(b) = &bar {
        b.finish();
    }
    Ok(summary)
}

// Resize (or plain re-save) a single PNG. Returns true if the image was
// actually scaled down.
fn process_one(
    source: &Path,
    output_dir: &Path,
    max_width: u32,
) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
    let name = thumbnail_name(source)
        .ok_or_else(|| format!("unusable file name: {}", source.display()))?;
    let output_path = output_dir.join(name);

    let img = image::open(source)?;
    let (width, height) = img.dimensions();
    let (target_w, target_h) = target_size(width, height, max_width);

    if (target_w, target_h) == (width, height) {
        img.save_with_format(&output_path, image::ImageFormat::Png)?;
        logger::debug(&format!(
            "already small, copied: {}",
            output_path.display()
        ));
        return Ok(false);
    }

    let resized = img.resize_exact(target_w, target_h, FilterType::Lanczos3);
    resized.save_with_format(&output_path, image::ImageFormat::Png)?;
    logger::debug(&format!(
        "resized {}x{} -> {}x{}: {}",
        width,
        height,
        target_w,
        target_h,
        output_path.display()
    ));
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_images_scale_to_max_width() {
        assert_eq!(target_size(600, 400, 300), (300, 200));
        assert_eq!(target_size(1000, 1500, 300), (300, 450));
    }

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(target_size(300, 200, 300), (300, 200));
        assert_eq!(target_size(120, 999, 300), (120, 999));
    }

    #[test]
    fn odd_ratios_round_height_down() {
        assert_eq!(target_size(301, 100, 300), (300, 99));
    }

    #[test]
    fn thumbnail_names_keep_stem_and_extension() {
        assert_eq!(
            thumbnail_name(Path::new("pages/page_001.png")).as_deref(),
            Some("page_001_thumbnail.png")
        );
        assert_eq!(
            thumbnail_name(Path::new("COVER.PNG")).as_deref(),
            Some("COVER_thumbnail.PNG")
        );
    }

    #[test]
    fn png_filter_is_case_insensitive() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("a.PNG")));
        assert!(!is_png(Path::new("a.jpg")));
        assert!(!is_png(Path::new("png")));
    }
}
