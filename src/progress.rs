// Progress bar management using indicatif.
// Bars are optional: when disabled (debug mode) every constructor returns
// None and the pipeline runs without any terminal drawing.

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProgressManager {
    multi: Option<Arc<MultiProgress>>,
}

impl ProgressManager {
    // Create a new manager. If enabled=false, no bars are created.
    pub fn new(enabled: bool) -> Self {
        let multi = if enabled {
            Some(Arc::new(MultiProgress::new()))
        } else {
            None
        };
        Self { multi }
    }

    // Create a bar counting tables processed by the SQL generator.
    pub fn new_table_bar(&self, total: u64) -> Option<ProgressBar> {
        let mp = self.multi.as_ref()?;
        let bar = mp.add(ProgressBar::new(total));
        bar.set_style(count_style());
        bar.set_prefix("Seeding tables".to_string());
        Some(bar)
    }

    // Create a bar counting images processed by the thumbnail batch.
    pub fn new_image_bar(&self, total: u64) -> Option<ProgressBar> {
        let mp = self.multi.as_ref()?;
        let bar = mp.add(ProgressBar::new(total));
        bar.set_style(count_style());
        bar.set_prefix("Resizing images".to_string());
        Some(bar)
    }
}

fn count_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{prefix:20} {pos:>5}/{len:<5} [{bar:67}] {percent:>3}%",
    )
    .unwrap()
    .progress_chars("█ ")
}
