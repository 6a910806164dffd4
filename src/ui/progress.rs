use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::consts::{PROGRESS_MIN_DEGREE, PROGRESS_STRIDE};

pub mod templates {
    pub const GENERATE: &str =
        "GEN  [{bar:30.cyan}] {percent}% ({pos}/{len} steps) {msg}";
}

/// Progress bar over register steps, hidden for short sequences.
pub struct StepProgress {
    bar: Option<ProgressBar>,
}

impl StepProgress {
    pub fn new(degree: u32, total_steps: u64, message: &str) -> Self {
        let bar = (degree >= PROGRESS_MIN_DEGREE).then(|| {
            let pb = ProgressBar::new(total_steps);
            if let Ok(style) = ProgressStyle::default_bar().template(templates::GENERATE) {
                pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏ "));
            }
            pb.set_message(message.to_string());
            pb
        });
        Self { bar }
    }

    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Called once per step; only touches the bar every `PROGRESS_STRIDE` steps.
    pub fn on_step(&self, step: u64) {
        if let Some(pb) = &self.bar {
            if step % PROGRESS_STRIDE == 0 {
                pb.set_position(step);
            }
        }
    }

    pub fn finish(&self, message: &str) {
        if let Some(pb) = &self.bar {
            pb.finish_with_message(message.to_string());
        }
    }
}
