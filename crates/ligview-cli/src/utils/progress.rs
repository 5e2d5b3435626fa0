use crate::fetch::FetchProgress;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 80;

/// Terminal progress display for a single download.
pub struct DownloadProgress {
    pb: ProgressBar,
}

impl DownloadProgress {
    pub fn new(hidden: bool) -> Self {
        let pb = ProgressBar::new(0).with_style(Self::spinner_style());
        if hidden {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        } else {
            pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }
        Self { pb }
    }

    pub fn update(&self, progress: FetchProgress) {
        match progress {
            FetchProgress::Connecting { url } => {
                self.pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                self.pb.set_message(format!("Connecting to {}", url));
            }
            FetchProgress::DownloadStarted { total_size } => {
                self.pb.disable_steady_tick();
                if let Some(size) = total_size {
                    self.pb.set_length(size);
                    self.pb.set_style(Self::bar_style());
                }
                self.pb.set_message("Downloading...");
            }
            FetchProgress::Downloading { downloaded } => {
                self.pb.set_position(downloaded);
                if self.pb.length().is_none_or(|len| len == 0) {
                    self.pb.tick();
                }
            }
        }
    }

    pub fn finish(&self, success: bool) {
        if success {
            self.pb.finish_with_message("✓ Download complete.");
        } else {
            self.pb.abandon_with_message("✗ Download failed.");
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
    }
}
