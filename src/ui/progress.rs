use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the dataset is read and the views are computed
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    pub fn start(&mut self, message: &str) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    pub fn finish_and_clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish_and_clear();
    }
}
