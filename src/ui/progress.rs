use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK_INTERVAL: Duration = Duration::from_millis(80);
const SPINNER_CHARS: &[&str] = &[
    "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
];

/// Spinner shown while a resolution runs.
///
/// Redraws on indicatif's own tick thread, so the caller can block on git
/// queries without freezing it. Cleared on drop.
pub struct ScanSpinner {
    progress_bar: Option<ProgressBar>,
}

impl ScanSpinner {
    /// Start a spinner with `message`; a hidden spinner when `enabled` is false
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return ScanSpinner { progress_bar: None };
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(SPINNER_CHARS)
            .template("{spinner:.magenta} {msg} {elapsed:.dim}")
        {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);

        ScanSpinner {
            progress_bar: Some(pb),
        }
    }

    pub fn stop(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_and_clear();
        }
    }
}

impl Drop for ScanSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}
