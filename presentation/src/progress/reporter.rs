//! Progress reporting while an inquiry is in flight

use crate::output::console::ConsoleFormatter;
use coaching_application::SubmissionNotifier;
use coaching_domain::Notice;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the request is pending
pub struct SubmissionReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SubmissionReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        let spinner = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(pb) = spinner {
            pb.finish_with_message(message);
        }
    }
}

impl Default for SubmissionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionNotifier for SubmissionReporter {
    fn on_pending(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Inquiry");
        pb.set_message("Sending...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(|e| e.into_inner()) = Some(pb);
    }

    fn on_success(&self, notice: &Notice) {
        self.finish(format!("{}", "sent".green()));
        print!("{}", ConsoleFormatter::format_notice(notice));
    }

    fn on_error(&self, notice: &Notice) {
        self.finish(format!("{}", "failed".red()));
        eprint!("{}", ConsoleFormatter::format_notice(notice));
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleSubmissionProgress;

impl SubmissionNotifier for SimpleSubmissionProgress {
    fn on_pending(&self) {
        println!("{} {}", "->".cyan(), "Sending inquiry...".bold());
    }

    fn on_success(&self, notice: &Notice) {
        print!("{}", ConsoleFormatter::format_notice(notice));
    }

    fn on_error(&self, notice: &Notice) {
        eprint!("{}", ConsoleFormatter::format_notice(notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_lifecycle_releases_spinner() {
        let reporter = SubmissionReporter::new();
        reporter.on_pending();
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_error(&Notice::failure());
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_settling_without_pending_is_harmless() {
        let reporter = SubmissionReporter::default();
        reporter.on_success(&Notice::confirmation());
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
