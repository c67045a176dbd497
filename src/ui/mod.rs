//! UI/Progress presentation layer
//!
//! This module handles:
//! - Per-bundle progress lines and a progress bar while extracting
//! - Silent progress for tests and non-interactive embedding
//! - The final run summary ([`display`])
//!
//! All progress reporting goes through the [`ProgressReporter`] trait so the
//! extractor never prints directly.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::{ExtractionOutcome, ExtractionStatus};

pub mod display;

/// Progress reporter trait for an extraction run
pub trait ProgressReporter {
    /// Called once with the number of bundles about to be processed
    fn start(&mut self, total: usize);

    /// Update to show the bundle currently being processed
    fn bundle_started(&mut self, bundle_name: &str, current: usize, total: usize);

    /// Report the terminal state of one bundle
    fn bundle_finished(&mut self, outcome: &ExtractionOutcome);

    /// Finish the run
    fn finish(&mut self);
}

/// Console reporter printing one line per bundle, with an optional progress bar
pub struct ConsoleProgressReporter {
    show_bar: bool,
    bar: Option<ProgressBar>,
}

impl ConsoleProgressReporter {
    /// Create a reporter; the bar is only drawn when `show_bar` is set
    pub fn new(show_bar: bool) -> Self {
        Self {
            show_bar,
            bar: None,
        }
    }

    fn print_line(&self, line: &str) {
        match self.bar {
            Some(ref bar) => bar.println(line),
            None => println!("{line}"),
        }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn start(&mut self, total: usize) {
        if !self.show_bar || total == 0 {
            return;
        }
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn bundle_started(&mut self, bundle_name: &str, current: usize, total: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("({current}/{total}) {bundle_name}"));
        }
    }

    fn bundle_finished(&mut self, outcome: &ExtractionOutcome) {
        self.print_line(&format_outcome(outcome));
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[allow(dead_code)]
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: usize) {
        // No-op for silent mode
    }

    fn bundle_started(&mut self, _bundle_name: &str, _current: usize, _total: usize) {
        // No-op for silent mode
    }

    fn bundle_finished(&mut self, _outcome: &ExtractionOutcome) {
        // No-op for silent mode
    }

    fn finish(&mut self) {
        // No-op for silent mode
    }
}

/// One status line for a finished bundle
pub fn format_outcome(outcome: &ExtractionOutcome) -> String {
    let name = outcome.bundle().display_name();
    match outcome.status() {
        ExtractionStatus::Success => {
            let detail = match outcome.dimensions() {
                Some((w, h)) => format!("{w}x{h}, {}", outcome.method()),
                None => outcome.method().to_string(),
            };
            format!(
                "  {} {} {}",
                Style::new().green().apply_to("✓"),
                name,
                Style::new().dim().apply_to(format!("({detail})"))
            )
        }
        ExtractionStatus::Skipped => format!(
            "  {} {} {}",
            Style::new().yellow().apply_to("⊘"),
            name,
            Style::new().dim().apply_to("(already extracted)")
        ),
        ExtractionStatus::Failed => format!(
            "  {} {} {}",
            Style::new().red().apply_to("✗"),
            name,
            Style::new()
                .red()
                .apply_to(format!("({})", outcome.reason().unwrap_or("unknown failure")))
        ),
    }
}
