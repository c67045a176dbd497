//! Run-level accounting of extraction outcomes

use std::path::Path;

use walkdir::WalkDir;

use crate::domain::{ExtractionOutcome, ExtractionStatus};
use crate::writer::OUTPUT_EXTENSION;

/// Process exit status when every bundle succeeded or was skipped
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status when at least one bundle failed
pub const EXIT_FAILURE: i32 = 1;

/// Counters and name lists of one run, in processing order.
///
/// `total == successful + skipped + failed` holds after every [`RunSummary::record`].
#[derive(Debug, Default)]
pub struct RunSummary {
    total: usize,
    successful: usize,
    skipped: usize,
    failed: usize,
    /// Bundle name and failure reason
    failed_list: Vec<(String, String)>,
    skipped_list: Vec<String>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &ExtractionOutcome) {
        self.total += 1;
        let name = outcome.bundle().name.clone();
        match outcome.status() {
            ExtractionStatus::Success => self.successful += 1,
            ExtractionStatus::Skipped => {
                self.skipped += 1;
                self.skipped_list.push(name);
            }
            ExtractionStatus::Failed => {
                self.failed += 1;
                let reason = outcome.reason().unwrap_or("unknown failure").to_string();
                self.failed_list.push((name, reason));
            }
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn successful(&self) -> usize {
        self.successful
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Failed bundles with their reasons, in processing order
    pub fn failed_list(&self) -> &[(String, String)] {
        &self.failed_list
    }

    /// Names of skipped bundles, in processing order
    pub fn skipped_list(&self) -> &[String] {
        &self.skipped_list
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }

    /// Close the run, measuring the PNG files in `output_dir`
    pub fn finalize(self, output_dir: &Path) -> FinalReport {
        let output_size = png_size(output_dir);
        FinalReport {
            summary: self,
            output_size,
        }
    }
}

/// A finished run
#[derive(Debug)]
pub struct FinalReport {
    pub summary: RunSummary,
    /// Combined size in bytes of every PNG in the output directory
    pub output_size: u64,
}

impl FinalReport {
    pub fn exit_code(&self) -> i32 {
        self.summary.exit_code()
    }

    /// Format total size as human-readable string
    pub fn formatted_size(&self) -> String {
        let size = self.output_size as f64;
        if size < 1024.0 {
            format!("{} B", self.output_size)
        } else if size < 1024.0 * 1024.0 {
            format!("{:.1} KB", size / 1024.0)
        } else if size < 1024.0 * 1024.0 * 1024.0 {
            format!("{:.1} MB", size / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", size / (1024.0 * 1024.0 * 1024.0))
        }
    }
}

/// Best-effort size of the PNG files directly inside `dir`; unreadable entries count as zero
fn png_size(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path().extension().and_then(|x| x.to_str()) == Some(OUTPUT_EXTENSION)
        })
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
