//! Run header and summary output

use std::path::{Path, PathBuf};

use console::Style;

use crate::summary::FinalReport;

/// Print where icons go and which roots are scanned
pub fn print_header(output_dir: &Path, roots: &[PathBuf], bundle_count: usize) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Output directory:"),
        output_dir.display()
    );
    println!("{}", Style::new().bold().apply_to("Scanning:"));
    for root in roots {
        println!("  - {}", root.display());
    }
    println!();
    println!("Found {bundle_count} application bundle(s)");
    println!();
}

/// Print the final counts, failures and output size
pub fn print_summary(report: &FinalReport, output_dir: &Path) {
    for line in summary_lines(report, output_dir) {
        println!("{line}");
    }
}

fn summary_lines(report: &FinalReport, output_dir: &Path) -> Vec<String> {
    let summary = &report.summary;
    let bold = Style::new().bold();
    let mut lines = vec![
        String::new(),
        format!("{}", bold.apply_to("Summary:")),
        format!("  Total:      {}", summary.total()),
        format!(
            "  Successful: {}",
            Style::new().green().apply_to(summary.successful())
        ),
        format!(
            "  Skipped:    {}",
            Style::new().yellow().apply_to(summary.skipped())
        ),
        format!("  Failed:     {}", Style::new().red().apply_to(summary.failed())),
    ];

    if summary.failed() > 0 {
        lines.push(String::new());
        lines.push(format!("{}", bold.apply_to("Failed bundles:")));
        for (name, reason) in summary.failed_list() {
            lines.push(format!("  - {name}: {reason}"));
        }
    }

    if summary.skipped() > 0 {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            bold.apply_to("Already extracted:"),
            summary.skipped_list().join(", ")
        ));
        lines.push(format!(
            "{} bundle(s) skipped, remove their PNG files to extract again",
            summary.skipped()
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "{} {}",
        bold.apply_to("Icons saved to:"),
        output_dir.display()
    ));
    lines.push(format!(
        "{} {}",
        bold.apply_to("Total size:"),
        report.formatted_size()
    ));
    lines
}
