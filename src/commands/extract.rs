//! Extract command implementation
//!
//! Scans the application roots, extracts one PNG per bundle into the output
//! directory and prints a summary. Returns the process exit status.

use std::fs;

use crate::backend::{
    ConversionBackend, IcnsConverter, IconConverter, IconRenderer, SystemRenderer,
};
use crate::config::ExtractConfig;
use crate::error::{AppIconsError, Result};
use crate::extractor::Extractor;
use crate::manifest::PlistManifest;
use crate::resolver::IconSourceResolver;
use crate::scanner::BundleScanner;
use crate::ui::display::{print_header, print_summary};
use crate::ui::{ConsoleProgressReporter, ProgressReporter};
use crate::writer::OutputWriter;

/// Run the extraction with the host's backends
pub fn run(config: &ExtractConfig) -> Result<i32> {
    let show_bar = console::Term::stdout().is_term();
    let mut reporter = ConsoleProgressReporter::new(show_bar);
    run_with(config, &IcnsConverter, &SystemRenderer, &mut reporter)
}

fn run_with(
    config: &ExtractConfig,
    converter: &dyn IconConverter,
    renderer: &dyn IconRenderer,
    reporter: &mut dyn ProgressReporter,
) -> Result<i32> {
    fs::create_dir_all(&config.output_dir).map_err(|e| AppIconsError::OutputDirFailed {
        path: config.output_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let scanner = BundleScanner::new(config.roots.clone());
    let bundles = scanner.scan();
    print_header(&config.output_dir, scanner.roots(), bundles.len());

    let manifest = PlistManifest;
    let extractor = Extractor::new(
        IconSourceResolver::new(&manifest),
        ConversionBackend::new(converter, renderer, config.render_size),
        OutputWriter::new(&config.output_dir),
    );
    let summary = extractor.run(bundles, reporter);

    let report = summary.finalize(&config.output_dir);
    print_summary(&report, &config.output_dir);

    Ok(report.exit_code())
}
