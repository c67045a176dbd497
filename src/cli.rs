//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

use crate::config::{DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV};

/// appicons - application icon extractor
///
/// Extract the icon of every installed application bundle into a directory of PNG files.
#[derive(Parser, Debug)]
#[command(
    name = "appicons",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract application icons into a PNG library",
    long_about = "Scans /Applications, ~/Applications and /System/Applications for application \
                  bundles and saves each bundle's icon as a high-resolution PNG. Bundles whose \
                  PNG already exists are skipped, so re-running only retries what is missing.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appicons                 \x1b[90m# Write icons to ./app_icons\x1b[0m\n   \
                  appicons ~/icons         \x1b[90m# Write icons to ~/icons\x1b[0m\n\n\
                  Set APPICONS_LOG=debug to see how each icon was resolved.\n"
)]
pub struct Cli {
    /// Directory the PNG files are written to (created if missing)
    #[arg(value_name = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR, env = OUTPUT_DIR_ENV)]
    pub output_dir: PathBuf,
}
