//! Run configuration

use std::path::PathBuf;

use crate::backend::RENDER_SIZE;
use crate::cli::Cli;
use crate::scanner;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "./app_icons";

/// Environment variable overriding the default output directory
pub const OUTPUT_DIR_ENV: &str = "APPICONS_OUTPUT_DIR";

/// Everything an extraction run needs to know
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub output_dir: PathBuf,
    pub roots: Vec<PathBuf>,
    pub render_size: u32,
}

impl ExtractConfig {
    pub fn new(output_dir: impl Into<PathBuf>, roots: Vec<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            roots,
            render_size: RENDER_SIZE,
        }
    }
}

impl From<&Cli> for ExtractConfig {
    fn from(cli: &Cli) -> Self {
        Self::new(cli.output_dir.clone(), scanner::default_roots())
    }
}
