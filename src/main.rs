//! appicons - application icon extractor
//!
//! Locates every installed application bundle, resolves its icon through a
//! layered fallback strategy and saves it as a high-resolution PNG. Bundles
//! whose PNG already exists are skipped, and one bundle failing never stops
//! the run.

use clap::Parser;

mod backend;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod extractor;
mod logging;
mod manifest;
mod resolver;
mod scanner;
mod summary;
mod ui;
mod writer;

use cli::Cli;
use config::ExtractConfig;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let config = ExtractConfig::from(&cli);

    match commands::extract::run(&config) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(summary::EXIT_FAILURE);
        }
    }
}
