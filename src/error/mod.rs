//! Error types and handling for appicons
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Per-bundle errors ([`AppIconsError::ResolutionAbsent`], [`AppIconsError::ConversionFailed`],
//! [`AppIconsError::RenderFailed`], [`AppIconsError::WriteFailed`]) never abort a run: the
//! extractor records them into the bundle's outcome and moves on. Only run-level errors
//! such as [`AppIconsError::OutputDirFailed`] reach `main`.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for appicons operations
#[derive(Error, Diagnostic, Debug)]
pub enum AppIconsError {
    // Resolution errors
    #[error("No legacy icon file found in bundle")]
    #[diagnostic(code(appicons::resolve::absent))]
    ResolutionAbsent,

    // Conversion errors
    #[error("Failed to convert icon file {path}: {reason}")]
    #[diagnostic(code(appicons::convert::failed))]
    ConversionFailed { path: String, reason: String },

    #[error("Failed to render icon for {path}: {reason}")]
    #[diagnostic(code(appicons::render::failed))]
    RenderFailed { path: String, reason: String },

    // Output errors
    #[error("Failed to write {path}: {reason}")]
    #[diagnostic(code(appicons::write::failed))]
    WriteFailed { path: String, reason: String },

    #[error("Failed to create output directory {path}: {reason}")]
    #[diagnostic(
        code(appicons::output::create_failed),
        help("Check that the parent directory exists and is writable")
    )]
    OutputDirFailed { path: String, reason: String },
}

/// Creates a conversion error for the icon file at `path`
pub fn conversion_failed(path: impl std::fmt::Display, reason: impl ToString) -> AppIconsError {
    AppIconsError::ConversionFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a render error for the bundle at `path`
pub fn render_failed(path: impl std::fmt::Display, reason: impl ToString) -> AppIconsError {
    AppIconsError::RenderFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write error for the destination at `path`
pub fn write_failed(path: impl std::fmt::Display, reason: impl ToString) -> AppIconsError {
    AppIconsError::WriteFailed {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AppIconsError>;
