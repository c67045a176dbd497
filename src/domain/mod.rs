//! Domain models for appicons
//!
//! This module contains pure domain objects: the bundles discovered on the host
//! and the outcome recorded for each of them.

pub mod bundle;
pub mod outcome;

pub use bundle::ApplicationBundle;
pub use outcome::{ExtractionMethod, ExtractionOutcome, ExtractionStatus};
