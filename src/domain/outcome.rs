//! Per-bundle extraction outcome

use std::fmt;

use super::ApplicationBundle;

/// Terminal state of one bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    Success,
    Skipped,
    Failed,
}

/// Strategy that produced the PNG, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMethod {
    /// Decoded from a legacy `.icns` file inside the bundle
    FileConversion,
    /// Rendered by the host's icon facility
    RenderExtraction,
    None,
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExtractionMethod::FileConversion => "icns",
            ExtractionMethod::RenderExtraction => "rendered",
            ExtractionMethod::None => "none",
        };
        f.write_str(label)
    }
}

/// What happened to one bundle during a run. Built once through the
/// constructors below and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    bundle: ApplicationBundle,
    status: ExtractionStatus,
    method: ExtractionMethod,
    dimensions: Option<(u32, u32)>,
    reason: Option<String>,
}

impl ExtractionOutcome {
    pub fn success(
        bundle: ApplicationBundle,
        method: ExtractionMethod,
        dimensions: Option<(u32, u32)>,
    ) -> Self {
        Self {
            bundle,
            status: ExtractionStatus::Success,
            method,
            dimensions,
            reason: None,
        }
    }

    pub fn skipped(bundle: ApplicationBundle) -> Self {
        Self {
            bundle,
            status: ExtractionStatus::Skipped,
            method: ExtractionMethod::None,
            dimensions: None,
            reason: None,
        }
    }

    /// A failed outcome always carries a reason; an empty one is replaced
    /// with a generic description.
    pub fn failed(bundle: ApplicationBundle, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = if reason.trim().is_empty() {
            "unknown failure".to_string()
        } else {
            reason
        };
        Self {
            bundle,
            status: ExtractionStatus::Failed,
            method: ExtractionMethod::None,
            dimensions: None,
            reason: Some(reason),
        }
    }

    pub fn bundle(&self) -> &ApplicationBundle {
        &self.bundle
    }

    pub fn status(&self) -> ExtractionStatus {
        self.status
    }

    pub fn method(&self) -> ExtractionMethod {
        self.method
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
