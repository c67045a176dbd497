//! Per-bundle extraction pipeline
//!
//! Each bundle moves from pending to exactly one terminal state:
//!
//! - `Skipped` when its PNG already exists (checked before any other work)
//! - `Success` when file conversion or rendering produced a PNG that was written
//! - `Failed` when no icon could be produced or the PNG could not be written
//!
//! Bundles are processed one at a time and a failure never stops the run.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::backend::ConversionBackend;
use crate::domain::{ApplicationBundle, ExtractionOutcome, ExtractionStatus};
use crate::resolver::IconSourceResolver;
use crate::summary::RunSummary;
use crate::ui::ProgressReporter;
use crate::writer::{OutputWriter, WriteResult};

/// Reason recorded when neither strategy produced an icon
pub const NO_ICON_REASON: &str = "no icon found or extractable";

/// Drives resolution, conversion and output for a list of bundles
pub struct Extractor<'a> {
    resolver: IconSourceResolver<'a>,
    backend: ConversionBackend<'a>,
    writer: OutputWriter,
}

impl<'a> Extractor<'a> {
    pub fn new(
        resolver: IconSourceResolver<'a>,
        backend: ConversionBackend<'a>,
        writer: OutputWriter,
    ) -> Self {
        Self {
            resolver,
            backend,
            writer,
        }
    }

    /// Process every bundle in order and collect the outcomes
    pub fn run(
        &self,
        bundles: Vec<ApplicationBundle>,
        reporter: &mut dyn ProgressReporter,
    ) -> RunSummary {
        let total = bundles.len();
        let mut summary = RunSummary::new();
        let mut written: HashSet<PathBuf> = HashSet::new();

        reporter.start(total);
        for (index, bundle) in bundles.into_iter().enumerate() {
            reporter.bundle_started(&bundle.name, index + 1, total);

            let dest = self.writer.destination(&bundle);
            let outcome = self.process(bundle);
            match outcome.status() {
                ExtractionStatus::Success => {
                    written.insert(dest);
                }
                ExtractionStatus::Skipped if written.contains(&dest) => {
                    tracing::warn!(
                        bundle = %outcome.bundle().path.display(),
                        output = %dest.display(),
                        "output already written earlier in this run by a bundle with the same name"
                    );
                }
                _ => {}
            }

            reporter.bundle_finished(&outcome);
            summary.record(&outcome);
        }
        reporter.finish();

        summary
    }

    /// Take one bundle to its terminal state
    pub fn process(&self, bundle: ApplicationBundle) -> ExtractionOutcome {
        if let Some(existing) = self.writer.existing(&bundle) {
            tracing::debug!(
                bundle = %bundle.name,
                output = %existing.display(),
                "already extracted"
            );
            return ExtractionOutcome::skipped(bundle);
        }

        let source = self.resolver.resolve(&bundle);
        let icon = match self.backend.extract(&bundle, &source) {
            Ok(icon) => icon,
            Err(e) => {
                tracing::debug!(
                    bundle = %bundle.name,
                    error = %e,
                    "no strategy produced an icon"
                );
                return ExtractionOutcome::failed(bundle, NO_ICON_REASON);
            }
        };

        match self.writer.write(&bundle, &icon.png) {
            Ok(WriteResult::Written(_)) => {
                ExtractionOutcome::success(bundle, icon.method, Some(icon.dimensions))
            }
            Ok(WriteResult::AlreadyExists(_)) => ExtractionOutcome::skipped(bundle),
            Err(e) => ExtractionOutcome::failed(bundle, e.to_string()),
        }
    }
}
