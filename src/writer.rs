//! Idempotent PNG output
//!
//! Every bundle maps to `<output-dir>/<sanitized-name>.png`. An existing file at
//! that path counts as already extracted: the extractor checks
//! [`OutputWriter::existing`] before doing any conversion work, and
//! [`OutputWriter::write`] never replaces a file.
//!
//! Bytes are staged in a temporary file inside the output directory and only
//! moved to their final name once fully written, so a failed write never
//! leaves a partial PNG that a later run would mistake for a finished one.

use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;

use tempfile::{Builder, NamedTempFile};

use crate::domain::ApplicationBundle;
use crate::domain::bundle::BUNDLE_SUFFIX;
use crate::error::{Result, write_failed};

/// Extension of every output file
pub const OUTPUT_EXTENSION: &str = "png";

/// Turn a bundle name into an output file stem: drop the `.app` suffix and
/// replace path separators and colons with underscores.
pub fn sanitize(name: &str) -> String {
    name.strip_suffix(BUNDLE_SUFFIX)
        .unwrap_or(name)
        .chars()
        .map(|c| match c {
            '/' | ':' => '_',
            c => c,
        })
        .collect()
}

/// Outcome of a write attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

/// Writes PNG files into a single output directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Deterministic output path for a bundle
    pub fn destination(&self, bundle: &ApplicationBundle) -> PathBuf {
        self.output_dir
            .join(format!("{}.{OUTPUT_EXTENSION}", sanitize(&bundle.name)))
    }

    /// The output path, if a file is already there
    pub fn existing(&self, bundle: &ApplicationBundle) -> Option<PathBuf> {
        let dest = self.destination(bundle);
        dest.exists().then_some(dest)
    }

    /// Write `png` to the bundle's destination unless a file already exists there
    pub fn write(&self, bundle: &ApplicationBundle, png: &[u8]) -> Result<WriteResult> {
        self.write_with(self.destination(bundle), |staged| staged.write_all(png))
    }

    fn write_with<F>(&self, dest: PathBuf, fill: F) -> Result<WriteResult>
    where
        F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
    {
        let mut staged = self
            .staging_file()
            .map_err(|e| write_failed(dest.display(), e))?;
        fill(&mut staged).map_err(|e| write_failed(dest.display(), e))?;

        match staged.persist_noclobber(&dest) {
            Ok(_) => Ok(WriteResult::Written(dest)),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                Ok(WriteResult::AlreadyExists(dest))
            }
            Err(e) => Err(write_failed(dest.display(), e.error)),
        }
    }

    /// Hidden temporary file next to the outputs, readable like a normal file
    fn staging_file(&self) -> io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(".").suffix(".part");
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(Permissions::from_mode(0o644));
        }
        builder.tempfile_in(&self.output_dir)
    }
}
