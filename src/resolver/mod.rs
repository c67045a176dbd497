//! Icon source resolution
//!
//! Locates the legacy icon file of a bundle using a fixed fallback chain,
//! first match wins:
//!
//! 1. The file named by the manifest's `CFBundleIconFile` key, with `.icns`
//!    appended when missing.
//! 2. A conventional name: `AppIcon.icns`, `icon.icns`, `app.icns`, `Icon.icns`.
//! 3. Any `.icns` file directly inside `Contents/Resources`. Which one wins
//!    depends on filesystem enumeration order.
//!
//! All lookups are relative to the bundle's resources directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ApplicationBundle;
use crate::manifest::{ICON_FILE_KEY, ManifestReader};

/// Extension of legacy icon container files
pub const ICON_EXTENSION: &str = "icns";

/// Conventional icon file names, probed in order
pub const CONVENTIONAL_ICON_NAMES: [&str; 4] = ["AppIcon", "icon", "app", "Icon"];

/// Which step of the chain produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStep {
    Manifest,
    Conventional,
    AnyIcns,
}

/// Result of resolving a bundle's icon source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    Found { path: PathBuf, step: ResolutionStep },
    NotFound,
}

impl IconSource {
    #[allow(dead_code)]
    pub fn path(&self) -> Option<&Path> {
        match self {
            IconSource::Found { path, .. } => Some(path),
            IconSource::NotFound => None,
        }
    }
}

/// Resolves the primary icon asset of a bundle
pub struct IconSourceResolver<'a> {
    manifest: &'a dyn ManifestReader,
}

impl<'a> IconSourceResolver<'a> {
    pub fn new(manifest: &'a dyn ManifestReader) -> Self {
        Self { manifest }
    }

    pub fn resolve(&self, bundle: &ApplicationBundle) -> IconSource {
        let resources = bundle.resources_dir();

        let found = self
            .from_manifest(bundle, &resources)
            .map(|path| (path, ResolutionStep::Manifest))
            .or_else(|| {
                from_conventional_names(&resources).map(|p| (p, ResolutionStep::Conventional))
            })
            .or_else(|| first_icns_file(&resources).map(|p| (p, ResolutionStep::AnyIcns)));

        match found {
            Some((path, step)) => {
                tracing::debug!(
                    bundle = %bundle.name,
                    path = %path.display(),
                    ?step,
                    "icon source resolved"
                );
                IconSource::Found { path, step }
            }
            None => {
                tracing::debug!(bundle = %bundle.name, "no legacy icon file");
                IconSource::NotFound
            }
        }
    }

    fn from_manifest(&self, bundle: &ApplicationBundle, resources: &Path) -> Option<PathBuf> {
        let declared = self.manifest.read(bundle, ICON_FILE_KEY)?;
        let candidate = resources.join(with_icon_extension(&declared));
        candidate.is_file().then_some(candidate)
    }
}

/// Append `.icns` unless the name already ends with it
pub fn with_icon_extension(name: &str) -> String {
    let suffix = format!(".{ICON_EXTENSION}");
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

fn from_conventional_names(resources: &Path) -> Option<PathBuf> {
    CONVENTIONAL_ICON_NAMES
        .iter()
        .map(|stem| resources.join(format!("{stem}.{ICON_EXTENSION}")))
        .find(|candidate| candidate.is_file())
}

fn first_icns_file(resources: &Path) -> Option<PathBuf> {
    fs::read_dir(resources)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .find(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ICON_EXTENSION)
        })
}
