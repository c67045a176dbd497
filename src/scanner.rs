//! Application bundle discovery
//!
//! Lists `*.app` directories directly inside each scan root. Roots are
//! visited in the order given; entries within one root come back in
//! filesystem enumeration order, which is not sorted and is only stable
//! per machine. The same bundle name under two roots is reported twice.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::ApplicationBundle;
use crate::domain::bundle::has_bundle_suffix;

/// System-wide applications directory
pub const APPLICATIONS_DIR: &str = "/Applications";

/// Built-in applications shipped with the OS
pub const SYSTEM_APPLICATIONS_DIR: &str = "/System/Applications";

/// Default scan roots: `/Applications`, `~/Applications`, `/System/Applications`.
///
/// The per-user root is left out when no home directory can be determined.
pub fn default_roots() -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(APPLICATIONS_DIR)];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Applications"));
    }
    roots.push(PathBuf::from(SYSTEM_APPLICATIONS_DIR));
    roots
}

/// Enumerates application bundles under a fixed list of roots
#[derive(Debug, Clone)]
pub struct BundleScanner {
    roots: Vec<PathBuf>,
}

impl BundleScanner {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Scan every root. Missing roots are skipped silently.
    pub fn scan(&self) -> Vec<ApplicationBundle> {
        self.roots.iter().flat_map(|root| scan_root(root)).collect()
    }
}

fn scan_root(root: &Path) -> Vec<ApplicationBundle> {
    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "scan root does not exist, skipping");
        return Vec::new();
    }

    let bundles: Vec<ApplicationBundle> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && has_bundle_suffix(e.path()))
        .map(|e| ApplicationBundle::from_path(e.path()))
        .collect();

    tracing::debug!(root = %root.display(), count = bundles.len(), "scanned root");
    bundles
}
