//! Application bundle domain type

use std::path::{Path, PathBuf};

/// Directory suffix that marks an application bundle
pub const BUNDLE_SUFFIX: &str = ".app";

/// An application bundle discovered under one of the scan roots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationBundle {
    /// Absolute path to the bundle directory
    pub path: PathBuf,
    /// Last path segment, e.g. `Safari.app`
    pub name: String,
}

impl ApplicationBundle {
    /// Create a bundle from its directory path, naming it after the last path segment
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self { path, name }
    }

    /// `Contents/Info.plist`
    pub fn manifest_path(&self) -> PathBuf {
        self.path.join("Contents").join("Info.plist")
    }

    /// `Contents/Resources`
    pub fn resources_dir(&self) -> PathBuf {
        self.path.join("Contents").join("Resources")
    }

    /// Name without the bundle suffix, for display
    pub fn display_name(&self) -> &str {
        self.name.strip_suffix(BUNDLE_SUFFIX).unwrap_or(&self.name)
    }
}

/// Whether a directory entry name follows the bundle naming convention
pub fn has_bundle_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.len() > BUNDLE_SUFFIX.len() && n.ends_with(BUNDLE_SUFFIX))
}
