//! Bundle manifest (`Contents/Info.plist`) lookups

use std::path::Path;

use plist::Value as PlistValue;

use crate::domain::ApplicationBundle;

/// Manifest key naming the bundle's legacy icon file
pub const ICON_FILE_KEY: &str = "CFBundleIconFile";

/// Reads string values from a bundle's manifest.
///
/// A missing, unreadable or unparseable manifest is "no value", never an error.
pub trait ManifestReader {
    fn read(&self, bundle: &ApplicationBundle, key: &str) -> Option<String>;
}

/// Manifest reader backed by the `plist` crate (XML and binary formats)
#[derive(Debug, Default, Clone, Copy)]
pub struct PlistManifest;

impl ManifestReader for PlistManifest {
    fn read(&self, bundle: &ApplicationBundle, key: &str) -> Option<String> {
        read_string(&bundle.manifest_path(), key)
    }
}

fn read_string(plist_path: &Path, key: &str) -> Option<String> {
    let value = match PlistValue::from_file(plist_path) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(path = %plist_path.display(), error = %e, "manifest unreadable");
            return None;
        }
    };
    let dict = value.into_dictionary()?;
    dict.get(key)
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
