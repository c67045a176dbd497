//! Common test utilities for appicons integration tests

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use icns::{IconFamily, Image, PixelFormat};
use tempfile::TempDir;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn appicons_cmd() -> Command {
    let mut cmd = Command::cargo_bin("appicons").unwrap();
    cmd.env_remove("APPICONS_OUTPUT_DIR").env("APPICONS_LOG", "off");
    cmd
}

/// A fake home directory whose `Applications` folder holds fixture bundles
pub struct TestHome {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestHome {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    pub fn applications(&self) -> PathBuf {
        self.path.join("Applications")
    }

    /// Command with `HOME` pointing at this directory
    pub fn cmd(&self) -> Command {
        let mut cmd = appicons_cmd();
        cmd.env("HOME", &self.path);
        cmd
    }

    /// Create `<home>/Applications/<name>.app` with an `Info.plist`
    #[allow(dead_code)]
    pub fn create_bundle(&self, name: &str, icon_file: Option<&str>) -> PathBuf {
        let bundle = self.applications().join(format!("{name}.app"));
        fs::create_dir_all(bundle.join("Contents/Resources"))
            .expect("Failed to create bundle directory");
        let entry = icon_file
            .map(|f| format!("<key>CFBundleIconFile</key>\n<string>{f}</string>\n"))
            .unwrap_or_default();
        let plist = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <plist version=\"1.0\">\n<dict>\n\
             <key>CFBundleName</key>\n<string>{name}</string>\n{entry}</dict>\n</plist>\n"
        );
        fs::write(bundle.join("Contents/Info.plist"), plist).expect("Failed to write Info.plist");
        bundle
    }
}

/// Write an icns file with one blank RGBA image per edge length
#[allow(dead_code)]
pub fn write_icns(path: &Path, sizes: &[u32]) {
    let mut family = IconFamily::new();
    for &size in sizes {
        family
            .add_icon(&Image::new(PixelFormat::RGBA, size, size))
            .expect("Failed to add icon");
    }
    let file = File::create(path).expect("Failed to create icns file");
    family
        .write(BufWriter::new(file))
        .expect("Failed to write icns file");
}

/// Width and height recorded in a PNG file's header
#[allow(dead_code)]
pub fn png_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("Failed to read PNG dimensions")
}
