//! Conversion backends
//!
//! Two strategies turn a bundle into PNG bytes:
//! - [`IconConverter`] decodes a located legacy icon file ([`IcnsConverter`])
//! - [`IconRenderer`] asks the host for the bundle's effective icon ([`SystemRenderer`]),
//!   the only route for bundles whose icon lives in an asset catalog
//!
//! [`ConversionBackend::extract`] tries them in that order and accepts the first
//! output that decodes as a PNG.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, ImageReader};

use crate::domain::{ApplicationBundle, ExtractionMethod};
use crate::error::{AppIconsError, Result, conversion_failed, render_failed};
use crate::resolver::IconSource;

pub mod file;
pub mod render;

pub use file::IcnsConverter;
pub use render::SystemRenderer;

/// Edge length requested from the icon renderer
pub const RENDER_SIZE: u32 = 1024;

/// Converts a legacy icon file into PNG bytes
pub trait IconConverter {
    fn convert(&self, source: &Path) -> Result<Vec<u8>>;
}

/// Renders a bundle's effective icon into PNG bytes
pub trait IconRenderer {
    fn render(&self, bundle: &Path, size: u32) -> Result<Vec<u8>>;
}

/// PNG bytes produced for one bundle
#[derive(Debug, Clone)]
pub struct ExtractedIcon {
    pub png: Vec<u8>,
    pub method: ExtractionMethod,
    pub dimensions: (u32, u32),
}

/// Read width and height from PNG bytes, failing when they do not decode as PNG
pub fn png_dimensions(png: &[u8]) -> std::result::Result<(u32, u32), image::ImageError> {
    ImageReader::with_format(Cursor::new(png), ImageFormat::Png).into_dimensions()
}

/// File conversion first, rendered extraction as fallback
pub struct ConversionBackend<'a> {
    converter: &'a dyn IconConverter,
    renderer: &'a dyn IconRenderer,
    render_size: u32,
}

impl<'a> ConversionBackend<'a> {
    pub fn new(
        converter: &'a dyn IconConverter,
        renderer: &'a dyn IconRenderer,
        render_size: u32,
    ) -> Self {
        Self {
            converter,
            renderer,
            render_size,
        }
    }

    /// Produce a PNG for the bundle. `source` decides whether file conversion is
    /// attempted at all; rendering is always available as the second strategy.
    /// When both fail the render error is returned.
    pub fn extract(
        &self,
        bundle: &ApplicationBundle,
        source: &IconSource,
    ) -> Result<ExtractedIcon> {
        match source {
            IconSource::Found { path, step } => match self.try_file_conversion(path) {
                Ok(icon) => return Ok(icon),
                Err(e) => {
                    tracing::debug!(
                        bundle = %bundle.name,
                        ?step,
                        error = %e,
                        "file conversion failed"
                    );
                }
            },
            IconSource::NotFound => {
                tracing::debug!(
                    bundle = %bundle.name,
                    error = %AppIconsError::ResolutionAbsent,
                    "skipping file conversion"
                );
            }
        }

        self.try_render(&bundle.path)
    }

    fn try_file_conversion(&self, source: &Path) -> Result<ExtractedIcon> {
        let png = self.converter.convert(source)?;
        let dimensions =
            png_dimensions(&png).map_err(|e| conversion_failed(source.display(), e))?;
        Ok(ExtractedIcon {
            png,
            method: ExtractionMethod::FileConversion,
            dimensions,
        })
    }

    fn try_render(&self, bundle: &Path) -> Result<ExtractedIcon> {
        let png = self.renderer.render(bundle, self.render_size)?;
        let dimensions =
            png_dimensions(&png).map_err(|e| render_failed(bundle.display(), e))?;
        Ok(ExtractedIcon {
            png,
            method: ExtractionMethod::RenderExtraction,
            dimensions,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use crate::resolver::ResolutionStep;
    use std::fs;
    use tempfile::TempDir;

    /// Converter returning fixed bytes
    struct BytesConverter(Vec<u8>);

    impl IconConverter for BytesConverter {
        fn convert(&self, _source: &Path) -> Result<Vec<u8>> {
            Ok(self.0.clone())
        }
    }

    fn found(path: &Path) -> IconSource {
        IconSource::Found {
            path: path.to_path_buf(),
            step: ResolutionStep::Conventional,
        }
    }

    #[test]
    fn test_png_dimensions() {
        assert_eq!(png_dimensions(&png_bytes(16, 8)).unwrap(), (16, 8));
        assert!(png_dimensions(b"not a png").is_err());
    }

    #[test]
    fn test_file_conversion_wins_when_it_succeeds() {
        let converter = BytesConverter(png_bytes(32, 32));
        let renderer = FakeRenderer::producing(1024);
        let backend = ConversionBackend::new(&converter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path("/Applications/A.app");

        let icon = backend
            .extract(&bundle, &found(Path::new("/Applications/A.app/A.icns")))
            .unwrap();

        assert_eq!(icon.method, ExtractionMethod::FileConversion);
        assert_eq!(icon.dimensions, (32, 32));
        assert_eq!(renderer.calls.get(), 0);
    }

    #[test]
    fn test_not_found_goes_straight_to_render() {
        let converter = BytesConverter(png_bytes(32, 32));
        let renderer = FakeRenderer::producing(64);
        let backend = ConversionBackend::new(&converter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path("/Applications/C.app");

        let icon = backend.extract(&bundle, &IconSource::NotFound).unwrap();

        assert_eq!(icon.method, ExtractionMethod::RenderExtraction);
        assert_eq!(icon.dimensions, (64, 64));
        assert_eq!(renderer.calls.get(), 1);
    }

    #[test]
    fn test_conversion_failure_falls_back_to_render() {
        let renderer = FakeRenderer::producing(128);
        let backend = ConversionBackend::new(&FailingConverter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path("/Applications/B.app");

        let icon = backend
            .extract(&bundle, &found(Path::new("/Applications/B.app/B.icns")))
            .unwrap();

        assert_eq!(icon.method, ExtractionMethod::RenderExtraction);
    }

    #[test]
    fn test_undecodable_conversion_output_falls_back_to_render() {
        let converter = BytesConverter(b"garbage".to_vec());
        let renderer = FakeRenderer::producing(128);
        let backend = ConversionBackend::new(&converter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path("/Applications/B.app");

        let icon = backend
            .extract(&bundle, &found(Path::new("/Applications/B.app/B.icns")))
            .unwrap();

        assert_eq!(icon.method, ExtractionMethod::RenderExtraction);
    }

    #[test]
    fn test_both_strategies_failing_returns_render_error() {
        let renderer = FakeRenderer::failing();
        let backend = ConversionBackend::new(&FailingConverter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path("/Applications/Broken.app");

        let err = backend
            .extract(&bundle, &found(Path::new("/Applications/Broken.app/x.icns")))
            .unwrap_err();

        assert!(matches!(err, AppIconsError::RenderFailed { .. }));
    }

    #[test]
    fn test_real_icns_file_through_backend() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("AppIcon.icns");
        write_icns(&path, &[16, 32]);
        assert!(fs::metadata(&path).unwrap().len() > 0);

        let renderer = FakeRenderer::failing();
        let backend = ConversionBackend::new(&IcnsConverter, &renderer, RENDER_SIZE);
        let bundle = ApplicationBundle::from_path(temp.path().join("A.app"));

        let icon = backend.extract(&bundle, &found(&path)).unwrap();

        assert_eq!(icon.method, ExtractionMethod::FileConversion);
        assert_eq!(icon.dimensions, (32, 32));
    }
}
