//! Legacy icon file conversion
//!
//! An icns container holds several representations of the same icon. The
//! largest one that decodes is re-encoded as PNG.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use icns::{IconFamily, IconType};

use super::IconConverter;
use crate::error::{Result, conversion_failed};

/// Decodes `.icns` files with the `icns` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct IcnsConverter;

impl IconConverter for IcnsConverter {
    fn convert(&self, source: &Path) -> Result<Vec<u8>> {
        let len = fs::metadata(source)
            .map_err(|e| conversion_failed(source.display(), e))?
            .len();
        if len == 0 {
            return Err(conversion_failed(source.display(), "file is empty"));
        }

        let file = File::open(source).map_err(|e| conversion_failed(source.display(), e))?;
        let family = IconFamily::read(BufReader::new(file))
            .map_err(|e| conversion_failed(source.display(), e))?;

        let mut types: Vec<IconType> = family.available_icons().iter().copied().collect();
        types.sort_by_key(|t| std::cmp::Reverse(t.pixel_width() * t.pixel_height()));

        for icon_type in types {
            match family.get_icon_with_type(icon_type) {
                Ok(image) => {
                    let mut png = Vec::new();
                    image
                        .write_png(&mut png)
                        .map_err(|e| conversion_failed(source.display(), e))?;
                    return Ok(png);
                }
                Err(e) => {
                    tracing::debug!(
                        path = %source.display(),
                        ?icon_type,
                        error = %e,
                        "skipping undecodable representation"
                    );
                }
            }
        }

        Err(conversion_failed(
            source.display(),
            "no decodable image representation",
        ))
    }
}
