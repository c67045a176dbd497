//! Rendered icon extraction
//!
//! Asks the host for the icon it would display for a bundle. This is the only
//! way to obtain icons that exist solely inside a compiled asset catalog.
//! On macOS the icon comes from `NSWorkspace`; other hosts have no such
//! facility and always report a render failure.

use std::path::Path;

use super::IconRenderer;
use crate::error::Result;

/// Host icon renderer
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRenderer;

impl IconRenderer for SystemRenderer {
    fn render(&self, bundle: &Path, size: u32) -> Result<Vec<u8>> {
        imp::render(bundle, size)
    }
}

#[cfg(target_os = "macos")]
mod imp {
    use std::ffi::c_void;
    use std::path::Path;

    use objc2::encode::{Encoding, RefEncode};
    use objc2::rc::autoreleasepool;
    use objc2::runtime::AnyObject;
    use objc2::{ClassType, msg_send};
    use objc2_app_kit::{NSBitmapImageRep, NSImage, NSWorkspace};
    use objc2_foundation::{NSData, NSPoint, NSRect, NSSize, NSString};

    use crate::error::{Result, render_failed};

    /// `NSBitmapImageFileTypePNG`
    const PNG_FILE_TYPE: usize = 4;

    /// Opaque `CGImage`
    #[repr(C)]
    struct CGImage {
        _private: [u8; 0],
    }

    unsafe impl RefEncode for CGImage {
        const ENCODING_REF: Encoding = Encoding::Pointer(&Encoding::Struct("CGImage", &[]));
    }

    pub(super) fn render(bundle: &Path, size: u32) -> Result<Vec<u8>> {
        autoreleasepool(|_| unsafe {
            let ns_path = NSString::from_str(&bundle.to_string_lossy());
            let workspace: *mut NSWorkspace = msg_send![NSWorkspace::class(), sharedWorkspace];
            let icon: *mut NSImage = msg_send![workspace, iconForFile: &*ns_path];
            if icon.is_null() {
                return Err(render_failed(bundle.display(), "no icon image for bundle"));
            }

            let side = f64::from(size);
            let target = NSSize {
                width: side,
                height: side,
            };
            let _: () = msg_send![icon, setSize: target];

            let png = match png_at_size(icon, target) {
                Some(png) => Some(png),
                None => {
                    tracing::debug!(
                        bundle = %bundle.display(),
                        size,
                        "falling back to largest representation"
                    );
                    png_from_largest_rep(icon)
                }
            };

            png.ok_or_else(|| render_failed(bundle.display(), "no usable image representation"))
        })
    }

    /// Rasterize the icon at exactly `target` points
    unsafe fn png_at_size(icon: *mut NSImage, target: NSSize) -> Option<Vec<u8>> {
        let mut rect = NSRect {
            origin: NSPoint { x: 0.0, y: 0.0 },
            size: target,
        };
        let nil: *mut AnyObject = std::ptr::null_mut();
        let cg_image: *mut CGImage =
            unsafe { msg_send![icon, CGImageForProposedRect: &mut rect, context: nil, hints: nil] };
        if cg_image.is_null() {
            return None;
        }

        let rep: *mut AnyObject = unsafe { msg_send![NSBitmapImageRep::class(), alloc] };
        let rep: *mut AnyObject = unsafe { msg_send![rep, initWithCGImage: cg_image] };
        if rep.is_null() {
            return None;
        }
        let png = unsafe { png_from_rep(rep) };
        let _: () = unsafe { msg_send![rep, release] };
        png
    }

    /// Encode the representation with the most pixels
    unsafe fn png_from_largest_rep(icon: *mut NSImage) -> Option<Vec<u8>> {
        let tiff: *mut NSData = unsafe { msg_send![icon, TIFFRepresentation] };
        if tiff.is_null() {
            return None;
        }
        let reps: *mut AnyObject =
            unsafe { msg_send![NSBitmapImageRep::class(), imageRepsWithData: tiff] };
        if reps.is_null() {
            return None;
        }

        let count: usize = unsafe { msg_send![reps, count] };
        let mut best: Option<(*mut AnyObject, isize)> = None;
        for i in 0..count {
            let rep: *mut AnyObject = unsafe { msg_send![reps, objectAtIndex: i] };
            let wide: isize = unsafe { msg_send![rep, pixelsWide] };
            let high: isize = unsafe { msg_send![rep, pixelsHigh] };
            let area = wide * high;
            if best.is_none_or(|(_, best_area)| area > best_area) {
                best = Some((rep, area));
            }
        }

        best.and_then(|(rep, _)| unsafe { png_from_rep(rep) })
    }

    unsafe fn png_from_rep(rep: *mut AnyObject) -> Option<Vec<u8>> {
        let nil: *mut AnyObject = std::ptr::null_mut();
        let data: *mut NSData =
            unsafe { msg_send![rep, representationUsingType: PNG_FILE_TYPE, properties: nil] };
        if data.is_null() {
            return None;
        }
        let length: usize = unsafe { msg_send![data, length] };
        let bytes: *const c_void = unsafe { msg_send![data, bytes] };
        if bytes.is_null() || length == 0 {
            return None;
        }
        Some(unsafe { std::slice::from_raw_parts(bytes.cast::<u8>(), length) }.to_vec())
    }
}

#[cfg(not(target_os = "macos"))]
mod imp {
    use std::path::Path;

    use crate::error::{Result, render_failed};

    pub(super) fn render(bundle: &Path, _size: u32) -> Result<Vec<u8>> {
        Err(render_failed(
            bundle.display(),
            "icon rendering is not supported on this platform",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_render_unsupported_off_macos() {
        let err = SystemRenderer
            .render(Path::new("/Applications/Safari.app"), 1024)
            .unwrap_err();
        assert!(err.to_string().contains("not supported"));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_render_system_bundle() {
        let png = SystemRenderer
            .render(Path::new("/System/Applications/Calculator.app"), 256)
            .unwrap();

        let (width, height) = crate::backend::png_dimensions(&png).unwrap();
        assert!(width >= 256 && height >= 256, "got {width}x{height}");
    }
}
