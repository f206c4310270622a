//! Pixel dimensions of image files.
//!
//! The probe is the only boundary to the outside world. It is a blocking
//! call with no retry; its failures are adapted with [`Error::from_foreign`].

use std::path::Path;

use crate::errors::{Error, Result};
use crate::log::debug;

/// Reads the pixel width and height of an image file
pub trait ImageProbe {
    type Error: std::error::Error + Send + Sync + 'static;

    fn dimensions(&self, path: &Path) -> std::result::Result<(u32, u32), Self::Error>;
}

/// Probe built on [`image::image_dimensions`], which only decodes the header
#[cfg(feature = "image")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateProbe;

#[cfg(feature = "image")]
impl ImageProbe for ImageCrateProbe {
    type Error = ::image::ImageError;

    fn dimensions(&self, path: &Path) -> std::result::Result<(u32, u32), Self::Error> {
        ::image::image_dimensions(path)
    }
}

/// Check that `path` names a readable file, then ask `probe` for its size
pub(crate) fn probe_pixels<P: ImageProbe + ?Sized>(
    probe: &P,
    path: &Path,
    type_name: &'static str,
    operation: &'static str,
) -> Result<(f64, f64)> {
    if path.as_os_str().is_empty() || std::fs::File::open(path).is_err() {
        return Err(Error::unsuited(type_name, operation, "Unsuited path object 'file'")
            .with_context("object", path));
    }
    let (width, height) = probe
        .dimensions(path)
        .map_err(|err| Error::from_foreign(type_name, operation, err))?;
    debug!(path = %path.display(), width, height, "probed image");
    Ok((f64::from(width), f64::from(height)))
}
