//! Image file reading and writing
//!
//! Decoding and encoding are left to the `image` crate. The output format
//! follows the extension of the destination file.

use std::path::Path;
use image::{DynamicImage, ImageFormat};
use log::{debug, info};

use crate::errors::{LinearizeError, LinearizeResult};

/// Get the lowercase extension of a file name, if it has one
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|ext| ext.to_lowercase())
}

/// Determine the encoder to use for a destination file
pub fn output_format(file_name: &str) -> LinearizeResult<ImageFormat> {
    let extension = extension_of(file_name).ok_or_else(|| {
        LinearizeError::InvalidArgument(format!("Output file has no extension: {}", file_name))
    })?;

    ImageFormat::from_extension(&extension).ok_or_else(|| {
        LinearizeError::InvalidArgument(format!("Unsupported output format: {}", extension))
    })
}

/// Read an image from disk
pub fn read_image(path: &str) -> LinearizeResult<DynamicImage> {
    let image = image::open(path)?;
    info!("Read {}x{} {:?} image from {}", image.width(), image.height(), image.color(), path);
    Ok(image)
}

/// Write an image to disk in the format implied by its extension
///
/// The format is resolved before anything is written, so a bad extension
/// never leaves a partial file behind.
pub fn write_image(image: &DynamicImage, path: &str) -> LinearizeResult<()> {
    let format = output_format(path)?;
    debug!("Encoding {} as {:?}", path, format);

    image.save_with_format(path, format)?;
    info!("Wrote {}x{} image to {}", image.width(), image.height(), path);
    Ok(())
}
