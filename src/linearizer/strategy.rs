//! Linearizer strategy trait definition
//!
//! The trait only asks a strategy for its traversal order. Copying pixels
//! in either direction is shared code driven by that order, which keeps the
//! forward and inverse mappings exact inverses of each other.

use image::{DynamicImage, ImageBuffer, Pixel};
use log::debug;

use crate::errors::{LinearizeError, LinearizeResult};

/// Sequence of `(x, y)` cells visited by a strategy, one per row position
pub type Traversal = Box<dyn Iterator<Item = (u32, u32)> + Send>;

/// Applies `$op` to the typed buffer inside a `DynamicImage` and rewraps the
/// result in the same variant, so the pixel type always survives.
macro_rules! map_buffer {
    ($image:expr, |$buffer:ident| $op:expr) => {
        match $image {
            DynamicImage::ImageLuma8($buffer) => DynamicImage::ImageLuma8($op),
            DynamicImage::ImageLumaA8($buffer) => DynamicImage::ImageLumaA8($op),
            DynamicImage::ImageRgb8($buffer) => DynamicImage::ImageRgb8($op),
            DynamicImage::ImageRgba8($buffer) => DynamicImage::ImageRgba8($op),
            DynamicImage::ImageLuma16($buffer) => DynamicImage::ImageLuma16($op),
            DynamicImage::ImageLumaA16($buffer) => DynamicImage::ImageLumaA16($op),
            DynamicImage::ImageRgb16($buffer) => DynamicImage::ImageRgb16($op),
            DynamicImage::ImageRgba16($buffer) => DynamicImage::ImageRgba16($op),
            DynamicImage::ImageRgb32F($buffer) => DynamicImage::ImageRgb32F($op),
            DynamicImage::ImageRgba32F($buffer) => DynamicImage::ImageRgba32F($op),
            other => {
                return Err(LinearizeError::UnsupportedPixelType(format!("{:?}", other.color())))
            }
        }
    };
}

/// Strategy trait for turning a 2D image into a single row and back
pub trait Linearizer: Send + Sync {
    /// Get the name this strategy is registered under
    fn name(&self) -> &'static str;

    /// Get a one-line description of the traversal order
    fn description(&self) -> &'static str;

    /// Get the traversal order for a grid of the given size
    ///
    /// The returned iterator yields every cell of the grid exactly once,
    /// `width * height` items in total, and nothing for a zero-area grid.
    /// Grids with more cells than fit in a single row (see [`row_length`])
    /// also yield nothing, so no traversal state is ever sized past that.
    fn traversal(&self, width: u32, height: u32) -> Traversal;

    /// Transform a 2D image into a single row
    ///
    /// # Arguments
    /// * `image` - Image to be transformed
    ///
    /// # Returns
    /// An image with the same pixel type, width equal to the input's width
    /// times its height, and height equal to one
    fn linearize(&self, image: &DynamicImage) -> LinearizeResult<DynamicImage> {
        debug!("Linearizing {}x{} {:?} image using {}",
               image.width(), image.height(), image.color(), self.name());

        Ok(map_buffer!(image, |buffer| linearize_buffer(self, buffer)?))
    }

    /// Transform a single-row image into a 2D image with the given size
    ///
    /// # Arguments
    /// * `row` - Single-row image to be converted
    /// * `dest_width` - Resulting image width
    /// * `dest_height` - Resulting image height
    ///
    /// # Returns
    /// An image with the same pixel type and the requested size, or an error
    /// if the row length is not `dest_width * dest_height`
    fn delinearize(&self, row: &DynamicImage, dest_width: u32, dest_height: u32) -> LinearizeResult<DynamicImage> {
        debug!("Delinearizing {}-pixel {:?} row into {}x{} using {}",
               row.width(), row.color(), dest_width, dest_height, self.name());

        Ok(map_buffer!(row, |buffer| delinearize_buffer(self, buffer, dest_width, dest_height)?))
    }
}

/// Number of pixels in a `width` x `height` grid, as a row width
///
/// Fails when the grid holds more pixels than a single image row can.
pub fn row_length(width: u32, height: u32) -> LinearizeResult<u32> {
    width.checked_mul(height)
        .ok_or(LinearizeError::DimensionOverflow { width, height })
}

/// Number of cells a traversal of a `width` x `height` grid visits
///
/// Zero for grids that [`row_length`] rejects.
pub(crate) fn traversal_length(width: u32, height: u32) -> u64 {
    row_length(width, height).map(u64::from).unwrap_or(0)
}

/// Copy the pixels of a typed image into a single row, in traversal order
pub fn linearize_buffer<L, P>(linearizer: &L, image: &ImageBuffer<P, Vec<P::Subpixel>>)
    -> LinearizeResult<ImageBuffer<P, Vec<P::Subpixel>>>
where
    L: Linearizer + ?Sized,
    P: Pixel,
{
    let (width, height) = image.dimensions();
    let length = row_length(width, height)?;

    let mut row = ImageBuffer::new(length, 1);
    for (position, (x, y)) in linearizer.traversal(width, height).enumerate() {
        row.put_pixel(position as u32, 0, *image.get_pixel(x, y));
    }

    Ok(row)
}

/// Fold a typed single-row image into a `dest_width` x `dest_height` grid
///
/// The row length is checked against the destination size before any
/// pixel is copied.
pub fn delinearize_buffer<L, P>(linearizer: &L, row: &ImageBuffer<P, Vec<P::Subpixel>>,
                                dest_width: u32, dest_height: u32)
    -> LinearizeResult<ImageBuffer<P, Vec<P::Subpixel>>>
where
    L: Linearizer + ?Sized,
    P: Pixel,
{
    let expected = row_length(dest_width, dest_height)?;
    let (row_width, row_height) = row.dimensions();

    if expected > 0 && row_height != 1 {
        return Err(LinearizeError::NotARow(row_height));
    }
    if row_width != expected {
        return Err(LinearizeError::DimensionMismatch {
            expected: expected as u64,
            actual: row_width as u64,
        });
    }

    let mut output = ImageBuffer::new(dest_width, dest_height);
    for (position, (x, y)) in linearizer.traversal(dest_width, dest_height).enumerate() {
        output.put_pixel(x, y, *row.get_pixel(position as u32, 0));
    }

    Ok(output)
}
