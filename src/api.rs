use image::DynamicImage;
use log::info;

use crate::errors::LinearizeResult;
use crate::linearizer::{Linearizer, LinearizerFactory};
use crate::utils::image_io;
use crate::utils::logger::Logger;

/// Main interface to the onedeefy library
pub struct Onedeefy {
    logger: Logger,
}

impl Onedeefy {
    /// Create a new Onedeefy instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a file recording every conversion
    ///
    /// # Returns
    /// An Onedeefy instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> LinearizeResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(Onedeefy { logger })
    }

    /// Names of the available algorithms, sorted
    pub fn algorithms() -> Vec<&'static str> {
        LinearizerFactory::list_names()
    }

    /// Transform an in-memory image into a single row
    ///
    /// # Arguments
    /// * `algorithm` - Name of the traversal order to use
    /// * `image` - Image to be transformed
    pub fn linearize(&self, algorithm: &str, image: &DynamicImage) -> LinearizeResult<DynamicImage> {
        let linearizer = LinearizerFactory::get_linearizer_by_name(algorithm)?;
        linearizer.linearize(image)
    }

    /// Transform an in-memory single-row image back into 2D
    ///
    /// # Arguments
    /// * `algorithm` - Name of the traversal order to use
    /// * `row` - Single-row image to be converted
    /// * `width` - Resulting image width
    /// * `height` - Resulting image height
    pub fn delinearize(&self, algorithm: &str, row: &DynamicImage,
                       width: u32, height: u32) -> LinearizeResult<DynamicImage> {
        let linearizer = LinearizerFactory::get_linearizer_by_name(algorithm)?;
        linearizer.delinearize(row, width, height)
    }

    /// Read an image, transform it into a single row and write the result
    pub fn linearize_file(&self, algorithm: &str, input_path: &str, output_path: &str) -> LinearizeResult<()> {
        let linearizer = LinearizerFactory::get_linearizer_by_name(algorithm)?;
        let image = image_io::read_image(input_path)?;

        let row = linearizer.linearize(&image)?;
        image_io::write_image(&row, output_path)?;

        self.record(linearizer, &format!(
            "linearize {} {}x{} -> {} {}x1",
            input_path, image.width(), image.height(), output_path, row.width()))
    }

    /// Read a single-row image, fold it into `width` x `height` and write the result
    pub fn delinearize_file(&self, algorithm: &str, input_path: &str,
                            width: u32, height: u32, output_path: &str) -> LinearizeResult<()> {
        let linearizer = LinearizerFactory::get_linearizer_by_name(algorithm)?;
        let row = image_io::read_image(input_path)?;

        let image = linearizer.delinearize(&row, width, height)?;
        image_io::write_image(&image, output_path)?;

        self.record(linearizer, &format!(
            "delinearize {} {}x{} -> {} {}x{}",
            input_path, row.width(), row.height(), output_path, width, height))
    }

    fn record(&self, linearizer: &dyn Linearizer, summary: &str) -> LinearizeResult<()> {
        info!("{} ({})", summary, linearizer.name());
        self.logger.log(&format!("[{}] {}", linearizer.name(), summary))?;
        Ok(())
    }
}
