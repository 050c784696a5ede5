//! Delinearization command
//!
//! Reads a single-row image and folds it back into a 2D image of the
//! requested size.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::{required_arg, trailing_args};
use crate::errors::{LinearizeError, LinearizeResult};
use crate::linearizer::{Linearizer, LinearizerFactory};
use crate::utils::image_io;
use crate::utils::logger::Logger;

/// Command for folding a single row back into a 2D image
pub struct DelinearizeCommand<'a> {
    /// Traversal order to use
    linearizer: &'static dyn Linearizer,
    /// Path to the input file
    input_file: String,
    /// Width of the resulting image
    width: u32,
    /// Height of the resulting image
    height: u32,
    /// Path to the output file
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DelinearizeCommand<'a> {
    /// Create a new delinearize command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new DelinearizeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> LinearizeResult<Self> {
        let algorithm = required_arg(args, "algorithm")?;
        let linearizer = LinearizerFactory::get_linearizer_by_name(&algorithm)?;
        let input_file = required_arg(args, "input")?;

        let (width, height, output_file) = match trailing_args(args).as_slice() {
            [width, height, output] => (parse_dimension(width, "width")?,
                                        parse_dimension(height, "height")?,
                                        output.clone()),
            _ => return Err(LinearizeError::InvalidArgument(
                "Delinearization takes a width, a height and an output file".to_string())),
        };

        Ok(DelinearizeCommand {
            linearizer,
            input_file,
            width,
            height,
            output_file,
            logger,
        })
    }
}

/// Parse an output dimension given on the command line
fn parse_dimension(value: &str, what: &str) -> LinearizeResult<u32> {
    value.trim().parse::<u32>()
        .map_err(|_| LinearizeError::InvalidArgument(format!("Invalid output {}: {}", what, value)))
}

impl<'a> Command for DelinearizeCommand<'a> {
    fn execute(&self) -> LinearizeResult<()> {
        info!("Delinearizing {} into {} ({}x{}) using {}",
              self.input_file, self.output_file, self.width, self.height, self.linearizer.name());

        let row = image_io::read_image(&self.input_file)?;
        debug!("Source row is {}x{}", row.width(), row.height());

        let image = self.linearizer.delinearize(&row, self.width, self.height)?;
        image_io::write_image(&image, &self.output_file)?;

        info!("Delinearization successful");
        self.logger.log(&format!("{}: {} ({}x1) -> {} ({}x{})",
                                 self.linearizer.name(), self.input_file, row.width(),
                                 self.output_file, self.width, self.height))?;

        Ok(())
    }
}
