//! Linearization command
//!
//! Reads a 2D image, reorders its pixels into a single row and writes the
//! row to the output file.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{required_arg, trailing_args};
use crate::errors::{LinearizeError, LinearizeResult};
use crate::linearizer::{Linearizer, LinearizerFactory};
use crate::utils::image_io;
use crate::utils::logger::Logger;

/// Command for turning an image into a single row
pub struct LinearizeCommand<'a> {
    /// Traversal order to use
    linearizer: &'static dyn Linearizer,
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> LinearizeCommand<'a> {
    /// Create a new linearize command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new LinearizeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> LinearizeResult<Self> {
        let algorithm = required_arg(args, "algorithm")?;
        let linearizer = LinearizerFactory::get_linearizer_by_name(&algorithm)?;
        let input_file = required_arg(args, "input")?;

        let output_file = match trailing_args(args).as_slice() {
            [output] => output.clone(),
            _ => return Err(LinearizeError::InvalidArgument(
                "Linearization takes exactly one output file".to_string())),
        };

        Ok(LinearizeCommand {
            linearizer,
            input_file,
            output_file,
            logger,
        })
    }
}

impl<'a> Command for LinearizeCommand<'a> {
    fn execute(&self) -> LinearizeResult<()> {
        info!("Linearizing {} into {} using {}",
              self.input_file, self.output_file, self.linearizer.name());

        let image = image_io::read_image(&self.input_file)?;
        let row = self.linearizer.linearize(&image)?;
        image_io::write_image(&row, &self.output_file)?;

        info!("Linearization successful");
        self.logger.log(&format!("{}: {} ({}x{}) -> {} ({}x1)",
                                 self.linearizer.name(), self.input_file, image.width(), image.height(),
                                 self.output_file, row.width()))?;

        Ok(())
    }
}
