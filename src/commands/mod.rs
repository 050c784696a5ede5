//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod linearize_command;
pub mod delinearize_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use linearize_command::LinearizeCommand;
pub use delinearize_command::DelinearizeCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::errors::{LinearizeError, LinearizeResult};
use crate::linearizer::LinearizerFactory;

/// Factory for creating command instances based on CLI arguments
///
/// A single argument after the input image (the output) selects
/// linearization, three (width, height, output) select delinearization.
pub struct OnedeefyCommandFactory;

impl OnedeefyCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        OnedeefyCommandFactory
    }
}

impl Default for OnedeefyCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for OnedeefyCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> LinearizeResult<Box<dyn Command + 'a>> {
        if args.get_flag("list") {
            return Ok(Box::new(ListCommand::new()));
        }

        let count = positional_count(args);
        if count < 3 {
            return Err(LinearizeError::InvalidArgument(format!(
                "Expected 3 or 5 arguments, got {}", count)));
        }

        // An unknown algorithm is reported before the argument count
        LinearizerFactory::get_linearizer_by_name(&required_arg(args, "algorithm")?)?;

        match count {
            3 => Ok(Box::new(LinearizeCommand::new(args, logger)?)),
            5 => Ok(Box::new(DelinearizeCommand::new(args, logger)?)),
            n => Err(LinearizeError::InvalidArgument(format!(
                "Expected 3 or 5 arguments, got {}", n))),
        }
    }
}

/// Usage text listing both invocation forms and the available algorithms
pub fn usage() -> String {
    let mut text = String::from("Usage:\n");
    text.push_str("\t<algorithm> <input image> <output image> - to encode the input image into 1D\n");
    text.push_str("\t<algorithm> <input image> <output width> <output height> <output image> - to decode the input image into 2D\n");
    text.push_str("Available algorithms:\n");
    for name in LinearizerFactory::list_names() {
        text.push_str(&format!("\t{}\n", name));
    }
    text
}

/// Get a required string argument
pub(crate) fn required_arg(args: &ArgMatches, name: &str) -> LinearizeResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| LinearizeError::InvalidArgument(format!("Missing {}", name)))
}

/// Count every positional argument, algorithm and input included
fn positional_count(args: &ArgMatches) -> usize {
    ["algorithm", "input"].iter()
        .filter(|&&name| args.get_one::<String>(name).is_some())
        .count()
        + trailing_args(args).len()
}

/// Get the positional arguments that follow the input image
pub(crate) fn trailing_args(args: &ArgMatches) -> Vec<String> {
    args.get_many::<String>("rest")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
