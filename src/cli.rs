//! Command-line definition
//!
//! Kept out of `main.rs` so the argument layout can be exercised by tests.
//! Positionals are all optional here: a wrong count is reported by the
//! command factory together with the usage text.

use clap::{Arg, ArgAction, Command as ClapCommand};

use crate::commands::usage;

/// Build the clap command for the `onedeefy` binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("onedeefy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert images to 1D and back using fixed pixel traversal orders")
        .after_help(usage())
        .arg(
            Arg::new("algorithm")
                .help("Traversal algorithm to use")
                .value_name("ALGORITHM")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .help("Input image file")
                .value_name("INPUT")
                .index(2),
        )
        .arg(
            Arg::new("rest")
                .help("<output image> to linearize, or <width> <height> <output image> to delinearize")
                .value_name("ARGS")
                .num_args(1..)
                .index(3),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List the available algorithms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML settings file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file instead of stderr")
                .value_name("FILE")
                .required(false),
        )
}
