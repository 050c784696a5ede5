pub mod errors;
pub mod config;
pub mod linearizer;
pub mod utils;
pub mod commands;
pub mod cli;
pub mod api;

pub use crate::api::Onedeefy;

pub use errors::{LinearizeError, LinearizeResult};
pub use linearizer::{Linearizer, LinearizerFactory, Lines, HorizontalZigZag, ZigZag, Spiral};
pub use config::Settings;
