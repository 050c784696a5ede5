//! Registry of the available linearizers

use lazy_static::lazy_static;
use log::debug;

use crate::errors::{LinearizeError, LinearizeResult};
use super::strategy::Linearizer;
use super::lines::Lines;
use super::horizontal_zigzag::HorizontalZigZag;
use super::zigzag::ZigZag;
use super::spiral::Spiral;

lazy_static! {
    /// Every strategy shipped with the crate, built once
    static ref LINEARIZERS: Vec<Box<dyn Linearizer>> = vec![
        Box::new(Lines),
        Box::new(HorizontalZigZag),
        Box::new(ZigZag),
        Box::new(Spiral),
    ];
}

/// Factory for looking up linearizers by name
pub struct LinearizerFactory;

impl LinearizerFactory {
    /// Find the linearizer registered under `name`, ignoring case
    pub fn lookup(name: &str) -> Option<&'static dyn Linearizer> {
        let registry: &'static [Box<dyn Linearizer>] = &LINEARIZERS;
        registry.iter()
            .find(|linearizer| linearizer.name().eq_ignore_ascii_case(name.trim()))
            .map(|linearizer| linearizer.as_ref())
    }

    /// Get a linearizer by name
    ///
    /// # Returns
    /// The linearizer, or `UnknownAlgorithm` if nothing is registered under
    /// that name
    pub fn get_linearizer_by_name(name: &str) -> LinearizeResult<&'static dyn Linearizer> {
        match Self::lookup(name) {
            Some(linearizer) => {
                debug!("Resolved algorithm '{}' to {}", name, linearizer.name());
                Ok(linearizer)
            }
            None => Err(LinearizeError::UnknownAlgorithm(name.to_string())),
        }
    }

    /// Get the names of all registered linearizers, sorted
    pub fn list_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::get_available_linearizers()
            .into_iter()
            .map(|linearizer| linearizer.name())
            .collect();
        names.sort_unstable();
        names
    }

    /// Get all registered linearizers, in registration order
    pub fn get_available_linearizers() -> Vec<&'static dyn Linearizer> {
        let registry: &'static [Box<dyn Linearizer>] = &LINEARIZERS;
        registry.iter().map(|linearizer| linearizer.as_ref()).collect()
    }
}
