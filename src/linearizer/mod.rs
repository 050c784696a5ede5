//! Pixel traversal strategies
//!
//! This module implements strategies that reorder the pixels of a 2D image
//! into a single row and back. Every strategy defines one traversal order
//! which both directions walk identically, so `delinearize` always undoes
//! `linearize`.

mod strategy;
mod lines;
mod horizontal_zigzag;
mod zigzag;
mod spiral;
mod factory;
mod tests;

pub use strategy::{Linearizer, Traversal, linearize_buffer, delinearize_buffer, row_length};
pub use lines::Lines;
pub use horizontal_zigzag::HorizontalZigZag;
pub use zigzag::ZigZag;
pub use spiral::Spiral;
pub use factory::LinearizerFactory;
