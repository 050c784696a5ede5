//! Utility modules for common functionality
//!
//! This module provides the logger and image file helpers used throughout the application.

pub mod logger;
pub mod image_io;
