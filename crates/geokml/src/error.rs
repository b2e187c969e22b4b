//! Error types for geokml operations.
//!
//! This module provides the main error type [`KmlError`] which wraps the
//! conditions that can occur while building and writing documents.

use std::io;

use thiserror::Error;

use geokml_core::ValueError;

use crate::config::ConfigError;

/// The main error type for geokml operations.
///
/// Building a tree never fails once its values exist; errors come from
/// constructing values (an invalid radius, color or layout), from the output
/// sink, or from loading configuration.
#[derive(Debug, Error)]
pub enum KmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValueError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
