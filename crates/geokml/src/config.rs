//! Configuration types for geokml document generation.
//!
//! This module provides configuration structures that control circle
//! discretization and document output. All types implement
//! [`serde::Deserialize`] and are normally loaded from a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining geometry and document settings.
//! - [`GeometryConfig`] - Selects the [`Sphere`] and the circle tolerance.
//! - [`DocumentConfig`] - Controls the XML declaration and the `gx` namespace.
//!
//! # File Format
//!
//! ```toml
//! [geometry]
//! sphere = "wgs84"      # wgs84 | fai | moon | mars
//! max_error = 1.0       # meters
//!
//! [document]
//! xml_declaration = true
//! extension_namespace = "auto"   # auto | always
//! ```
//!
//! # Example
//!
//! ```
//! # use geokml::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.geometry().max_error(), 1.0);
//! assert!(config.document().xml_declaration());
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use geokml_core::sphere::{Sphere, SphereName};

use crate::{document::ExtensionNamespace, error::KmlError};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level configuration combining geometry and document settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geometry configuration section.
    #[serde(default)]
    geometry: GeometryConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Sphere and circle tolerance settings.
    /// * `document` - Output settings.
    pub fn new(geometry: GeometryConfig, document: DocumentConfig) -> Self {
        Self { geometry, document }
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File doesn't exist
    /// - File cannot be read
    /// - TOML parsing fails
    /// - A value is out of range
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KmlError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }

        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// Missing sections and keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown enum
    /// values, and [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        debug!(
            sphere = config.geometry.sphere.as_str(),
            max_error = config.geometry.max_error;
            "Configuration parsed"
        );
        Ok(config)
    }

    /// Checks value ranges that the TOML types alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `max_error` is not finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_error = self.geometry.max_error;
        if !max_error.is_finite() || max_error <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "geometry.max_error must be a positive number of meters, got {max_error}"
            )));
        }
        Ok(())
    }

    /// Returns the geometry configuration.
    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }
}

/// Sphere model and circle tolerance.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryConfig {
    /// Named sphere used for distances and circles.
    #[serde(default)]
    sphere: SphereName,

    /// Maximum sagitta of circle approximations, in meters.
    #[serde(default = "default_max_error")]
    max_error: f64,
}

impl GeometryConfig {
    /// Creates a new [`GeometryConfig`].
    ///
    /// # Arguments
    ///
    /// * `sphere` - The named sphere model.
    /// * `max_error` - Circle tolerance in meters.
    pub fn new(sphere: SphereName, max_error: f64) -> Self {
        Self { sphere, max_error }
    }

    /// Returns the configured sphere name.
    pub fn sphere_name(&self) -> SphereName {
        self.sphere
    }

    /// Returns the configured [`Sphere`].
    pub fn sphere(&self) -> Sphere {
        self.sphere.sphere()
    }

    /// Returns the circle tolerance in meters.
    pub fn max_error(&self) -> f64 {
        self.max_error
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            sphere: SphereName::default(),
            max_error: default_max_error(),
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Whether documents start with an XML declaration.
    #[serde(default = "default_xml_declaration")]
    xml_declaration: bool,

    /// When the `gx` namespace is declared on the root.
    #[serde(default)]
    extension_namespace: ExtensionNamespace,
}

impl DocumentConfig {
    /// Creates a new [`DocumentConfig`].
    pub fn new(xml_declaration: bool, extension_namespace: ExtensionNamespace) -> Self {
        Self {
            xml_declaration,
            extension_namespace,
        }
    }

    pub fn xml_declaration(&self) -> bool {
        self.xml_declaration
    }

    pub fn extension_namespace(&self) -> ExtensionNamespace {
        self.extension_namespace
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            xml_declaration: default_xml_declaration(),
            extension_namespace: ExtensionNamespace::default(),
        }
    }
}

fn default_max_error() -> f64 {
    1.0
}

fn default_xml_declaration() -> bool {
    true
}
