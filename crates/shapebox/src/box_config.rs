//! Box configuration, layered on top of built-in defaults.

use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Shape, ShapeBox};

const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_CONFIG_STR: &str = include_str!("default.yaml");

lazy_static! {
    static ref DEFAULT_CONFIG: BoxConfig =
        serde_norway::from_str(DEFAULT_CONFIG_STR).expect("error loading default box config");
}

/// Capacity and initial contents of a [`ShapeBox`].
///
/// Every loader layers its source on top of the embedded `default.yaml`, so
/// `capacity` is always present by the time this is deserialized.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoxConfig {
    /// Maximum number of shapes the box may hold.
    pub capacity: usize,
    /// Shapes to put in the box, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
}

impl Default for BoxConfig {
    /// Returns the config described by the embedded `default.yaml`.
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl BoxConfig {
    /// Loads a config from a YAML string. Keys missing from `yaml` take their
    /// default values.
    pub fn load_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::load_source(config::File::from_str(yaml, CONFIG_FILE_FORMAT))
    }

    /// Loads a config from a YAML file. Keys missing from the file take their
    /// default values.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = config::File::from(path.as_ref())
            .format(CONFIG_FILE_FORMAT)
            .required(true);
        Self::load_source(source)
    }

    /// Loads a config from a YAML file, or returns the default config if
    /// loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_file(path).unwrap_or_else(|e| {
            log::warn!("Error loading box config from {}: {e}", path.display());
            Self::default()
        })
    }

    /// Serializes the config to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_norway::to_string(self)?)
    }

    fn load_source(
        source: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        let default_config_source = config::File::from_str(DEFAULT_CONFIG_STR, CONFIG_FILE_FORMAT);
        let config = config::Config::builder()
            .add_source(default_config_source)
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

impl ShapeBox {
    /// Constructs a box from a config, adding its shapes in order.
    ///
    /// Returns an error if there are more shapes than the capacity allows.
    pub fn from_config(config: &BoxConfig) -> Result<Self, ConfigError> {
        let mut ret = ShapeBox::new(config.capacity);
        for &shape in &config.shapes {
            ret.add_shape(shape).map_err(|_| ConfigError::TooManyShapes {
                count: config.shapes.len(),
                capacity: config.capacity,
            })?;
        }
        Ok(ret)
    }

    /// Returns a config that reconstructs this box.
    pub fn to_config(&self) -> BoxConfig {
        BoxConfig {
            capacity: self.capacity(),
            shapes: self.shapes().to_vec(),
        }
    }
}
