// src/config/options.rs
//
// Options are layered: built-in defaults, then `used_car_price.toml`
// (or an explicit file), then `UCP_*` environment variables.
// Nested keys use `__` in env names, e.g. `UCP_PREDICT__ENDPOINT`.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use super::consts::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub predict: PredictOptions,
    pub catalog: CatalogOptions,
    pub log: LogOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictOptions {
    /// Full URL of the prediction endpoint (POST, JSON body).
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(DEFAULT_ENDPOINT),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    /// JSON file replacing the built-in catalog. `None` → built-in.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(LOG_FILE),
            level: s!(DEFAULT_LOG_LEVEL),
        }
    }
}

impl AppOptions {
    /// Load from defaults → config file → environment.
    /// `file` overrides the default `used_car_price.toml` lookup and must exist;
    /// the default file is optional.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppOptions::default()));

        match file {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            Some(path) => figment = figment.merge(Toml::file(path)),
            None if Path::new(CONFIG_FILE).exists() => {
                figment = figment.merge(Toml::file(CONFIG_FILE));
            }
            None => {}
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::Figment(Box::new(e)))
    }
}
