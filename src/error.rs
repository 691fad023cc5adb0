// src/error.rs
//! Error types, one enum per area.
//!
//! A record that simply lacks an attribute is not an error anywhere in the
//! crate: it renders as the `--` placeholder.

use std::path::PathBuf;

/// Loading or validating the vehicle catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no vehicles")]
    Empty,

    #[error("vehicle '{id}' has an empty display name")]
    MissingName { id: String },

    #[error("vehicle '{id}' has an invalid {attribute} value: {value}")]
    InvalidValue { id: String, attribute: &'static str, value: f64 },

    #[error("format rule for {attribute} does not match its kind")]
    FormatRule { attribute: &'static str },
}

/// Selection errors raised by the comparison session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    #[error("no vehicle named '{0}' in the catalog")]
    NotFound(String),

    #[error("invalid comparison slot {0} (expected 1, 2 or 3)")]
    InvalidSlot(u8),
}

/// Everything that can go wrong between the form and a rendered estimate.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),

    #[error("missing form field '{0}'")]
    MissingField(&'static str),

    #[error("invalid value for {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server did not return JSON (status {status})")]
    NonJson { status: u16, body: String },

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Prediction error: {0}")]
    Rejected(String),

    #[error("response has no predicted_price")]
    MissingPrice,
}

impl PredictError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField { field, reason: reason.into() }
    }
}

/// Configuration could not be assembled from defaults, file and environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),
}
