// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod predict;
pub mod presenter;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{CatalogError, CompareError, ConfigError, PredictError};
