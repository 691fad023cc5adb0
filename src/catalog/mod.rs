// src/catalog/mod.rs
//! Read-only vehicle catalog.
//!
//! Built once at startup (built-in table or a JSON file) and shared behind an
//! `Arc`. Selections hold `Arc<VehicleRecord>` handles into it; records are
//! never copied or mutated after loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::{CatalogError, CompareError};
use crate::specs::{Attribute, format};

pub mod builtin;
pub mod record;

pub use record::{AttrValue, VehicleRecord};

#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<Arc<VehicleRecord>>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            records: builtin::records().into_iter().map(Arc::new).collect(),
        }
    }

    /// Build from records, validating each one.
    pub fn from_records(records: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for r in &records {
            validate(r)?;
        }
        Ok(Self { records: records.into_iter().map(Arc::new).collect() })
    }

    /// Parse a JSON object `{ "<id>": { "name": ..., "price": ..., ... }, ... }`.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let table: BTreeMap<String, VehicleRecord> = serde_json::from_str(text)?;
        let records = table
            .into_iter()
            .map(|(id, mut rec)| {
                rec.id = id;
                rec
            })
            .collect();
        Self::from_records(records)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Built-in table unless `path` is given. Also checks the display rules.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        format::validate_rules()?;
        let catalog = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::builtin(),
        };
        logf!("Catalog: {} vehicle(s) loaded", catalog.len());
        Ok(catalog)
    }

    pub fn lookup(&self, id: &str) -> Result<Arc<VehicleRecord>, CompareError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| CompareError::NotFound(s!(id)))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn records(&self) -> &[Arc<VehicleRecord>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate(rec: &VehicleRecord) -> Result<(), CatalogError> {
    if rec.name.trim().is_empty() {
        return Err(CatalogError::MissingName { id: rec.id.clone() });
    }
    for attr in Attribute::ALL {
        if let Some(v) = rec.number(attr) {
            if !v.is_finite() || v < 0.0 {
                return Err(CatalogError::InvalidValue {
                    id: rec.id.clone(),
                    attribute: attr.key(),
                    value: v,
                });
            }
        }
    }
    Ok(())
}
