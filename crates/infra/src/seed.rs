//! Seed data: the customer and invoice collections the dashboard starts with.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use dashboard_invoicing::Invoice;
use dashboard_parties::Customer;

const PLACEHOLDER_JSON: &str = include_str!("../seed/placeholder.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// `{ "customers": [...], "invoices": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

impl SeedData {
    /// Built-in placeholder data (10 customers, 15 invoices).
    pub fn placeholder() -> Result<Self, SeedError> {
        Self::from_json_str(PLACEHOLDER_JSON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Seed from `path` when given, otherwise the built-in placeholder data.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(p) => {
                tracing::info!(path = %p.display(), "loading seed data from file");
                Self::from_path(p)
            }
            None => {
                tracing::info!("DASHBOARD_SEED_PATH not set; using built-in placeholder data");
                Self::placeholder()
            }
        }
    }
}
