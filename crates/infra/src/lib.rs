//! Infrastructure layer: data source, seed loading, config.

pub mod config;
pub mod read_model;
pub mod seed;

pub use config::{ConfigError, DashboardConfig};
pub use read_model::{DashboardDirectory, InMemoryDirectory, Snapshot};
pub use seed::{SeedData, SeedError};
