//! Read-only dashboard data source abstractions.

pub mod directory;

pub use directory::{DashboardDirectory, InMemoryDirectory, Snapshot};
