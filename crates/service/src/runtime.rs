//! Runtime environment helpers
//!
//! Bootstrap for the collection files: the data directory must exist and each
//! collection file must hold at least an empty collection before requests run.

use std::path::Path;

use crate::file::{CustomerStore, EmployeeStore, VehicleStore};

/// Ensure the data directory exists.
pub async fn ensure_env(data_dir: &Path) -> anyhow::Result<()> {
    common::env::ensure_data_dir(data_dir).await
}

/// Create any missing collection file with an empty collection.
pub async fn ensure_collections(
    customers: &CustomerStore,
    vehicles: &VehicleStore,
    employees: &EmployeeStore,
) -> anyhow::Result<()> {
    customers.document().ensure_exists().await?;
    vehicles.document().ensure_exists().await?;
    employees.document().ensure_exists().await?;
    Ok(())
}
