use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, StorageConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;
use service::{
    file::{CustomerStore, EmployeeStore, VehicleStore},
    runtime,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the three collections under `storage.data_dir`, creating missing files.
pub async fn build_state(storage: &StorageConfig) -> anyhow::Result<AppState> {
    runtime::ensure_env(&storage.data_dir).await?;

    let customers = CustomerStore::new(storage.customers_path());
    let vehicles = VehicleStore::new(storage.vehicles_path());
    let employees = EmployeeStore::new(storage.employees_path());
    runtime::ensure_collections(&customers, &vehicles, &employees).await?;

    info!(
        customers = %storage.customers_path().display(),
        vehicles = %storage.vehicles_path().display(),
        employees = %storage.employees_path().display(),
        "collections ready"
    );
    Ok(AppState { customers, vehicles, employees })
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app from configuration and run the HTTP server
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let state = build_state(&cfg.storage).await?;
    let app = build_app(state);

    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address {}: {e}", cfg.server.bind_addr())))?;
    info!(%addr, "starting fleet rental server");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(anyhow::Error::from)?;
    axum::serve(listener, app).await.map_err(anyhow::Error::from)?;
    Ok(())
}
