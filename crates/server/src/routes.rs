use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::state::AppState;

pub mod customers;
pub mod employees;
pub mod vehicles;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over the three collections.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let customer_routes = Router::new()
        .route(
            "/customers",
            get(customers::list)
                .post(customers::create)
                .put(customers::edit)
                .delete(customers::remove),
        )
        .route("/customers/:personal_id/vehicles", post(customers::attach_vehicle))
        .route(
            "/customers/:personal_id/:plate_number/delete-vehicle",
            post(customers::detach_vehicle).delete(customers::detach_vehicle),
        );

    let vehicle_routes = Router::new().route(
        "/vehicles",
        get(vehicles::list)
            .post(vehicles::create)
            .put(vehicles::edit)
            .delete(vehicles::remove),
    );

    let employee_routes = Router::new().route(
        "/employees",
        get(employees::list)
            .post(employees::create)
            .put(employees::edit_contacts)
            .delete(employees::remove),
    );

    Router::new()
        .route("/health", get(health))
        .merge(customer_routes)
        .merge(vehicle_routes)
        .merge(employee_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request carrying method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
