use axum::{
    extract::{Path, State},
    Json,
};
use common::types::MessageResponse;
use models::{validation::validate_personal_id, Customer, CustomerEdit, Customers, NewCustomer, Vehicle};
use serde::Deserialize;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PersonalIdBody {
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Customers>, JsonApiError> {
    Ok(Json(state.customers.get().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<NewCustomer>,
) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.customers.add(input).await?))
}

pub async fn edit(
    State(state): State<AppState>,
    Json(input): Json<CustomerEdit>,
) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.customers.edit(input).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<PersonalIdBody>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    validate_personal_id(body.personal_id, "customer")?;
    state.customers.delete(body.personal_id).await?;
    Ok(Json(MessageResponse::new("customer deleted")))
}

/// Rent a vehicle: only `PlateNumber` of the body is used; the stored vehicle
/// is what gets embedded in the customer.
pub async fn attach_vehicle(
    State(state): State<AppState>,
    Path(personal_id): Path<i64>,
    Json(body): Json<Vehicle>,
) -> Result<Json<Customer>, JsonApiError> {
    let vehicle = state.vehicles.find(&body.plate_number).await?;
    Ok(Json(state.customers.attach_vehicle(vehicle, personal_id).await?))
}

pub async fn detach_vehicle(
    State(state): State<AppState>,
    Path((personal_id, plate_number)): Path<(i64, String)>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.vehicles.find(&plate_number).await?;
    let removed = state.customers.detach_vehicle(&plate_number, personal_id).await?;
    let msg = if removed { "vehicle deleted from customer" } else { "customer does not rent this vehicle" };
    Ok(Json(MessageResponse::new(msg)))
}
