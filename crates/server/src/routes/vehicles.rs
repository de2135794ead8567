use axum::{extract::State, Json};
use common::types::MessageResponse;
use models::{Vehicle, Vehicles};
use serde::Deserialize;

use crate::errors::JsonApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlateNumberBody {
    #[serde(rename = "PlateNumber")]
    pub plate_number: String,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vehicles>, JsonApiError> {
    Ok(Json(state.vehicles.get().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Vehicle>,
) -> Result<Json<Vehicle>, JsonApiError> {
    Ok(Json(state.vehicles.add(input).await?))
}

pub async fn edit(
    State(state): State<AppState>,
    Json(input): Json<Vehicle>,
) -> Result<Json<Vehicle>, JsonApiError> {
    Ok(Json(state.vehicles.edit(input).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<PlateNumberBody>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.vehicles.delete(&body.plate_number).await?;
    Ok(Json(MessageResponse::new("vehicle deleted")))
}
