use axum::{extract::State, Json};
use common::types::MessageResponse;
use models::{ContactUpdate, Employee, Employees};

use crate::errors::JsonApiError;
use crate::routes::customers::PersonalIdBody;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Employees>, JsonApiError> {
    Ok(Json(state.employees.get().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Employee>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.add(input).await?))
}

pub async fn edit_contacts(
    State(state): State<AppState>,
    Json(input): Json<ContactUpdate>,
) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.employees.edit_contacts(input).await?))
}

pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<PersonalIdBody>,
) -> Result<Json<MessageResponse>, JsonApiError> {
    state.employees.delete(body.personal_id).await?;
    Ok(Json(MessageResponse::new("employee deleted")))
}
