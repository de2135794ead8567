use std::sync::Arc;

use models::{Vehicle, Vehicles};
use tracing::info;

use crate::errors::ServiceError;
use crate::repository::VehicleRepository;
use crate::storage::JsonDocumentStore;

/// File storage: the vehicle collection as one JSON object keyed by plate number.
pub struct VehicleStore {
    store: JsonDocumentStore<Vehicles>,
}

impl VehicleStore {
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { store: JsonDocumentStore::new(path) })
    }

    /// The underlying document, for bootstrap (creating the file if missing).
    pub fn document(&self) -> &JsonDocumentStore<Vehicles> {
        &self.store
    }

    pub async fn get(&self) -> Result<Vehicles, ServiceError> {
        Ok(self.store.load().await?)
    }

    pub async fn find(&self, plate_number: &str) -> Result<Vehicle, ServiceError> {
        self.store
            .load()
            .await?
            .remove(plate_number)
            .ok_or_else(|| ServiceError::not_found("vehicle with plate number", plate_number))
    }

    /// Validate, reject duplicates, store the canonical form.
    pub async fn add(&self, input: Vehicle) -> Result<Vehicle, ServiceError> {
        let added = self
            .store
            .update(|vehicles| -> Result<Vehicle, ServiceError> {
                let vehicle = input.validated()?;
                if vehicles.contains_key(&vehicle.plate_number) {
                    return Err(ServiceError::duplicate("vehicle with plate number", &vehicle.plate_number));
                }
                vehicles.insert(vehicle.plate_number.clone(), vehicle.clone());
                Ok(vehicle)
            })
            .await?;
        info!(plate_number = %added.plate_number, "vehicle added");
        Ok(added)
    }

    pub async fn delete(&self, plate_number: &str) -> Result<(), ServiceError> {
        self.store
            .update(|vehicles| {
                vehicles
                    .remove(plate_number)
                    .map(|_| ())
                    .ok_or_else(|| ServiceError::not_found("vehicle with plate number", plate_number))
            })
            .await?;
        info!(%plate_number, "vehicle deleted");
        Ok(())
    }

    /// Replace every attribute of an existing vehicle. All fields are required
    /// and at least one must differ from what is stored.
    pub async fn edit(&self, input: Vehicle) -> Result<Vehicle, ServiceError> {
        let edited = self
            .store
            .update(|vehicles| -> Result<Vehicle, ServiceError> {
                let stored = vehicles
                    .get_mut(&input.plate_number)
                    .ok_or_else(|| ServiceError::not_found("vehicle with plate number", &input.plate_number))?;
                input.check_required()?;
                let vehicle = input.validated()?;
                if *stored == vehicle {
                    return Err(ServiceError::NoChange(format!("vehicle {}", vehicle.plate_number)));
                }
                *stored = vehicle.clone();
                Ok(vehicle)
            })
            .await?;
        info!(plate_number = %edited.plate_number, "vehicle edited");
        Ok(edited)
    }
}

#[async_trait::async_trait]
impl VehicleRepository for VehicleStore {
    async fn get(&self) -> Result<Vehicles, ServiceError> { self.get().await }
    async fn find(&self, plate_number: &str) -> Result<Vehicle, ServiceError> { self.find(plate_number).await }
    async fn add(&self, input: Vehicle) -> Result<Vehicle, ServiceError> { self.add(input).await }
    async fn delete(&self, plate_number: &str) -> Result<(), ServiceError> { self.delete(plate_number).await }
    async fn edit(&self, input: Vehicle) -> Result<Vehicle, ServiceError> { self.edit(input).await }
}
