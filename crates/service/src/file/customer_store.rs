use std::sync::Arc;

use chrono::Utc;
use models::{Customer, CustomerEdit, Customers, NewCustomer, Vehicle};
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::repository::CustomerRepository;
use crate::storage::JsonDocumentStore;

const ENTITY: &str = "customer with personalID";

/// File storage: customers as a JSON array, looked up by linear scan on `PersonalID`.
///
/// Owns the rental relationship: rented vehicles are embedded as snapshots in
/// the customer record. The vehicle collection itself is never written here.
pub struct CustomerStore {
    store: JsonDocumentStore<Customers>,
}

fn position(customers: &[Customer], personal_id: i64) -> Result<usize, ServiceError> {
    customers
        .iter()
        .position(|c| c.personal_id == personal_id)
        .ok_or_else(|| ServiceError::not_found(ENTITY, personal_id))
}

impl CustomerStore {
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { store: JsonDocumentStore::new(path) })
    }

    pub fn document(&self) -> &JsonDocumentStore<Customers> {
        &self.store
    }

    pub async fn get(&self) -> Result<Customers, ServiceError> {
        Ok(self.store.load().await?)
    }

    pub async fn add(&self, input: NewCustomer) -> Result<Customer, ServiceError> {
        input.validate()?;
        let added = self
            .store
            .update(|customers| {
                if customers.iter().any(|c| c.personal_id == input.personal_id) {
                    return Err(ServiceError::duplicate(ENTITY, input.personal_id));
                }
                let customer = input.clone().into_customer(Utc::now());
                customers.push(customer.clone());
                Ok(customer)
            })
            .await?;
        info!(personal_id = added.personal_id, "customer added");
        Ok(added)
    }

    pub async fn delete(&self, personal_id: i64) -> Result<(), ServiceError> {
        self.store
            .update(|customers| -> Result<(), ServiceError> {
                let idx = position(customers, personal_id)?;
                customers.remove(idx);
                Ok(())
            })
            .await?;
        info!(personal_id, "customer deleted");
        Ok(())
    }

    /// Partial update of name and contact fields. `LastEditedAt` is refreshed
    /// on every successful call, even if nothing differed.
    pub async fn edit(&self, input: CustomerEdit) -> Result<Customer, ServiceError> {
        let edited = self
            .store
            .update(|customers| -> Result<Customer, ServiceError> {
                let idx = position(customers, input.personal_id)?;
                input.validate()?;
                let customer = &mut customers[idx];
                input.apply_to(customer, Utc::now());
                Ok(customer.clone())
            })
            .await?;
        info!(personal_id = edited.personal_id, "customer edited");
        Ok(edited)
    }

    pub async fn attach_vehicle(&self, vehicle: Vehicle, personal_id: i64) -> Result<Customer, ServiceError> {
        let plate_number = vehicle.plate_number.clone();
        let customer = self
            .store
            .update(|customers| -> Result<Customer, ServiceError> {
                let idx = position(customers, personal_id)?;
                let customer = &mut customers[idx];
                customer.rented_vehicles.push(vehicle);
                Ok(customer.clone())
            })
            .await?;
        info!(personal_id, %plate_number, rented = customer.rented_vehicles.len(), "vehicle attached to customer");
        Ok(customer)
    }

    /// Remove the first rented vehicle with `plate_number`. A customer that
    /// does not rent that vehicle is not an error; the result is `false`.
    pub async fn detach_vehicle(&self, plate_number: &str, personal_id: i64) -> Result<bool, ServiceError> {
        let removed = self
            .store
            .update(|customers| -> Result<bool, ServiceError> {
                let idx = position(customers, personal_id)?;
                let rented = &mut customers[idx].rented_vehicles;
                match rented.iter().position(|v| v.plate_number == plate_number) {
                    Some(pos) => {
                        rented.remove(pos);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            })
            .await?;
        if removed {
            info!(personal_id, %plate_number, "vehicle detached from customer");
        } else {
            warn!(personal_id, %plate_number, "customer does not rent this vehicle, nothing detached");
        }
        Ok(removed)
    }
}

#[async_trait::async_trait]
impl CustomerRepository for CustomerStore {
    async fn get(&self) -> Result<Customers, ServiceError> { self.get().await }
    async fn add(&self, input: NewCustomer) -> Result<Customer, ServiceError> { self.add(input).await }
    async fn delete(&self, personal_id: i64) -> Result<(), ServiceError> { self.delete(personal_id).await }
    async fn edit(&self, input: CustomerEdit) -> Result<Customer, ServiceError> { self.edit(input).await }
    async fn attach_vehicle(&self, vehicle: Vehicle, personal_id: i64) -> Result<Customer, ServiceError> {
        self.attach_vehicle(vehicle, personal_id).await
    }
    async fn detach_vehicle(&self, plate_number: &str, personal_id: i64) -> Result<bool, ServiceError> {
        self.detach_vehicle(plate_number, personal_id).await
    }
}
