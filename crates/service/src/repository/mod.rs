//! Repository contracts for the three collections.
//! Implementations can be file-backed or anything else that keeps the same invariants.

use async_trait::async_trait;
use models::{
    ContactUpdate, Customer, CustomerEdit, Customers, Employee, Employees, NewCustomer, Vehicle,
    Vehicles,
};

use crate::errors::ServiceError;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn get(&self) -> Result<Vehicles, ServiceError>;
    /// Look up a single vehicle by plate number.
    async fn find(&self, plate_number: &str) -> Result<Vehicle, ServiceError>;
    async fn add(&self, input: Vehicle) -> Result<Vehicle, ServiceError>;
    async fn delete(&self, plate_number: &str) -> Result<(), ServiceError>;
    async fn edit(&self, input: Vehicle) -> Result<Vehicle, ServiceError>;
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn get(&self) -> Result<Customers, ServiceError>;
    async fn add(&self, input: NewCustomer) -> Result<Customer, ServiceError>;
    async fn delete(&self, personal_id: i64) -> Result<(), ServiceError>;
    async fn edit(&self, input: CustomerEdit) -> Result<Customer, ServiceError>;
    /// Embed a copy of `vehicle` in the customer's rentals. The caller checks
    /// that the vehicle exists.
    async fn attach_vehicle(&self, vehicle: Vehicle, personal_id: i64) -> Result<Customer, ServiceError>;
    /// Returns whether a rented vehicle with that plate was removed.
    async fn detach_vehicle(&self, plate_number: &str, personal_id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get(&self) -> Result<Employees, ServiceError>;
    async fn add(&self, input: Employee) -> Result<Employee, ServiceError>;
    async fn delete(&self, personal_id: i64) -> Result<(), ServiceError>;
    async fn edit_contacts(&self, input: ContactUpdate) -> Result<Employee, ServiceError>;
}
