//! File-backed repositories, one JSON document per collection.

pub mod customer_store;
pub mod employee_store;
pub mod vehicle_store;

pub use customer_store::CustomerStore;
pub use employee_store::EmployeeStore;
pub use vehicle_store::VehicleStore;
