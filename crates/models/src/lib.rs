//! Record types for the fleet rental collections and the field rules they obey.

pub mod errors;
pub mod validation;
pub mod vehicle;
pub mod customer;
pub mod employee;

pub use customer::{Customer, CustomerEdit, Customers, NewCustomer};
pub use employee::{ContactUpdate, Employee, Employees};
pub use errors::ModelError;
pub use vehicle::{Vehicle, Vehicles};
