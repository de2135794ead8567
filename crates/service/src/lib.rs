//! Entity storage layer for the fleet rental records.
//! - `storage`: whole-collection JSON document store with one lock per file.
//! - `repository`: the repository contracts the HTTP layer depends on.
//! - `file`: file-backed repositories enforcing uniqueness, field rules and rentals.

pub mod errors;
pub mod storage;
pub mod repository;
pub mod file;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
