#![cfg(test)]
use std::path::PathBuf;

use models::{Employee, NewCustomer, Vehicle};

/// A unique, not-yet-existing JSON file path under the system temp dir.
pub fn temp_json_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("{prefix}_{}.json", uuid::Uuid::new_v4()))
}

pub fn vehicle(plate: &str) -> Vehicle {
    Vehicle {
        plate_number: plate.into(),
        make: "Toyota".into(),
        model: "Corolla".into(),
        year: 2018,
        fuel_type: "Petrol".into(),
        gearbox: "Automatic".into(),
        color: "White".into(),
        body: "Sedan".into(),
    }
}

pub fn new_customer(personal_id: i64) -> NewCustomer {
    NewCustomer {
        first_name: "John".into(),
        last_name: "Smith".into(),
        personal_id,
        phone_number: "5551234".into(),
        email: "john@x.com".into(),
    }
}

pub fn employee(personal_id: i64) -> Employee {
    Employee {
        first_name: "Jane".into(),
        last_name: "Doe".into(),
        personal_id,
        date_of_birth: "01.01.1980".into(),
        email: "jane@fleet.ee".into(),
        phone_number: "5550000".into(),
        address: "Main 1".into(),
    }
}
