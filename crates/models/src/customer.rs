use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{
    validate_customer_email, validate_name, validate_personal_id, validate_phone_digits,
};
use crate::vehicle::Vehicle;

pub type Customers = Vec<Customer>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
    pub phone_number: String,
    pub email: String,
    /// Snapshots of the vehicles as they were when rented.
    #[serde(default)]
    pub rented_vehicles: Vec<Vehicle>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_edited_at: Option<DateTime<Utc>>,
}

/// Fields a client supplies when registering a customer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
    pub phone_number: String,
    pub email: String,
}

impl NewCustomer {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.first_name, "first name")?;
        validate_name(&self.last_name, "last name")?;
        validate_phone_digits(&self.phone_number)?;
        validate_customer_email(&self.email)?;
        validate_personal_id(self.personal_id, "customer")?;
        Ok(())
    }

    pub fn into_customer(self, now: DateTime<Utc>) -> Customer {
        Customer {
            first_name: self.first_name,
            last_name: self.last_name,
            personal_id: self.personal_id,
            phone_number: self.phone_number,
            email: self.email,
            rented_vehicles: Vec::new(),
            created_at: now,
            last_edited_at: None,
        }
    }
}

/// Partial update: empty strings leave the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomerEdit {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
}

impl CustomerEdit {
    /// Apply the same field rules as registration, but only to supplied fields.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.first_name.is_empty() {
            validate_name(&self.first_name, "first name")?;
        }
        if !self.last_name.is_empty() {
            validate_name(&self.last_name, "last name")?;
        }
        if !self.email.is_empty() {
            validate_customer_email(&self.email)?;
        }
        if !self.phone_number.is_empty() {
            validate_phone_digits(&self.phone_number)?;
        }
        Ok(())
    }

    pub fn apply_to(&self, customer: &mut Customer, now: DateTime<Utc>) {
        for (src, dst) in [
            (&self.first_name, &mut customer.first_name),
            (&self.last_name, &mut customer.last_name),
            (&self.email, &mut customer.email),
            (&self.phone_number, &mut customer.phone_number),
        ] {
            if !src.is_empty() {
                dst.clone_from(src);
            }
        }
        customer.last_edited_at = Some(now);
    }
}
