use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{
    is_valid_date, validate_address, validate_email, validate_name, validate_personal_id,
    validate_phone,
};

pub type Employees = Vec<Employee>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
    /// `DD.MM.YYYY`
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl Employee {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.first_name, "first name")?;
        validate_name(&self.last_name, "last name")?;
        validate_personal_id(self.personal_id, "employee")?;
        if !is_valid_date(&self.date_of_birth) {
            return Err(ModelError::invalid("wrong date format"));
        }
        validate_email(&self.email)?;
        validate_phone(&self.phone_number)?;
        validate_address(&self.address)?;
        Ok(())
    }
}

/// Contact details an employee may change after being registered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContactUpdate {
    #[serde(rename = "PersonalID")]
    pub personal_id: i64,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl ContactUpdate {
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_email(&self.email)?;
        validate_phone(&self.phone_number)?;
        validate_address(&self.address)?;
        Ok(())
    }

    pub fn apply_to(&self, employee: &mut Employee) {
        employee.email.clone_from(&self.email);
        employee.phone_number.clone_from(&self.phone_number);
        employee.address.clone_from(&self.address);
    }
}
