use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::validation::{current_year, title_case};

pub const MIN_VEHICLE_YEAR: i32 = 2010;

/// Vehicles keyed by plate number. Ordered so the document on disk is stable.
pub type Vehicles = BTreeMap<String, Vehicle>;

/// A fleet vehicle. Enumerated attributes are kept as strings on the wire and
/// checked against the closed sets below when a vehicle is added or edited.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Vehicle {
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
    pub gearbox: String,
    pub color: String,
    pub body: String,
}

macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name { $($variant),+ }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self { $($name::$variant => stringify!($variant)),+ }
            }
        }

        impl FromStr for $name {
            type Err = ();

            /// Case-insensitive: the input is title-cased before matching.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = title_case(s);
                $name::ALL.iter().copied().find(|v| v.as_str() == normalized).ok_or(())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_set!(FuelType { Petrol, Diesel, Hybrid, Electric, Lpg, Cng });
closed_set!(Gearbox { Automatic, Manual });
closed_set!(Color { White, Black, Red, Blue, Green, Yellow, Gray, Silver, Brown });
closed_set!(
    /// Body style.
    BodyType { Sedan, Touring, Hatchback, Minivan, Coupe, Cabriolet, Pickup, Limousine }
);

fn parse_member<T: FromStr>(value: &str, field: &str, allowed: &str) -> Result<T, ModelError> {
    if value.is_empty() {
        return Err(ModelError::invalid(format!("vehicle {field} may not be empty")));
    }
    value
        .parse::<T>()
        .map_err(|_| ModelError::invalid(format!("vehicle {field} may only be ({allowed})")))
}

fn joined<T: fmt::Display>(all: &[T]) -> String {
    all.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(" / ")
}

impl Vehicle {
    /// Every string field paired with its wire name. `Year` is checked by range instead.
    pub fn required_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("PlateNumber", self.plate_number.as_str()),
            ("Make", self.make.as_str()),
            ("Model", self.model.as_str()),
            ("FuelType", self.fuel_type.as_str()),
            ("Gearbox", self.gearbox.as_str()),
            ("Color", self.color.as_str()),
            ("Body", self.body.as_str()),
        ]
    }

    /// Fails on the first empty string field.
    pub fn check_required(&self) -> Result<(), ModelError> {
        match self.required_fields().into_iter().find(|(_, v)| v.is_empty()) {
            Some((name, _)) => Err(ModelError::invalid(format!("{name} cannot be empty"))),
            None => Ok(()),
        }
    }

    /// Validate every field and return a copy with the enumerated fields in
    /// their canonical spelling.
    pub fn validated(&self) -> Result<Vehicle, ModelError> {
        if self.plate_number.is_empty() {
            return Err(ModelError::invalid("vehicle plate number may not be empty"));
        }
        if self.make.is_empty() {
            return Err(ModelError::invalid("vehicle make may not be empty"));
        }
        if self.model.is_empty() {
            return Err(ModelError::invalid("vehicle model may not be empty"));
        }
        if !(MIN_VEHICLE_YEAR..=current_year()).contains(&self.year) {
            return Err(ModelError::invalid(format!(
                "vehicle year may not be lower than {MIN_VEHICLE_YEAR} or greater than the current year"
            )));
        }
        let fuel: FuelType = parse_member(&self.fuel_type, "fuel type", &joined(FuelType::ALL))?;
        let gearbox: Gearbox = parse_member(&self.gearbox, "gearbox", &joined(Gearbox::ALL))?;
        let color: Color = parse_member(&self.color, "color", &joined(Color::ALL))?;
        let body: BodyType = parse_member(&self.body, "body", &joined(BodyType::ALL))?;

        Ok(Vehicle {
            plate_number: self.plate_number.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            fuel_type: fuel.to_string(),
            gearbox: gearbox.to_string(),
            color: color.to_string(),
            body: body.to_string(),
        })
    }
}
