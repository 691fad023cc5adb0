// src/predict/request.rs
//
// Typed prediction request. Field names on the wire are the ones the
// prediction service reads (e.g. "Mileage(km/l)"). Anything coming from a
// free-form source goes through `from_fields`, which rejects unknown,
// missing, duplicated, malformed and out-of-range fields.

use std::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use super::brands;
use crate::error::PredictError;

pub const YEAR_MIN: u16 = 2000;

/// Current calendar year (upper bound for `Year`).
pub fn current_year() -> u16 {
    chrono::Local::now().year().clamp(YEAR_MIN as i32, u16::MAX as i32) as u16
}

macro_rules! form_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self { $($name::$variant => $text,)+ }
            }
        }

        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(format!("'{other}' is not one of {}", [$($text),+].join(", "))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

form_enum!(FuelType { Petrol => "Petrol", Diesel => "Diesel", Cng => "CNG", Hybrid => "Hybrid" });
form_enum!(SellerType { Dealer => "Dealer", Individual => "Individual" });
form_enum!(Transmission { Manual => "Manual", Automatic => "Automatic" });
form_enum!(Condition { Excellent => "Excellent", Good => "Good", Average => "Average", Poor => "Poor" });

/// Form field, by wire name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Year,
    PresentPrice,
    KmsDriven,
    Owner,
    FuelType,
    SellerType,
    Transmission,
    Brand,
    CarName,
    City,
    Condition,
    Mileage,
    EnginePower,
    MaintenanceCost,
    InsuranceAge,
    Accidents,
}

/// Inclusive numeric range for a form field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: Option<f64>,
    pub step: f64,
}

impl Bounds {
    const fn at_least(min: f64, step: f64) -> Self {
        Self { min, max: None, step }
    }

    const fn between(min: f64, max: f64, step: f64) -> Self {
        Self { min, max: Some(max), step }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && self.max.is_none_or(|m| v <= m)
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("must be between {} and {}", self.min, max),
            None => format!("must be at least {}", self.min),
        }
    }
}

impl Field {
    pub const ALL: [Field; 16] = [
        Field::Year, Field::PresentPrice, Field::KmsDriven, Field::Owner,
        Field::FuelType, Field::SellerType, Field::Transmission, Field::Brand,
        Field::CarName, Field::City, Field::Condition, Field::Mileage,
        Field::EnginePower, Field::MaintenanceCost, Field::InsuranceAge, Field::Accidents,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Field::Year            => "Year",
            Field::PresentPrice    => "Present_Price(Lakhs)",
            Field::KmsDriven       => "Kms_Driven",
            Field::Owner           => "Owner",
            Field::FuelType        => "Fuel_Type",
            Field::SellerType      => "Seller_Type",
            Field::Transmission    => "Transmission",
            Field::Brand           => "Brand",
            Field::CarName         => "Car_Name",
            Field::City            => "City",
            Field::Condition       => "Condition",
            Field::Mileage         => "Mileage(km/l)",
            Field::EnginePower     => "Engine_Power(cc)",
            Field::MaintenanceCost => "Maintenance_Cost(₹/yr)",
            Field::InsuranceAge    => "Insurance_Age(yrs)",
            Field::Accidents       => "Accidents",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire() == name)
    }

    /// Numeric range, `None` for categorical fields.
    pub fn bounds(self, current_year: u16) -> Option<Bounds> {
        match self {
            Field::Year            => Some(Bounds::between(YEAR_MIN as f64, current_year as f64, 1.0)),
            Field::KmsDriven       => Some(Bounds::at_least(0.0, 1.0)),
            Field::PresentPrice    => Some(Bounds::at_least(0.1, 0.01)),
            Field::Owner           => Some(Bounds::between(0.0, 5.0, 1.0)),
            Field::Mileage         => Some(Bounds::between(5.0, 40.0, 0.1)),
            Field::EnginePower     => Some(Bounds::between(600.0, 5000.0, 1.0)),
            Field::MaintenanceCost => Some(Bounds::at_least(0.0, 100.0)),
            Field::InsuranceAge    => Some(Bounds::between(0.0, 15.0, 1.0)),
            Field::Accidents       => Some(Bounds::between(0.0, 10.0, 1.0)),
            Field::FuelType | Field::SellerType | Field::Transmission | Field::Brand
            | Field::CarName | Field::City | Field::Condition => None,
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionRequest {
    #[serde(rename = "Year")]
    pub year: u16,
    #[serde(rename = "Present_Price(Lakhs)")]
    pub present_price: f64,
    #[serde(rename = "Kms_Driven")]
    pub kms_driven: u32,
    #[serde(rename = "Owner")]
    pub owner: u8,
    #[serde(rename = "Fuel_Type")]
    pub fuel_type: FuelType,
    #[serde(rename = "Seller_Type")]
    pub seller_type: SellerType,
    #[serde(rename = "Transmission")]
    pub transmission: Transmission,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Car_Name")]
    pub car_name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Condition")]
    pub condition: Condition,
    #[serde(rename = "Mileage(km/l)")]
    pub mileage: f64,
    #[serde(rename = "Engine_Power(cc)")]
    pub engine_power: u32,
    #[serde(rename = "Maintenance_Cost(₹/yr)")]
    pub maintenance_cost: u32,
    #[serde(rename = "Insurance_Age(yrs)")]
    pub insurance_age: u8,
    #[serde(rename = "Accidents")]
    pub accidents: u8,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            year: 2018,
            present_price: 7.5,
            kms_driven: 45_000,
            owner: 0,
            fuel_type: FuelType::Petrol,
            seller_type: SellerType::Dealer,
            transmission: Transmission::Manual,
            brand: s!("Maruti"),
            car_name: s!("Maruti Swift"),
            city: s!("Delhi"),
            condition: Condition::Good,
            mileage: 20.0,
            engine_power: 1200,
            maintenance_cost: 6_000,
            insurance_age: 2,
            accidents: 0,
        }
    }
}

fn parse<T: FromStr>(field: Field, raw: &str) -> Result<T, PredictError> {
    raw.trim()
        .parse()
        .map_err(|_| PredictError::invalid(field.wire(), format!("'{}' is not a valid number", raw.trim())))
}

fn parse_choice<T: FromStr<Err = String>>(field: Field, raw: &str) -> Result<T, PredictError> {
    raw.parse().map_err(|reason| PredictError::invalid(field.wire(), reason))
}

impl PredictionRequest {
    /// Build from `(wire name, text)` pairs, e.g. a submitted form.
    pub fn from_fields<'a, I>(fields: I, current_year: u16) -> Result<Self, PredictError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut slots: [Option<&str>; Field::ALL.len()] = [None; Field::ALL.len()];
        for (name, value) in fields {
            let field = Field::from_wire(name).ok_or_else(|| PredictError::UnknownField(s!(name)))?;
            let slot = &mut slots[field.index()];
            if slot.is_some() {
                return Err(PredictError::invalid(field.wire(), "given more than once"));
            }
            *slot = Some(value);
        }

        let get = |field: Field| slots[field.index()].ok_or(PredictError::MissingField(field.wire()));

        let req = Self {
            year: parse(Field::Year, get(Field::Year)?)?,
            present_price: parse(Field::PresentPrice, get(Field::PresentPrice)?)?,
            kms_driven: parse(Field::KmsDriven, get(Field::KmsDriven)?)?,
            owner: parse(Field::Owner, get(Field::Owner)?)?,
            fuel_type: parse_choice(Field::FuelType, get(Field::FuelType)?)?,
            seller_type: parse_choice(Field::SellerType, get(Field::SellerType)?)?,
            transmission: parse_choice(Field::Transmission, get(Field::Transmission)?)?,
            brand: s!(get(Field::Brand)?.trim()),
            car_name: s!(get(Field::CarName)?.trim()),
            city: s!(get(Field::City)?.trim()),
            condition: parse_choice(Field::Condition, get(Field::Condition)?)?,
            mileage: parse(Field::Mileage, get(Field::Mileage)?)?,
            engine_power: parse(Field::EnginePower, get(Field::EnginePower)?)?,
            maintenance_cost: parse(Field::MaintenanceCost, get(Field::MaintenanceCost)?)?,
            insurance_age: parse(Field::InsuranceAge, get(Field::InsuranceAge)?)?,
            accidents: parse(Field::Accidents, get(Field::Accidents)?)?,
        };
        req.validate(current_year)?;
        Ok(req)
    }

    fn numeric(&self, field: Field) -> Option<f64> {
        Some(match field {
            Field::Year => self.year as f64,
            Field::PresentPrice => self.present_price,
            Field::KmsDriven => self.kms_driven as f64,
            Field::Owner => self.owner as f64,
            Field::Mileage => self.mileage,
            Field::EnginePower => self.engine_power as f64,
            Field::MaintenanceCost => self.maintenance_cost as f64,
            Field::InsuranceAge => self.insurance_age as f64,
            Field::Accidents => self.accidents as f64,
            _ => return None,
        })
    }

    /// Range and vocabulary checks.
    pub fn validate(&self, current_year: u16) -> Result<(), PredictError> {
        for field in Field::ALL {
            let (Some(bounds), Some(v)) = (field.bounds(current_year), self.numeric(field)) else {
                continue;
            };
            if !v.is_finite() || !bounds.contains(v) {
                return Err(PredictError::invalid(field.wire(), bounds.describe()));
            }
        }

        let models = brands::models_for(&self.brand).ok_or_else(|| {
            PredictError::invalid(Field::Brand.wire(), format!("unknown brand '{}'", self.brand))
        })?;
        if !models.contains(&self.car_name.as_str()) {
            return Err(PredictError::invalid(
                Field::CarName.wire(),
                format!("'{}' is not a {} model", self.car_name, self.brand),
            ));
        }
        if !brands::is_city(&self.city) {
            return Err(PredictError::invalid(Field::City.wire(), format!("unknown city '{}'", self.city)));
        }
        Ok(())
    }
}
