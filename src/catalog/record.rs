// src/catalog/record.rs

use serde::{Deserialize, Serialize};

use crate::specs::Attribute::{self, *};

/// A borrowed attribute value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttrValue<'a> {
    Number(f64),
    Text(&'a str),
}

/// One vehicle as stored in the catalog. Immutable once loaded.
///
/// Field names match the catalog file keys. Every attribute is optional;
/// a missing one renders as the placeholder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Catalog key. Filled from the map key when loading a file.
    #[serde(default, skip_serializing)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img: String,

    pub price: Option<f64>,
    pub fuel: Option<String>,
    pub transmission: Option<String>,
    pub mileage: Option<f64>,
    pub power: Option<f64>,
    pub torque: Option<f64>,
    pub engine_cc: Option<f64>,
    pub top_speed: Option<f64>,
    pub touchscreen: Option<String>,
    pub sunroof: Option<String>,
    pub ac_type: Option<String>,
    pub seat_material: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub boot_space: Option<f64>,
    pub ground_clearance: Option<f64>,
    pub fuel_tank: Option<f64>,
    pub safety_rating: Option<f64>,
    pub airbags: Option<f64>,
    pub parking_sensors: Option<String>,
}

impl VehicleRecord {
    pub fn value(&self, attr: Attribute) -> Option<AttrValue<'_>> {
        fn text(s: &Option<String>) -> Option<AttrValue<'_>> {
            s.as_deref().map(AttrValue::Text)
        }
        match attr {
            Fuel => text(&self.fuel),
            Transmission => text(&self.transmission),
            Touchscreen => text(&self.touchscreen),
            Sunroof => text(&self.sunroof),
            AcType => text(&self.ac_type),
            SeatMaterial => text(&self.seat_material),
            ParkingSensors => text(&self.parking_sensors),
            _ => self.number(attr).map(AttrValue::Number),
        }
    }

    /// Numeric value of `attr`, if the attribute is numeric and present.
    pub fn number(&self, attr: Attribute) -> Option<f64> {
        match attr {
            Price => self.price,
            Mileage => self.mileage,
            Power => self.power,
            Torque => self.torque,
            EngineCc => self.engine_cc,
            TopSpeed => self.top_speed,
            Length => self.length,
            Width => self.width,
            BootSpace => self.boot_space,
            GroundClearance => self.ground_clearance,
            FuelTank => self.fuel_tank,
            SafetyRating => self.safety_rating,
            Airbags => self.airbags,
            Fuel | Transmission | Touchscreen | Sunroof | AcType | SeatMaterial
            | ParkingSensors => None,
        }
    }
}
