// src/compare/card.rs
//
// Summary card shown above the table for each slot.

use crate::catalog::VehicleRecord;
use crate::config::consts::PLACEHOLDER;
use crate::specs::format::format_number;

use super::selection::Slot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotCard {
    pub slot: Slot,
    /// Card heading: vehicle name, or "Select Car N".
    pub title: String,
    /// Table/sticky header: vehicle name, or "Car N".
    pub header: String,
    pub image: Option<String>,
    pub price: String,
    pub mileage: String,
    pub power: String,
}

impl SlotCard {
    pub fn placeholder(slot: Slot) -> Self {
        Self {
            slot,
            title: format!("Select Car {slot}"),
            header: format!("Car {slot}"),
            image: None,
            price: s!(PLACEHOLDER),
            mileage: s!(PLACEHOLDER),
            power: s!(PLACEHOLDER),
        }
    }

    pub fn from_record(slot: Slot, rec: &VehicleRecord) -> Self {
        let suffixed = |v: Option<f64>, unit: &str| {
            or_dash!(v, |n| format!("{} {unit}", format_number(n, None)))
        };
        Self {
            slot,
            title: rec.name.clone(),
            header: rec.name.clone(),
            image: Some(rec.img.clone()).filter(|s| !s.is_empty()),
            price: suffixed(rec.price, "L"),
            mileage: suffixed(rec.mileage, "kmpl"),
            power: suffixed(rec.power, "bhp"),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder(self.slot)
    }
}
