// src/specs/format.rs
//
// Display rules for attribute values. Formatting is display-only and never
// feeds back into the comparison.

use super::attributes::{AttrKind, Attribute, Attribute::*};
use crate::catalog::AttrValue;
use crate::error::CatalogError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// ₹ prefix, lakh suffix
    LakhRupees,
    KmPerLitre,
    Bhp,
    NewtonMetre,
    Cc,
    KmPerHour,
    Millimetre,
    Litre,
    Stars,
    /// Bare number
    Count,
    /// Categorical, verbatim
    Text,
}

impl Unit {
    pub fn prefix(self) -> &'static str {
        match self {
            Unit::LakhRupees => "₹ ",
            _ => "",
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Unit::LakhRupees => " L",
            Unit::KmPerLitre => " kmpl",
            Unit::Bhp => " bhp",
            Unit::NewtonMetre => " Nm",
            Unit::Cc => " cc",
            Unit::KmPerHour => " km/h",
            Unit::Millimetre => " mm",
            Unit::Litre => " L",
            Unit::Stars => " ★",
            Unit::Count | Unit::Text => "",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Unit::Text)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatRule {
    pub unit: Unit,
    /// Fixed decimals; `None` prints the shortest round-trip form.
    pub precision: Option<usize>,
}

impl FormatRule {
    const fn shortest(unit: Unit) -> Self {
        Self { unit, precision: None }
    }

    pub fn number(&self, v: f64) -> String {
        format!("{}{}{}", self.unit.prefix(), format_number(v, self.precision), self.unit.suffix())
    }

    pub fn text(&self, s: &str) -> String {
        format!("{}{}{}", self.unit.prefix(), s, self.unit.suffix())
    }

    pub fn apply(&self, value: AttrValue<'_>) -> String {
        match value {
            AttrValue::Number(v) => self.number(v),
            AttrValue::Text(s) => self.text(s),
        }
    }
}

/// `113.0` → "113", `88.5` → "88.5", with `Some(p)` → fixed decimals.
pub fn format_number(v: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{v:.p$}"),
        None => format!("{v}"),
    }
}

pub fn rule_for(attr: Attribute) -> FormatRule {
    let unit = match attr {
        Price => Unit::LakhRupees,
        Mileage => Unit::KmPerLitre,
        Power => Unit::Bhp,
        Torque => Unit::NewtonMetre,
        EngineCc => Unit::Cc,
        TopSpeed => Unit::KmPerHour,
        Length | Width | GroundClearance => Unit::Millimetre,
        BootSpace | FuelTank => Unit::Litre,
        SafetyRating => Unit::Stars,
        Airbags => Unit::Count,
        Fuel | Transmission | Touchscreen | Sunroof | AcType | SeatMaterial
        | ParkingSensors => Unit::Text,
    };
    FormatRule::shortest(unit)
}

/// Check every attribute's rule against its kind. Run once at startup.
pub fn validate_rules() -> Result<(), CatalogError> {
    for attr in Attribute::ALL {
        let numeric_unit = rule_for(attr).unit.is_numeric();
        let numeric_kind = attr.kind() == AttrKind::Numeric;
        if numeric_unit != numeric_kind {
            return Err(CatalogError::FormatRule { attribute: attr.key() });
        }
    }
    Ok(())
}

pub fn format_value(attr: Attribute, value: AttrValue<'_>) -> String {
    rule_for(attr).apply(value)
}
