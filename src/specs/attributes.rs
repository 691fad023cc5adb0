// src/specs/attributes.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Price,
    Fuel,
    Transmission,
    Mileage,
    Power,
    Torque,
    EngineCc,
    TopSpeed,
    Touchscreen,
    Sunroof,
    AcType,
    SeatMaterial,
    Length,
    Width,
    BootSpace,
    GroundClearance,
    FuelTank,
    SafetyRating,
    Airbags,
    ParkingSensors,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrKind {
    Numeric,
    Categorical,
}

/// Which end of a numeric range is the advantageous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

impl Direction {
    #[inline]
    pub fn higher_is_better(self) -> bool {
        matches!(self, Direction::HigherIsBetter)
    }
}

use Attribute::*;

impl Attribute {
    /// Table order.
    pub const ALL: [Attribute; 20] = [
        Price, Fuel, Transmission, Mileage, Power, Torque, EngineCc, TopSpeed,
        Touchscreen, Sunroof, AcType, SeatMaterial, Length, Width, BootSpace,
        GroundClearance, FuelTank, SafetyRating, Airbags, ParkingSensors,
    ];

    /// Key used in catalog files.
    pub fn key(self) -> &'static str {
        match self {
            Price           => "price",
            Fuel            => "fuel",
            Transmission    => "transmission",
            Mileage         => "mileage",
            Power           => "power",
            Torque          => "torque",
            EngineCc        => "engine_cc",
            TopSpeed        => "top_speed",
            Touchscreen     => "touchscreen",
            Sunroof         => "sunroof",
            AcType          => "ac_type",
            SeatMaterial    => "seat_material",
            Length          => "length",
            Width           => "width",
            BootSpace       => "boot_space",
            GroundClearance => "ground_clearance",
            FuelTank        => "fuel_tank",
            SafetyRating    => "safety_rating",
            Airbags         => "airbags",
            ParkingSensors  => "parking_sensors",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Price           => "Ex-showroom Price",
            Fuel            => "Fuel Type",
            Transmission    => "Transmission",
            Mileage         => "Mileage",
            Power           => "Max Power",
            Torque          => "Max Torque",
            EngineCc        => "Engine",
            TopSpeed        => "Top Speed",
            Touchscreen     => "Touchscreen",
            Sunroof         => "Sunroof",
            AcType          => "Climate Control",
            SeatMaterial    => "Seat Upholstery",
            Length          => "Length",
            Width           => "Width",
            BootSpace       => "Boot Space",
            GroundClearance => "Ground Clearance",
            FuelTank        => "Fuel Tank",
            SafetyRating    => "Safety Rating",
            Airbags         => "Airbags",
            ParkingSensors  => "Parking Sensors",
        }
    }

    pub fn kind(self) -> AttrKind {
        match self {
            Fuel | Transmission | Touchscreen | Sunroof | AcType | SeatMaterial
            | ParkingSensors => AttrKind::Categorical,
            _ => AttrKind::Numeric,
        }
    }

    /// The comparison rule. `None` → never highlighted.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Price => Some(Direction::LowerIsBetter),
            Mileage | Power | Torque | EngineCc | TopSpeed | Length | Width
            | BootSpace | GroundClearance | FuelTank | SafetyRating | Airbags => {
                Some(Direction::HigherIsBetter)
            }
            Fuel | Transmission | Touchscreen | Sunroof | AcType | SeatMaterial
            | ParkingSensors => None,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.key() == key)
    }

    /// Attributes covered by the comparison rule, in table order.
    pub fn compared() -> impl Iterator<Item = (Attribute, Direction)> {
        Self::ALL.iter().filter_map(|a| a.direction().map(|d| (*a, d)))
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
