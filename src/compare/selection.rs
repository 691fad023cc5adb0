// src/compare/selection.rs

use std::sync::Arc;

use crate::catalog::VehicleRecord;
use crate::config::consts::SLOT_COUNT;
use crate::error::CompareError;

/// One of the three comparison positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    One,
    Two,
    Three,
}

impl Slot {
    pub const ALL: [Slot; SLOT_COUNT] = [Slot::One, Slot::Two, Slot::Three];

    /// 1-based slot number → `Slot`.
    pub fn new(n: u8) -> Result<Self, CompareError> {
        match n {
            1 => Ok(Slot::One),
            2 => Ok(Slot::Two),
            3 => Ok(Slot::Three),
            other => Err(CompareError::InvalidSlot(other)),
        }
    }

    /// 1-based.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// 0-based.
    pub fn index(self) -> usize {
        match self {
            Slot::One => 0,
            Slot::Two => 1,
            Slot::Three => 2,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = CompareError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Slot::new(n)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which catalog record (if any) sits in each slot.
/// Holds shared handles into the catalog, never copies.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    slots: [Option<Arc<VehicleRecord>>; SLOT_COUNT],
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is in `slot`.
    pub fn select(&mut self, slot: Slot, record: Arc<VehicleRecord>) {
        self.slots[slot.index()] = Some(record);
    }

    pub fn clear_all(&mut self) {
        self.slots = Default::default();
    }

    pub fn get(&self, slot: Slot) -> Option<&VehicleRecord> {
        self.slots[slot.index()].as_deref()
    }

    /// Populated slots in slot order.
    pub fn populated(&self) -> impl Iterator<Item = (Slot, &VehicleRecord)> {
        Slot::ALL
            .into_iter()
            .filter_map(|s| self.get(s).map(|r| (s, r)))
    }

    pub fn populated_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.populated_count() == 0
    }
}
