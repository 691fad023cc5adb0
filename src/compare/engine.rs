// src/compare/engine.rs
//
// Best/worst classification across the populated slots.
//
// Per compared attribute:
// - fewer than two values, or all values equal → every value is Neutral
// - otherwise the advantageous extreme is Best, the other extreme Worst,
//   anything in between Neutral; ties at an extreme share its class
// - an empty slot, or a record without the attribute → NotApplicable
//
// Pure function of the selection; never fails.

use crate::config::consts::{PLACEHOLDER, SLOT_COUNT};
use crate::specs::{Attribute, Direction, format};

use super::selection::{SelectionState, Slot};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Best,
    Worst,
    Neutral,
    NotApplicable,
}

use Classification::*;

/// One populated slot's value in one row.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub classification: Classification,
    /// Formatted for display; the placeholder when the record lacks the attribute.
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub attribute: Attribute,
    /// Indexed by `Slot::index()`. `None` → slot is empty.
    pub cells: [Option<Cell>; SLOT_COUNT],
}

impl Row {
    pub fn classification(&self, slot: Slot) -> Classification {
        self.cells[slot.index()]
            .as_ref()
            .map_or(NotApplicable, |c| c.classification)
    }

    pub fn text(&self, slot: Slot) -> &str {
        self.cells[slot.index()]
            .as_ref()
            .map_or(PLACEHOLDER, |c| c.text.as_str())
    }
}

/// Render instruction for a populated slot / attribute pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Emission<'a> {
    pub slot: Slot,
    pub attribute: Attribute,
    pub classification: Classification,
    pub text: &'a str,
}

/// Every attribute row for the current selection, in table order.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonTable {
    pub rows: Vec<Row>,
}

impl ComparisonTable {
    /// Empty-state table: every row, every slot empty.
    pub fn placeholder() -> Self {
        evaluate(&SelectionState::new())
    }

    pub fn row(&self, attr: Attribute) -> Option<&Row> {
        self.rows.iter().find(|r| r.attribute == attr)
    }

    pub fn classification(&self, attr: Attribute, slot: Slot) -> Classification {
        self.row(attr).map_or(NotApplicable, |r| r.classification(slot))
    }

    pub fn text(&self, attr: Attribute, slot: Slot) -> &str {
        self.row(attr).map_or(PLACEHOLDER, |r| r.text(slot))
    }

    /// One emission per populated slot per attribute.
    pub fn emissions(&self) -> impl Iterator<Item = Emission<'_>> {
        self.rows.iter().flat_map(|row| {
            Slot::ALL.into_iter().filter_map(move |slot| {
                row.cells[slot.index()].as_ref().map(|cell| Emission {
                    slot,
                    attribute: row.attribute,
                    classification: cell.classification,
                    text: &cell.text,
                })
            })
        })
    }

    pub fn is_placeholder(&self) -> bool {
        self.rows.iter().all(|r| r.cells.iter().all(Option::is_none))
    }
}

/// Classify one attribute's values. `None` entries come back `NotApplicable`.
pub fn classify(
    direction: Direction,
    values: [Option<f64>; SLOT_COUNT],
) -> [Classification; SLOT_COUNT] {
    let mut out = values.map(|v| if v.is_some() { Neutral } else { NotApplicable });

    let present = values.iter().flatten();
    if present.clone().count() < 2 {
        return out;
    }
    let min = present.clone().copied().fold(f64::INFINITY, f64::min);
    let max = present.copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return out;
    }

    let (best, worst) = if direction.higher_is_better() { (max, min) } else { (min, max) };
    for (class, value) in out.iter_mut().zip(values) {
        match value {
            Some(v) if v == best => *class = Best,
            Some(v) if v == worst => *class = Worst,
            _ => {}
        }
    }
    out
}

fn evaluate_row(selection: &SelectionState, attr: Attribute) -> Row {
    let classes = match attr.direction() {
        Some(direction) => {
            let values = Slot::ALL.map(|s| selection.get(s).and_then(|r| r.number(attr)));
            classify(direction, values)
        }
        // Not compared: present → Neutral, absent → NotApplicable
        None => Slot::ALL.map(|s| match selection.get(s).and_then(|r| r.value(attr)) {
            Some(_) => Neutral,
            None => NotApplicable,
        }),
    };

    let cells = Slot::ALL.map(|slot| {
        selection.get(slot).map(|rec| Cell {
            classification: classes[slot.index()],
            text: or_dash!(rec.value(attr), |v| format::format_value(attr, v)),
        })
    });

    Row { attribute: attr, cells }
}

/// Evaluate every attribute for the current selection.
pub fn evaluate(selection: &SelectionState) -> ComparisonTable {
    let rows = Attribute::ALL
        .into_iter()
        .map(|attr| evaluate_row(selection, attr))
        .collect();
    ComparisonTable { rows }
}
