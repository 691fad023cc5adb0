// src/specs/mod.rs
//! # Attribute specs
//!
//! Static knowledge about the attributes a vehicle record can carry.
//!
//! ## What lives here
//! - **The attribute set** (`attributes::Attribute`): the wire key used by the
//!   catalog file, the row label, and whether the value is numeric or categorical.
//! - **Directionality** (`Attribute::direction`): which numeric attributes are
//!   compared, and whether higher or lower wins. Categorical attributes have no
//!   direction and are never highlighted.
//! - **Display rules** (`format::rule_for`): unit prefix/suffix and precision
//!   per attribute. The mapping is an exhaustive `match`, so adding an attribute
//!   without a rule does not compile; `format::validate_rules` additionally
//!   checks that numeric attributes carry numeric units and vice versa.
//!
//! ## What does **not** live here
//! - Vehicle data (`catalog`).
//! - Best/worst classification (`compare::engine`).
//!
//! In short: **`specs` knows what an attribute means.** Other layers decide
//! which vehicles are compared and how the result is drawn.
pub mod attributes;
pub mod format;

pub use attributes::{AttrKind, Attribute, Direction};
pub use format::{FormatRule, Unit};
