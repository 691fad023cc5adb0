// src/compare/mod.rs
//! Three-slot vehicle comparison.
//!
//! `selection` holds which vehicle sits in which slot, `engine` classifies
//! every attribute row, `card` and `chart` shape the summary and chart
//! outputs, and `session` ties them together behind a `Presenter`.

pub mod card;
pub mod chart;
pub mod engine;
pub mod selection;
pub mod session;

pub use card::SlotCard;
pub use chart::ChartData;
pub use engine::{Classification, ComparisonTable, Emission, Row, classify, evaluate};
pub use selection::{SelectionState, Slot};
pub use session::ComparisonSession;
