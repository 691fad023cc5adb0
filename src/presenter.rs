// src/presenter.rs
use crate::compare::{ChartData, ComparisonTable, SlotCard};

/// Rendering surface for the comparison session.
/// Frontends (GUI/CLI) implement this to put the results in front of users.
pub trait Presenter {
    /// A slot's summary card changed (filled or back to its placeholder).
    fn slot(&mut self, _card: &SlotCard) {}

    /// The table was re-evaluated.
    fn table(&mut self, _table: &ComparisonTable) {}

    /// `Some` → show/redraw the chart, `None` → tear it down and hide it.
    fn chart(&mut self, _chart: Option<&ChartData>) {}

    /// User-visible error (e.g. unknown vehicle).
    fn notify(&mut self, _msg: &str) {}
}

/// A no-op presenter.
pub struct NullPresenter;
impl Presenter for NullPresenter {}
