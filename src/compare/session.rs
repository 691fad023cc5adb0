// src/compare/session.rs
//
// Owns the comparison state for one page session. All mutation goes through
// `select` / `reset`; each successful mutation re-renders slots, table and
// chart through the presenter so the surface never drifts from the state.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::error::CompareError;
use crate::presenter::Presenter;

use super::{
    card::SlotCard,
    chart::ChartData,
    engine::{self, ComparisonTable},
    selection::{SelectionState, Slot},
};

pub struct ComparisonSession<P: Presenter> {
    catalog: Arc<Catalog>,
    selection: SelectionState,
    table: ComparisonTable,
    chart: Option<ChartData>,
    presenter: P,
}

impl<P: Presenter> ComparisonSession<P> {
    /// Start with every slot empty and render the empty state.
    pub fn new(catalog: Arc<Catalog>, presenter: P) -> Self {
        let mut session = Self {
            catalog,
            selection: SelectionState::new(),
            table: ComparisonTable::placeholder(),
            chart: None,
            presenter,
        };
        session.render();
        session
    }

    /// Put catalog vehicle `id` into `slot`.
    /// Unknown ids leave the slot as it was and are reported to the presenter.
    pub fn select(&mut self, slot: Slot, id: &str) -> Result<(), CompareError> {
        let record = match self.catalog.lookup(id) {
            Ok(r) => r,
            Err(e) => {
                loge!("Compare: slot {slot} ← '{id}' rejected: {e}");
                self.presenter.notify(&e.to_string());
                return Err(e);
            }
        };
        logf!("Compare: slot {slot} ← {}", record.name);
        self.selection.select(slot, record);
        self.render();
        Ok(())
    }

    /// Same as `select`, with a 1-based slot number from outside the typed UI.
    pub fn select_number(&mut self, slot: u8, id: &str) -> Result<(), CompareError> {
        let slot = Slot::new(slot)?;
        self.select(slot, id)
    }

    /// Clear every slot, restore placeholders and tear down the chart.
    /// Safe to call when already empty.
    pub fn reset(&mut self) {
        logf!("Compare: reset ({} slot(s) were filled)", self.selection.populated_count());
        self.selection.clear_all();
        self.render();
    }

    fn render(&mut self) {
        self.table = engine::evaluate(&self.selection);

        for slot in Slot::ALL {
            let card = match self.selection.get(slot) {
                Some(rec) => SlotCard::from_record(slot, rec),
                None => SlotCard::placeholder(slot),
            };
            self.presenter.slot(&card);
        }

        self.presenter.table(&self.table);

        self.chart = ChartData::from_selection(&self.selection);
        self.presenter.chart(self.chart.as_ref());
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn table(&self) -> &ComparisonTable {
        &self.table
    }

    pub fn chart(&self) -> Option<&ChartData> {
        self.chart.as_ref()
    }

    pub fn card(&self, slot: Slot) -> SlotCard {
        match self.selection.get(slot) {
            Some(rec) => SlotCard::from_record(slot, rec),
            None => SlotCard::placeholder(slot),
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
