// src/gui/presenter.rs
use std::sync::{Arc, Mutex};

use crate::compare::{ChartData, ComparisonTable, SlotCard};
use crate::presenter::Presenter;

/// Session → GUI bridge. Keeps what the Compare page draws between frames.
pub struct GuiPresenter {
    status: Arc<Mutex<String>>,
    pub cards: Vec<SlotCard>,
    pub chart_visible: bool,
    /// Unknown-vehicle message waiting to be shown in the alert window.
    pub notice: Option<String>,
}

impl GuiPresenter {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, cards: Vec::new(), chart_visible: false, notice: None }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Presenter for GuiPresenter {
    fn slot(&mut self, card: &SlotCard) {
        // A render pass always starts at slot 1
        if card.slot.index() == 0 {
            self.cards.clear();
        }
        self.cards.push(card.clone());
    }

    fn table(&mut self, table: &ComparisonTable) {
        if table.is_placeholder() {
            self.set_status("Pick cars to compare");
        } else {
            let filled = self.cards.iter().filter(|c| !c.is_placeholder()).count();
            self.set_status(format!("Comparing {filled} car(s)"));
        }
    }

    fn chart(&mut self, chart: Option<&ChartData>) {
        self.chart_visible = chart.is_some();
    }

    fn notify(&mut self, msg: &str) {
        self.set_status(format!("Error: {msg}"));
        self.notice = Some(s!(msg));
    }
}
