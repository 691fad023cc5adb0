// src/gui/actions/compare.rs
use crate::{compare::Slot, gui::app::App};

pub fn select(app: &mut App, slot: Slot, id: &str) {
    // Unknown ids are reported through the presenter (status + alert)
    if app.session.select(slot, id).is_ok() {
        logd!("UI: slot {slot} now {}", app.session.card(slot).title);
    }
}

pub fn reset(app: &mut App) {
    app.session.reset();
    app.state.gui.modal_slot = None;
    app.state.gui.modal_choice = None;
}
