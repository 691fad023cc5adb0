// src/gui/components/slot_cards.rs
//
// Three summary cards above the table. Clicking a card opens the selection
// modal for that slot.

use eframe::egui::{self, RichText};

use crate::{compare::Slot, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cards = app.session.presenter().cards.clone();
    let mut open: Option<Slot> = None;

    ui.columns(cards.len().max(1), |cols| {
        for (ui, card) in cols.iter_mut().zip(&cards) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_height(110.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&card.title).strong().size(16.0));
                    match &card.image {
                        Some(url) => { ui.hyperlink_to("photo", url); }
                        None => { ui.label(RichText::new("no car selected").weak()); }
                    }
                    ui.label(format!("Price: {}", card.price));
                    ui.label(format!("Mileage: {}", card.mileage));
                    ui.label(format!("Power: {}", card.power));
                    let text = if card.is_placeholder() { "Choose…" } else { "Change…" };
                    if ui.button(text).clicked() {
                        open = Some(card.slot);
                    }
                });
            });
        }
    });

    if let Some(slot) = open {
        logd!("UI: Selection modal open for slot {slot}");
        app.state.gui.modal_choice = app.session.selection().get(slot).map(|r| r.id.clone());
        app.state.gui.modal_slot = Some(slot);
    }
}
