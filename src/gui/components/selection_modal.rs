// src/gui/components/selection_modal.rs
//
// Catalog picker for one slot. Confirm → actions::compare::select.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(slot) = app.state.gui.modal_slot else { return };

    let mut open = true;
    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new(format!("Select Car {slot}"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                for rec in app.session.catalog().records() {
                    let selected = app.state.gui.modal_choice.as_deref() == Some(rec.id.as_str());
                    let label = format!("{}  ·  {}", rec.name, or_dash!(rec.price, |p| format!("₹ {p} L")));
                    let resp = ui.selectable_label(selected, label);
                    if resp.clicked() {
                        app.state.gui.modal_choice = Some(rec.id.clone());
                    }
                    if resp.double_clicked() {
                        confirm = true;
                    }
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                let can_confirm = app.state.gui.modal_choice.is_some();
                if ui.add_enabled(can_confirm, egui::Button::new("Select")).clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        if let Some(id) = app.state.gui.modal_choice.take() {
            actions::compare::select(app, slot, &id);
        }
        app.state.gui.modal_slot = None;
    } else if cancel || !open {
        app.state.gui.modal_slot = None;
        app.state.gui.modal_choice = None;
    }
}
