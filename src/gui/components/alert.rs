// src/gui/components/alert.rs
//
// Single blocking message window; one at a time, dismissed with OK.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    // Session notices (unknown vehicle) share the alert window
    if app.alert.is_none() {
        app.alert = app.session.presenter_mut().notice.take();
    }
    let Some(msg) = app.alert.clone() else { return };

    let mut dismissed = false;
    egui::Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(msg);
            ui.add_space(6.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.alert = None;
    }
}
