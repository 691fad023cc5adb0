// src/gui/components/result_panel.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

use super::chart;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Estimated resale value");
    ui.add_space(4.0);

    if app.flow.is_pending() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().size(18.0));
            ui.label("Estimating…");
        });
        return;
    }

    let Some(estimate) = app.flow.estimate() else {
        ui.label("Fill in the vehicle details and press Predict to get an estimate.");
        return;
    };

    ui.label(RichText::new(estimate.predicted_text()).size(26.0).strong());
    ui.add_space(6.0);

    egui::Grid::new("estimate_details")
        .num_columns(2)
        .spacing([16.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            for (label, value) in estimate.detail_lines() {
                ui.label(RichText::new(label).weak());
                ui.label(value);
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    chart::price(ui, &estimate.chart());
}
