// src/gui/pages/predict.rs
use eframe::egui;

use crate::gui::{app::App, components};

use super::{Page, PageKind};

pub struct PredictPage;
pub static PAGE: PredictPage = PredictPage;

impl Page for PredictPage {
    fn kind(&self) -> PageKind { PageKind::Predict }
    fn title(&self) -> &'static str { "Predict Price" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.columns(2, |cols| {
            components::predict_form::draw(&mut cols[0], app);
            components::result_panel::draw(&mut cols[1], app);
        });
    }

    fn on_enter(&self, app: &mut App) {
        if !app.flow.is_pending() {
            app.status("Fill in the form and press Predict");
        }
    }
}
