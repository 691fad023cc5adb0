// src/gui/pages/compare.rs
use eframe::egui;

use crate::gui::{actions, app::App, components};

use super::{Page, PageKind};

pub struct ComparePage;
pub static PAGE: ComparePage = ComparePage;

impl Page for ComparePage {
    fn kind(&self) -> PageKind { PageKind::Compare }
    fn title(&self) -> &'static str { "Compare Cars" }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        components::slot_cards::draw(ui, app);

        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                actions::compare::reset(app);
            }
            ui.checkbox(&mut app.state.gui.show_chart, "Show chart");
        });
        ui.separator();

        if app.state.gui.show_chart && app.session.presenter().chart_visible {
            if let Some(chart) = app.session.chart() {
                components::chart::comparison(ui, chart);
                ui.separator();
            }
        }

        components::comparison_table::draw(ui, app);
    }

    fn on_enter(&self, app: &mut App) {
        let n = app.session.selection().populated_count();
        app.status(if n == 0 { s!("Pick cars to compare") } else { format!("Comparing {n} car(s)") });
    }
}
