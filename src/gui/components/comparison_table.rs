// src/gui/components/comparison_table.rs
//
// Attribute rows × slot columns. Best cells are tinted green, Worst red.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{
    compare::{Classification, Slot},
    gui::app::App,
};

const BEST: Color32 = Color32::from_rgb(46, 160, 67);
const WORST: Color32 = Color32::from_rgb(218, 54, 51);

fn cell(ui: &mut egui::Ui, text: &str, class: Classification) {
    let rich = RichText::new(text);
    let rich = match class {
        Classification::Best => rich.color(BEST).strong(),
        Classification::Worst => rich.color(WORST).strong(),
        Classification::Neutral => rich,
        Classification::NotApplicable => rich.weak(),
    };
    ui.label(rich);
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let headers: Vec<String> = app.session.presenter().cards.iter().map(|c| c.header.clone()).collect();
    let table = app.session.table();

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(170.0).at_least(120.0).clip(true))
        .columns(Column::remainder().at_least(110.0).clip(true), Slot::ALL.len())
        .header(24.0, |mut header| {
            header.col(|ui| { ui.strong("Feature"); });
            for h in &headers {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for row in &table.rows {
                body.row(22.0, |mut tr| {
                    tr.col(|ui| { ui.label(row.attribute.label()); });
                    for slot in Slot::ALL {
                        tr.col(|ui| cell(ui, row.text(slot), row.classification(slot)));
                    }
                });
            }
        });
}
