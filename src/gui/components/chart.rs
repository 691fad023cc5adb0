// src/gui/components/chart.rs
//
// Minimal bar charts drawn with the painter. Missing values draw no bar.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::compare::ChartData;
use crate::compare::chart::{MILEAGE_AXIS, PRICE_AXIS};
use crate::predict::PriceChart;
use crate::specs::format::format_number;

const PRICE_COLOR: Color32 = Color32::from_rgb(54, 162, 235);
const MILEAGE_COLOR: Color32 = Color32::from_rgb(255, 159, 64);
const SHOWROOM_COLOR: Color32 = Color32::from_rgb(150, 150, 150);
const PREDICTED_COLOR: Color32 = Color32::from_rgb(46, 160, 67);

const CHART_H: f32 = 180.0;
const LABEL_H: f32 = 18.0;

fn bars(ui: &mut egui::Ui, title: &str, labels: &[&str], values: &[Option<f64>], colors: &[Color32]) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).strong());

        let width = ui.available_width().max(120.0);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, CHART_H), Sense::hover());
        let painter = ui.painter_at(rect);
        let text_color = ui.visuals().text_color();

        painter.line_segment(
            [rect.left_bottom() - Vec2::new(0.0, LABEL_H), rect.right_bottom() - Vec2::new(0.0, LABEL_H)],
            Stroke::new(1.0, ui.visuals().weak_text_color()),
        );

        let max = values.iter().flatten().copied().fold(0.0_f64, f64::max);
        if labels.is_empty() || max <= 0.0 {
            return;
        }

        let plot_h = rect.height() - 2.0 * LABEL_H;
        let slot_w = rect.width() / labels.len() as f32;
        let bar_w = (slot_w * 0.6).min(80.0);

        for (i, label) in labels.iter().enumerate() {
            let cx = rect.left() + slot_w * (i as f32 + 0.5);
            let base = rect.bottom() - LABEL_H;

            painter.text(
                Pos2::new(cx, rect.bottom() - LABEL_H / 2.0),
                Align2::CENTER_CENTER,
                *label,
                FontId::proportional(11.0),
                text_color,
            );

            let Some(v) = values.get(i).copied().flatten() else { continue };
            let h = (v / max) as f32 * plot_h;
            let bar = Rect::from_min_max(Pos2::new(cx - bar_w / 2.0, base - h), Pos2::new(cx + bar_w / 2.0, base));
            let color = colors.get(i % colors.len().max(1)).copied().unwrap_or(PRICE_COLOR);
            painter.rect_filled(bar, 3.0, color);
            painter.text(
                bar.center_top() - Vec2::new(0.0, 8.0),
                Align2::CENTER_CENTER,
                format_number(v, Some(2)),
                FontId::proportional(11.0),
                text_color,
            );
        }
    });
}

/// Price and mileage side by side, one bar per populated slot.
pub fn comparison(ui: &mut egui::Ui, chart: &ChartData) {
    let labels: Vec<&str> = chart.labels.iter().map(String::as_str).collect();
    ui.columns(2, |cols| {
        bars(&mut cols[0], PRICE_AXIS, &labels, &chart.price, &[PRICE_COLOR]);
        bars(&mut cols[1], MILEAGE_AXIS, &labels, &chart.mileage, &[MILEAGE_COLOR]);
    });
}

/// Showroom vs predicted.
pub fn price(ui: &mut egui::Ui, chart: &PriceChart) {
    let values = chart.values.map(Some);
    bars(ui, PRICE_AXIS, &chart.labels, &values, &[SHOWROOM_COLOR, PREDICTED_COLOR]);
}
