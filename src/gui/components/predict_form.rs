// src/gui/components/predict_form.rs
//
// Edits `app.form` in place. Numeric widgets are clamped to the field bounds;
// the request is validated again when submitted.

use eframe::egui::{self, DragValue, emath::Numeric};

use crate::{
    gui::{actions, app::App},
    predict::{
        Condition, Field, FuelType, SellerType, Transmission,
        brands,
        request::current_year,
    },
};

fn drag<T: Numeric>(ui: &mut egui::Ui, field: Field, label: &str, value: &mut T) {
    ui.label(label);
    let mut widget = DragValue::new(value);
    if let Some(b) = field.bounds(current_year()) {
        widget = widget
            .range(b.min..=b.max.unwrap_or(f64::MAX))
            .speed(b.step);
    }
    ui.add(widget);
    ui.end_row();
}

fn choice<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut T,
    options: &[T],
    text: fn(T) -> &'static str,
) {
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(text(*value))
        .show_ui(ui, |ui| {
            for &opt in options {
                ui.selectable_value(value, opt, text(opt));
            }
        });
    ui.end_row();
}

fn text_choice<'a>(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    options: impl Iterator<Item = &'a str>,
) -> bool {
    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(value.as_str())
        .width(200.0)
        .show_ui(ui, |ui| {
            for opt in options {
                if ui.selectable_label(value.as_str() == opt, opt).clicked() && value.as_str() != opt {
                    *value = s!(opt);
                    changed = true;
                }
            }
        });
    ui.end_row();
    changed
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Vehicle details");
    ui.add_space(4.0);

    let pending = app.flow.is_pending();
    let form = &mut app.form;

    ui.add_enabled_ui(!pending, |ui| {
        egui::Grid::new("predict_form")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                if text_choice(ui, "Brand", &mut form.brand, brands::brands()) {
                    // Model list follows the brand
                    let first = brands::models_for(&form.brand).and_then(|m| m.first());
                    form.car_name = first.map(|m| s!(*m)).unwrap_or_default();
                    logd!("UI: Brand → {} (model reset to '{}')", form.brand, form.car_name);
                }
                let models = brands::models_for(&form.brand).unwrap_or_default();
                text_choice(ui, "Model", &mut form.car_name, models.iter().copied());
                text_choice(ui, "City", &mut form.city, brands::CITIES.iter().copied());

                drag(ui, Field::Year, "Year", &mut form.year);
                drag(ui, Field::PresentPrice, "Showroom price (Lakhs)", &mut form.present_price);
                drag(ui, Field::KmsDriven, "Kms driven", &mut form.kms_driven);
                drag(ui, Field::Owner, "Previous owners", &mut form.owner);

                choice(ui, "Fuel", &mut form.fuel_type, FuelType::ALL, FuelType::as_str);
                choice(ui, "Seller", &mut form.seller_type, SellerType::ALL, SellerType::as_str);
                choice(ui, "Transmission", &mut form.transmission, Transmission::ALL, Transmission::as_str);
                choice(ui, "Condition", &mut form.condition, Condition::ALL, Condition::as_str);

                drag(ui, Field::Mileage, "Mileage (km/l)", &mut form.mileage);
                drag(ui, Field::EnginePower, "Engine (cc)", &mut form.engine_power);
                drag(ui, Field::MaintenanceCost, "Maintenance (₹/yr)", &mut form.maintenance_cost);
                drag(ui, Field::InsuranceAge, "Insurance age (yrs)", &mut form.insurance_age);
                drag(ui, Field::Accidents, "Accidents", &mut form.accidents);
            });
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let predict = ui.add_enabled(
            !pending,
            egui::Button::new(egui::RichText::new("Predict").strong()),
        );
        if predict.clicked() {
            actions::predict::submit(app, ui.ctx());
        }
        if ui.button("Reset").clicked() {
            actions::predict::reset(app);
        }
    });
}
