// src/gui/components/mod.rs
pub mod alert;
pub mod chart;
pub mod comparison_table;
pub mod predict_form;
pub mod result_panel;
pub mod selection_modal;
pub mod slot_cards;
pub mod tabs;
