// src/gui/actions/mod.rs
//
// Folder module facade. UI components call these; they never touch the
// session or the prediction flow directly.

pub mod compare; // src/gui/actions/compare.rs
pub mod predict; // src/gui/actions/predict.rs
