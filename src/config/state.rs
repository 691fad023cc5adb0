// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::compare::Slot;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Slot whose selection modal is open
    pub modal_slot: Option<Slot>,
    /// Catalog id highlighted in the open modal
    pub modal_choice: Option<String>,

    /// Compare page -> show/hide the chart
    pub show_chart: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            current_page_index: 0,
            modal_slot: None,
            modal_choice: None,
            show_chart: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
