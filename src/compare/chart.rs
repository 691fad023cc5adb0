// src/compare/chart.rs
//
// Series handed to the charting surface once two or more slots are filled.

use super::selection::SelectionState;

pub const PRICE_AXIS: &str = "Price (₹ Lakhs)";
pub const MILEAGE_AXIS: &str = "Mileage (kmpl)";

#[derive(Clone, Debug, PartialEq)]
pub struct ChartData {
    /// Display names, slot order.
    pub labels: Vec<String>,
    pub price: Vec<Option<f64>>,
    pub mileage: Vec<Option<f64>>,
}

impl ChartData {
    /// `None` until at least two slots are populated.
    pub fn from_selection(selection: &SelectionState) -> Option<Self> {
        if selection.populated_count() < 2 {
            return None;
        }
        let mut data = ChartData { labels: Vec::new(), price: Vec::new(), mileage: Vec::new() };
        for (_, rec) in selection.populated() {
            data.labels.push(rec.name.clone());
            data.price.push(rec.price);
            data.mileage.push(rec.mileage);
        }
        Some(data)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
