// tests/selection_session.rs
//
// Session behaviour seen through a recording presenter.
//
use std::sync::Arc;

use used_car_price::CompareError;
use used_car_price::catalog::Catalog;
use used_car_price::compare::{ChartData, ComparisonSession, ComparisonTable, Slot, SlotCard};
use used_car_price::presenter::Presenter;
use used_car_price::specs::Attribute;

#[derive(Default)]
struct Recorder {
    cards: Vec<SlotCard>,
    tables: usize,
    charts: Vec<bool>,
    notices: Vec<String>,
}

impl Presenter for Recorder {
    fn slot(&mut self, card: &SlotCard) {
        self.cards.push(card.clone());
    }
    fn table(&mut self, _table: &ComparisonTable) {
        self.tables += 1;
    }
    fn chart(&mut self, chart: Option<&ChartData>) {
        self.charts.push(chart.is_some());
    }
    fn notify(&mut self, msg: &str) {
        self.notices.push(msg.to_string());
    }
}

fn session() -> ComparisonSession<Recorder> {
    ComparisonSession::new(Arc::new(Catalog::builtin()), Recorder::default())
}

#[test]
fn new_session_renders_placeholders() {
    let s = session();
    let p = s.presenter();
    assert_eq!(p.cards.len(), 3);
    assert!(p.cards.iter().all(SlotCard::is_placeholder));
    assert_eq!(p.cards[1].title, "Select Car 2");
    assert_eq!(p.cards[1].header, "Car 2");
    assert_eq!(p.charts, vec![false]);
    assert!(s.table().is_placeholder());
}

#[test]
fn select_fills_card_summary() {
    let mut s = session();
    s.select(Slot::One, "Swift").unwrap();

    let card = s.card(Slot::One);
    assert_eq!(card.title, "Maruti Swift VXi");
    assert_eq!(card.price, "7.5 L");
    assert_eq!(card.mileage, "22.38 kmpl");
    assert_eq!(card.power, "88.5 bhp");
    assert!(s.chart().is_none());
}

#[test]
fn unknown_id_leaves_slot_unchanged() {
    let mut s = session();
    s.select(Slot::Two, "Verna").unwrap();
    let before = s.presenter().tables;

    let err = s.select(Slot::Two, "Beetle").unwrap_err();
    assert_eq!(err, CompareError::NotFound("Beetle".into()));
    assert_eq!(s.selection().get(Slot::Two).map(|r| r.id.as_str()), Some("Verna"));
    assert_eq!(s.presenter().notices.len(), 1);
    assert!(s.presenter().notices[0].contains("Beetle"));
    // No re-render for a rejected selection
    assert_eq!(s.presenter().tables, before);
}

#[test]
fn chart_appears_with_two_cars() {
    let mut s = session();
    s.select(Slot::One, "Swift").unwrap();
    assert_eq!(s.presenter().charts.last(), Some(&false));

    s.select(Slot::Three, "Nexon").unwrap();
    assert_eq!(s.presenter().charts.last(), Some(&true));

    let chart = s.chart().unwrap();
    assert_eq!(chart.labels, vec!["Maruti Swift VXi", "Tata Nexon XZ+"]);
    assert_eq!(chart.price, vec![Some(7.5), Some(10.5)]);
    assert_eq!(chart.mileage, vec![Some(22.38), Some(17.01)]);
}

#[test]
fn reselecting_a_slot_replaces_it() {
    let mut s = session();
    s.select(Slot::One, "Swift").unwrap();
    s.select(Slot::One, "Verna").unwrap();
    assert_eq!(s.selection().populated_count(), 1);
    assert_eq!(s.card(Slot::One).title, "Hyundai Verna SX");
}

#[test]
fn reset_restores_empty_state_and_is_idempotent() {
    let mut s = session();
    s.select(Slot::One, "Swift").unwrap();
    s.select(Slot::Two, "Verna").unwrap();

    s.reset();
    assert!(s.selection().is_empty());
    assert!(s.table().is_placeholder());
    assert!(s.chart().is_none());
    for slot in Slot::ALL {
        assert!(s.card(slot).is_placeholder());
        assert_eq!(s.table().text(Attribute::Price, slot), "--");
    }
    assert_eq!(s.presenter().charts.last(), Some(&false));

    s.reset();
    assert!(s.table().is_placeholder());
}

#[test]
fn slot_numbers_outside_one_to_three_are_rejected() {
    let mut s = session();
    assert_eq!(s.select_number(0, "Swift"), Err(CompareError::InvalidSlot(0)));
    assert_eq!(s.select_number(4, "Swift"), Err(CompareError::InvalidSlot(4)));
    assert!(s.selection().is_empty());

    s.select_number(3, "Nexon").unwrap();
    assert!(s.selection().get(Slot::Three).is_some());
    assert_eq!(Slot::try_from(2).map(Slot::number), Ok(2));
}
