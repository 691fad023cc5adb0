// tests/comparison_engine.rs
//
// Best/worst classification over the built-in catalog.
//
use std::sync::Arc;

use used_car_price::catalog::{Catalog, VehicleRecord};
use used_car_price::compare::{Classification::*, SelectionState, Slot, classify, evaluate};
use used_car_price::specs::{Attribute, Direction};

fn selection(ids: &[&str]) -> SelectionState {
    let catalog = Catalog::builtin();
    let mut sel = SelectionState::new();
    for (slot, id) in Slot::ALL.into_iter().zip(ids) {
        sel.select(slot, catalog.lookup(id).unwrap());
    }
    sel
}

#[test]
fn distinct_values_give_one_best_one_worst() {
    let hi = classify(Direction::HigherIsBetter, [Some(1.0), Some(3.0), Some(2.0)]);
    assert_eq!(hi, [Worst, Best, Neutral]);

    let lo = classify(Direction::LowerIsBetter, [Some(1.0), Some(3.0), Some(2.0)]);
    assert_eq!(lo, [Best, Worst, Neutral]);
}

#[test]
fn ties_at_an_extreme_share_the_class() {
    let out = classify(Direction::HigherIsBetter, [Some(2.0), Some(5.0), Some(5.0)]);
    assert_eq!(out, [Worst, Best, Best]);
}

#[test]
fn all_equal_is_neutral() {
    let out = classify(Direction::HigherIsBetter, [Some(4.0), Some(4.0), Some(4.0)]);
    assert_eq!(out, [Neutral, Neutral, Neutral]);
}

#[test]
fn fewer_than_two_values_never_highlight() {
    assert_eq!(classify(Direction::LowerIsBetter, [None, None, None]), [NotApplicable; 3]);
    assert_eq!(
        classify(Direction::LowerIsBetter, [None, Some(9.0), None]),
        [NotApplicable, Neutral, NotApplicable]
    );
}

#[test]
fn swift_vs_verna_price_and_mileage() {
    let table = evaluate(&selection(&["Swift", "Verna"]));

    assert_eq!(table.classification(Attribute::Price, Slot::One), Best);
    assert_eq!(table.classification(Attribute::Price, Slot::Two), Worst);
    assert_eq!(table.classification(Attribute::Mileage, Slot::One), Best);
    assert_eq!(table.classification(Attribute::Mileage, Slot::Two), Worst);

    // Empty third slot
    assert_eq!(table.classification(Attribute::Price, Slot::Three), NotApplicable);
    assert_eq!(table.text(Attribute::Price, Slot::Three), "--");
}

#[test]
fn equal_safety_ratings_are_neutral() {
    let table = evaluate(&selection(&["Nexon", "Verna"]));
    assert_eq!(table.classification(Attribute::SafetyRating, Slot::One), Neutral);
    assert_eq!(table.classification(Attribute::SafetyRating, Slot::Two), Neutral);
}

#[test]
fn three_cars_middle_value_is_neutral() {
    let table = evaluate(&selection(&["Swift", "Verna", "Nexon"]));

    assert_eq!(table.classification(Attribute::Price, Slot::One), Best);
    assert_eq!(table.classification(Attribute::Price, Slot::Two), Worst);
    assert_eq!(table.classification(Attribute::Price, Slot::Three), Neutral);

    // 2 vs 5 vs 5 stars
    assert_eq!(table.classification(Attribute::SafetyRating, Slot::One), Worst);
    assert_eq!(table.classification(Attribute::SafetyRating, Slot::Two), Best);
    assert_eq!(table.classification(Attribute::SafetyRating, Slot::Three), Best);
}

#[test]
fn single_car_shows_values_without_highlights() {
    let table = evaluate(&selection(&["Swift"]));

    for row in &table.rows {
        let class = row.classification(Slot::One);
        assert!(class == Neutral || class == NotApplicable, "{:?} → {:?}", row.attribute, class);
    }
    assert_eq!(table.text(Attribute::Price, Slot::One), "₹ 7.5 L");
    assert_eq!(table.text(Attribute::Torque, Slot::One), "113 Nm");
    assert_eq!(table.text(Attribute::Sunroof, Slot::One), "No");
}

#[test]
fn categorical_rows_are_never_highlighted() {
    let table = evaluate(&selection(&["Swift", "Verna", "Nexon"]));
    for slot in Slot::ALL {
        assert_eq!(table.classification(Attribute::Transmission, slot), Neutral);
        assert_eq!(table.classification(Attribute::Sunroof, slot), Neutral);
    }
}

#[test]
fn one_emission_per_populated_slot_and_attribute() {
    let table = evaluate(&selection(&["Swift", "Nexon"]));
    assert_eq!(table.emissions().count(), 2 * Attribute::ALL.len());
    assert!(table.emissions().all(|e| e.slot != Slot::Three));

    let empty = evaluate(&SelectionState::new());
    assert_eq!(empty.emissions().count(), 0);
    assert!(empty.is_placeholder());
}

#[test]
fn record_missing_an_attribute_is_skipped_for_that_row() {
    let catalog = Catalog::builtin();
    let partial = VehicleRecord {
        id: "Concept".into(),
        name: "Concept Car".into(),
        price: None,
        mileage: Some(20.0),
        ..Default::default()
    };
    let mut sel = SelectionState::new();
    sel.select(Slot::One, catalog.lookup("Swift").unwrap());
    sel.select(Slot::Two, Arc::new(partial));
    sel.select(Slot::Three, catalog.lookup("Verna").unwrap());

    let table = evaluate(&sel);
    assert_eq!(table.classification(Attribute::Price, Slot::Two), NotApplicable);
    assert_eq!(table.text(Attribute::Price, Slot::Two), "--");
    assert_eq!(table.classification(Attribute::Price, Slot::One), Best);
    assert_eq!(table.classification(Attribute::Price, Slot::Three), Worst);

    // present attributes still take part
    assert_eq!(table.text(Attribute::Mileage, Slot::Two), "20 kmpl");
    assert_eq!(table.text(Attribute::Torque, Slot::Two), "--");
}
