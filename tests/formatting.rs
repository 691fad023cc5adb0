// tests/formatting.rs
use used_car_price::catalog::AttrValue;
use used_car_price::specs::{Attribute, format::{format_number, format_value, rule_for, validate_rules}};

#[test]
fn display_rules_match_attribute_kinds() {
    validate_rules().unwrap();
}

#[test]
fn numbers_use_shortest_form() {
    assert_eq!(format_number(113.0, None), "113");
    assert_eq!(format_number(88.5, None), "88.5");
    assert_eq!(format_number(22.38, None), "22.38");
    assert_eq!(format_number(5.4249, Some(2)), "5.42");
}

#[test]
fn units_per_attribute() {
    let n = |a, v| format_value(a, AttrValue::Number(v));
    assert_eq!(n(Attribute::Price, 12.8), "₹ 12.8 L");
    assert_eq!(n(Attribute::Mileage, 18.6), "18.6 kmpl");
    assert_eq!(n(Attribute::Power, 113.18), "113.18 bhp");
    assert_eq!(n(Attribute::Torque, 144.0), "144 Nm");
    assert_eq!(n(Attribute::EngineCc, 1497.0), "1497 cc");
    assert_eq!(n(Attribute::TopSpeed, 190.0), "190 km/h");
    assert_eq!(n(Attribute::Length, 4535.0), "4535 mm");
    assert_eq!(n(Attribute::BootSpace, 528.0), "528 L");
    assert_eq!(n(Attribute::SafetyRating, 5.0), "5 ★");
    assert_eq!(n(Attribute::Airbags, 6.0), "6");
}

#[test]
fn categorical_values_pass_through() {
    assert_eq!(format_value(Attribute::Sunroof, AttrValue::Text("Yes (Electric)")), "Yes (Electric)");
    assert!(!rule_for(Attribute::Fuel).unit.is_numeric());
}

#[test]
fn every_attribute_has_a_distinct_key() {
    for a in Attribute::ALL {
        assert_eq!(Attribute::from_key(a.key()), Some(a));
    }
    assert_eq!(Attribute::from_key("colour"), None);
    // Only the numeric attributes take part in best/worst
    assert_eq!(Attribute::compared().count(), 13);
}
