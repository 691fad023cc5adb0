// src/catalog/builtin.rs
//
// The three vehicles shipped with the app. Safety ratings are GNCAP stars.

use super::record::VehicleRecord;

fn text(s: &str) -> Option<String> {
    Some(s!(s))
}

pub fn records() -> Vec<VehicleRecord> {
    vec![
        VehicleRecord {
            id: s!("Swift"),
            name: s!("Maruti Swift VXi"),
            img: s!("https://i.imgur.com/gJ6hG9f.png"),
            price: Some(7.5),
            fuel: text("Petrol"),
            transmission: text("Manual"),
            mileage: Some(22.38),
            power: Some(88.50),
            torque: Some(113.0),
            engine_cc: Some(1197.0),
            top_speed: Some(165.0),
            touchscreen: text("Yes (7-inch)"),
            sunroof: text("No"),
            ac_type: text("Automatic Climate Control"),
            seat_material: text("Fabric"),
            length: Some(3845.0),
            width: Some(1735.0),
            boot_space: Some(268.0),
            ground_clearance: Some(163.0),
            fuel_tank: Some(37.0),
            safety_rating: Some(2.0),
            airbags: Some(2.0),
            parking_sensors: text("Yes"),
        },
        VehicleRecord {
            id: s!("Verna"),
            name: s!("Hyundai Verna SX"),
            img: s!("https://i.imgur.com/8fS9p3H.png"),
            price: Some(12.8),
            fuel: text("Petrol"),
            transmission: text("Automatic (CVT)"),
            mileage: Some(18.6),
            power: Some(113.18),
            torque: Some(144.0),
            engine_cc: Some(1497.0),
            top_speed: Some(190.0),
            touchscreen: text("Yes (8-inch)"),
            sunroof: text("Yes (Electric)"),
            ac_type: text("Automatic Climate Control"),
            seat_material: text("Leatherette"),
            length: Some(4535.0),
            width: Some(1765.0),
            boot_space: Some(528.0),
            ground_clearance: Some(165.0),
            fuel_tank: Some(45.0),
            safety_rating: Some(5.0),
            airbags: Some(6.0),
            parking_sensors: text("Yes + Camera"),
        },
        VehicleRecord {
            id: s!("Nexon"),
            name: s!("Tata Nexon XZ+"),
            img: s!("https://i.imgur.com/bY3A1bE.png"),
            price: Some(10.5),
            fuel: text("Petrol"),
            transmission: text("Manual"),
            mileage: Some(17.01),
            power: Some(118.27),
            torque: Some(170.0),
            engine_cc: Some(1199.0),
            top_speed: Some(180.0),
            touchscreen: text("Yes (7-inch)"),
            sunroof: text("Yes (Electric)"),
            ac_type: text("Automatic Climate Control"),
            seat_material: text("Fabric"),
            length: Some(3993.0),
            width: Some(1811.0),
            boot_space: Some(350.0),
            ground_clearance: Some(209.0),
            fuel_tank: Some(44.0),
            safety_rating: Some(5.0),
            airbags: Some(6.0),
            parking_sensors: text("Yes + Camera"),
        },
    ]
}
