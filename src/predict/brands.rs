// src/predict/brands.rs
//
// Vocabularies for the prediction form: brand → models, cities, conditions.
// Matches the data the prediction model was trained on.

pub static BRAND_MODELS: &[(&str, &[&str])] = &[
    ("Maruti", &[
        "Maruti Swift", "Maruti Baleno", "Maruti Wagon R", "Maruti Dzire",
        "Maruti Brezza", "Maruti Ertiga",
    ]),
    ("Hyundai", &[
        "Hyundai i20", "Hyundai Creta", "Hyundai Venue", "Hyundai Verna",
        "Hyundai Grand i10",
    ]),
    ("Honda", &["Honda Amaze", "Honda City", "Honda Jazz", "Honda WR-V"]),
    ("Tata", &[
        "Tata Tiago", "Tata Tigor", "Tata Altroz", "Tata Nexon", "Tata Harrier",
        "Tata Safari",
    ]),
    ("Mahindra", &[
        "Mahindra Scorpio", "Mahindra XUV300", "Mahindra XUV700", "Mahindra Thar",
        "Mahindra Bolero",
    ]),
    ("Toyota", &[
        "Toyota Innova", "Toyota Fortuner", "Toyota Glanza",
        "Toyota Urban Cruiser Hyryder",
    ]),
    ("Kia", &["Kia Seltos", "Kia Sonet", "Kia Carens"]),
    ("Volkswagen", &["Volkswagen Polo", "Volkswagen Virtus"]),
    ("Skoda", &["Skoda Kushaq", "Skoda Slavia"]),
    ("Renault", &["Renault Kwid", "Renault Triber", "Renault Duster"]),
    ("Nissan", &["Nissan Magnite", "Nissan Kicks"]),
    ("MG", &["MG Hector", "MG Astor"]),
    ("Jeep", &["Jeep Compass", "Jeep Meridian"]),
];

pub static CITIES: &[&str] = &[
    "Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata", "Hyderabad", "Pune", "Ahmedabad",
];

pub fn brands() -> impl Iterator<Item = &'static str> {
    BRAND_MODELS.iter().map(|(b, _)| *b)
}

/// Models sold under `brand`, or `None` for an unknown brand.
pub fn models_for(brand: &str) -> Option<&'static [&'static str]> {
    BRAND_MODELS
        .iter()
        .find(|(b, _)| *b == brand)
        .map(|(_, models)| *models)
}

pub fn brand_of(model: &str) -> Option<&'static str> {
    BRAND_MODELS
        .iter()
        .find(|(_, models)| models.contains(&model))
        .map(|(b, _)| *b)
}

pub fn is_city(name: &str) -> bool {
    CITIES.contains(&name)
}
