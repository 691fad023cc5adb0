// src/predict/mod.rs
//! Price prediction: the typed form, the HTTP round-trip to the estimator
//! service, response interpretation and the submission flow.

pub mod brands;
pub mod client;
pub mod flow;
pub mod request;
pub mod response;

pub use client::{PredictClient, Predictor};
pub use flow::{Outcome, PredictionFlow, Ticket};
pub use request::{Condition, Field, FuelType, PredictionRequest, SellerType, Transmission};
pub use response::{Estimate, PriceChart, interpret};
