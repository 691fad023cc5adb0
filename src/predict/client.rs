// src/predict/client.rs
//
// HTTP POST of a `PredictionRequest` as JSON. Blocking; callers that must not
// block (the GUI) run it on a worker thread.

use std::time::Duration;

use reqwest::blocking::Client;

use super::request::PredictionRequest;
use super::response::{self, Estimate};
use crate::config::options::PredictOptions;
use crate::error::PredictError;

/// Anything that can turn a request into an estimate.
pub trait Predictor {
    fn predict(&self, request: &PredictionRequest) -> Result<Estimate, PredictError>;
}

pub struct PredictClient {
    http: Client,
    endpoint: String,
}

impl PredictClient {
    pub fn new(opts: &PredictOptions) -> Result<Self, PredictError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .user_agent(concat!("used_car_price/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, endpoint: opts.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Predictor for PredictClient {
    fn predict(&self, request: &PredictionRequest) -> Result<Estimate, PredictError> {
        logd!("Predict: POST {} ({} {})", self.endpoint, request.brand, request.car_name);
        let resp = self.http.post(&self.endpoint).json(request).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        logd!("Predict: {} ← {} byte(s)", status, body.len());
        response::interpret(status, &body)
    }
}
