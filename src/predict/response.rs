// src/predict/response.rs
//
// Turns a raw (status, body) pair from the prediction endpoint into an
// `Estimate` or a single user-facing error.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::PredictError;

pub const SHOWROOM_LABEL: &str = "Showroom Price";
pub const PREDICTED_LABEL: &str = "Predicted Price";

#[derive(Debug, Default, Deserialize)]
struct RawResponse {
    #[serde(default)]
    success: bool,
    predicted_price: Option<Value>,
    showroom_price: Option<Value>,
    #[serde(default)]
    details: Option<Map<String, Value>>,
    error: Option<Value>,
    message: Option<Value>,
}

/// A successful estimate as returned by the service.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub predicted_price: f64,
    pub showroom_price: f64,
    pub details: Map<String, Value>,
}

/// Two-bar price chart: showroom vs predicted.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceChart {
    pub labels: [&'static str; 2],
    pub values: [f64; 2],
}

/// Number or numeric string, as JS `Number(x)` would read it.
fn as_number(v: &Value) -> Option<f64> {
    let n: f64 = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Interpret a prediction response.
pub fn interpret(status: u16, body: &str) -> Result<Estimate, PredictError> {
    let raw: RawResponse = serde_json::from_str(body).map_err(|_| PredictError::NonJson {
        status,
        body: body.chars().take(200).collect(),
    })?;

    if !(200..300).contains(&status) {
        let message = raw
            .error
            .as_ref()
            .and_then(as_text)
            .or_else(|| raw.message.as_ref().and_then(as_text))
            .unwrap_or_else(|| format!("Server returned {status}"));
        return Err(PredictError::Server { status, message });
    }

    if !raw.success {
        return Err(PredictError::Rejected(
            raw.error
                .as_ref()
                .and_then(as_text)
                .unwrap_or_else(|| s!("Prediction failed on server.")),
        ));
    }

    let predicted_price = raw
        .predicted_price
        .as_ref()
        .and_then(as_number)
        .ok_or(PredictError::MissingPrice)?;
    let showroom_price = raw.showroom_price.as_ref().and_then(as_number).unwrap_or(0.0);

    Ok(Estimate {
        predicted_price,
        showroom_price,
        details: raw.details.unwrap_or_default(),
    })
}

impl Estimate {
    /// `₹ 5.42 Lakhs`
    pub fn predicted_text(&self) -> String {
        format!("₹ {:.2} Lakhs", self.predicted_price)
    }

    fn detail(&self, key: &str, alias: &str) -> Option<String> {
        self.details
            .get(key)
            .and_then(as_text)
            .or_else(|| self.details.get(alias).and_then(as_text))
    }

    pub fn year(&self) -> String {
        or_dash!(self.detail("Year", "year"))
    }

    /// Unit suffix only when the canonical key is present.
    pub fn kms(&self) -> String {
        match self.details.get("Kms_Driven").and_then(as_text) {
            Some(k) => format!("{k} km"),
            None => or_dash!(self.details.get("kms").and_then(as_text)),
        }
    }

    pub fn fuel(&self) -> String {
        or_dash!(self.detail("Fuel_Type", "fuel"))
    }

    pub fn car_name(&self) -> String {
        or_dash!(self.detail("Car_Name", "brand"))
    }

    pub fn city(&self) -> String {
        or_dash!(self.detail("City", "city"))
    }

    pub fn transmission(&self) -> String {
        or_dash!(self.detail("Transmission", "transmission"))
    }

    /// Labelled detail lines in display order.
    pub fn detail_lines(&self) -> [(&'static str, String); 6] {
        [
            ("Year", self.year()),
            ("Kms Driven", self.kms()),
            ("Fuel", self.fuel()),
            ("Car", self.car_name()),
            ("City", self.city()),
            ("Transmission", self.transmission()),
        ]
    }

    pub fn chart(&self) -> PriceChart {
        PriceChart {
            labels: [SHOWROOM_LABEL, PREDICTED_LABEL],
            values: [self.showroom_price, self.predicted_price],
        }
    }
}
