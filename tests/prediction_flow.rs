// tests/prediction_flow.rs
//
// Ticketed submissions against a fake predictor.
//
use std::cell::Cell;

use serde_json::Map;
use used_car_price::PredictError;
use used_car_price::predict::{Estimate, Outcome, PredictionFlow, PredictionRequest, Predictor};

fn estimate(price: f64) -> Estimate {
    Estimate { predicted_price: price, showroom_price: 7.5, details: Map::new() }
}

struct Fixed(f64);
impl Predictor for Fixed {
    fn predict(&self, _req: &PredictionRequest) -> Result<Estimate, PredictError> {
        Ok(estimate(self.0))
    }
}

struct Failing;
impl Predictor for Failing {
    fn predict(&self, _req: &PredictionRequest) -> Result<Estimate, PredictError> {
        Err(PredictError::Rejected("model not loaded".into()))
    }
}

struct Counting(Cell<u32>);
impl Predictor for Counting {
    fn predict(&self, _req: &PredictionRequest) -> Result<Estimate, PredictError> {
        self.0.set(self.0.get() + 1);
        Ok(estimate(1.0))
    }
}

#[test]
fn run_shows_estimate() {
    let mut flow = PredictionFlow::new();
    let out = flow.run(&Fixed(5.5), &PredictionRequest::default());
    assert_eq!(out, Outcome::Shown);
    assert!(!flow.is_pending());
    assert_eq!(flow.estimate().unwrap().predicted_text(), "₹ 5.50 Lakhs");
}

#[test]
fn failure_is_a_single_alert_and_clears_result() {
    let mut flow = PredictionFlow::new();
    flow.run(&Fixed(5.5), &PredictionRequest::default());

    let out = flow.run(&Failing, &PredictionRequest::default());
    assert_eq!(out, Outcome::Alert("Prediction error: model not loaded".into()));
    assert!(flow.estimate().is_none());
    assert!(!flow.is_pending());
}

#[test]
fn newer_submission_supersedes_older() {
    let mut flow = PredictionFlow::new();
    let first = flow.submit();
    let second = flow.submit();
    assert!(second > first);

    assert_eq!(flow.complete(first, Ok(estimate(1.0))), Outcome::Stale);
    assert!(flow.estimate().is_none());
    assert!(flow.is_pending());

    assert_eq!(flow.complete(second, Ok(estimate(2.0))), Outcome::Shown);
    assert_eq!(flow.estimate().unwrap().predicted_price, 2.0);

    // Late duplicate of the shown ticket is stale too
    assert_eq!(flow.complete(second, Ok(estimate(3.0))), Outcome::Stale);
    assert_eq!(flow.estimate().unwrap().predicted_price, 2.0);
}

#[test]
fn reset_discards_in_flight_response() {
    let mut flow = PredictionFlow::new();
    let t = flow.submit();
    flow.reset();
    assert!(!flow.is_pending());
    assert_eq!(flow.complete(t, Ok(estimate(4.0))), Outcome::Stale);
    assert!(flow.estimate().is_none());
}

#[test]
fn stale_errors_do_not_alert() {
    let mut flow = PredictionFlow::new();
    let old = flow.submit();
    let _new = flow.submit();
    let out = flow.complete(old, Err(PredictError::MissingPrice));
    assert_eq!(out, Outcome::Stale);
}

#[test]
fn each_run_calls_the_predictor_once() {
    let p = Counting(Cell::new(0));
    let mut flow = PredictionFlow::new();
    flow.run(&p, &PredictionRequest::default());
    flow.run(&p, &PredictionRequest::default());
    assert_eq!(p.0.get(), 2);
    assert_eq!(flow.pending(), None);
}
