// src/predict/flow.rs
//
// Submission bookkeeping for the prediction panel.
//
// Each submission gets a ticket. Only the latest pending ticket may render;
// a completion carrying any other ticket is `Stale` and dropped. `reset`
// forgets the pending ticket, so an in-flight response after a reset is
// stale too.

use super::client::Predictor;
use super::request::PredictionRequest;
use super::response::Estimate;
use crate::error::PredictError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Estimate is now the displayed result.
    Shown,
    /// Single user-visible message; panel is back to its idle state.
    Alert(String),
    /// Superseded or reset; nothing changes.
    Stale,
}

#[derive(Debug, Default)]
pub struct PredictionFlow {
    next: u64,
    pending: Option<Ticket>,
    shown: Option<Estimate>,
}

impl PredictionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission. Hides any previous result.
    pub fn submit(&mut self) -> Ticket {
        self.next += 1;
        let ticket = Ticket(self.next);
        if let Some(old) = self.pending.replace(ticket) {
            logd!("Predict: ticket {} superseded by {}", old.id(), ticket.id());
        }
        self.shown = None;
        ticket
    }

    pub fn complete(&mut self, ticket: Ticket, result: Result<Estimate, PredictError>) -> Outcome {
        if self.pending != Some(ticket) {
            logd!("Predict: dropping stale response for ticket {}", ticket.id());
            return Outcome::Stale;
        }
        self.pending = None;
        match result {
            Ok(estimate) => {
                logf!("Predict: ticket {} → {}", ticket.id(), estimate.predicted_text());
                self.shown = Some(estimate);
                Outcome::Shown
            }
            Err(e) => {
                loge!("Predict: ticket {} failed: {e}", ticket.id());
                Outcome::Alert(e.to_string())
            }
        }
    }

    /// Back to idle: no pending ticket, no result.
    pub fn reset(&mut self) {
        self.pending = None;
        self.shown = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.shown.as_ref()
    }

    /// Submit and wait on the calling thread.
    pub fn run<P: Predictor + ?Sized>(&mut self, predictor: &P, request: &PredictionRequest) -> Outcome {
        let ticket = self.submit();
        let result = predictor.predict(request);
        self.complete(ticket, result)
    }
}
