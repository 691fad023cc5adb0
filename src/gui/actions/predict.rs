// src/gui/actions/predict.rs
//
// Submission runs on a worker thread; the result comes back over `app.rx`
// tagged with its ticket and is applied in `poll` on the UI thread.

use std::thread;

use eframe::egui;

use crate::{
    gui::app::App,
    predict::{Outcome, request::current_year},
};

pub fn submit(app: &mut App, ctx: &egui::Context) {
    if let Err(e) = app.form.validate(current_year()) {
        loge!("Predict: form rejected: {e}");
        app.status(format!("Error: {e}"));
        app.alert = Some(e.to_string());
        return;
    }

    let ticket = app.flow.submit();
    logf!("Predict: Begin ticket={} car='{}'", ticket.id(), app.form.car_name);
    app.status("Estimating…");

    let request = app.form.clone();
    let predictor = app.predictor.clone();
    let tx = app.tx.clone();
    let ctx = ctx.clone();

    thread::spawn(move || {
        let result = predictor.predict(&request);
        // Receiver gone → app is closing
        let _ = tx.send((ticket, result));
        ctx.request_repaint();
    });
}

/// Drain finished submissions. Call once per frame.
pub fn poll(app: &mut App) {
    while let Ok((ticket, result)) = app.rx.try_recv() {
        match app.flow.complete(ticket, result) {
            Outcome::Shown => app.status("Ready"),
            Outcome::Alert(msg) => {
                app.status("Idle");
                app.alert = Some(msg);
            }
            Outcome::Stale => {}
        }
    }
}

pub fn reset(app: &mut App) {
    app.flow.reset();
    app.form = Default::default();
    app.status("Idle");
    logf!("Predict: form reset");
}
