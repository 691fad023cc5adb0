// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, Sender},
    },
};

use eframe::egui;

use crate::{
    catalog::Catalog,
    compare::ComparisonSession,
    config::state::AppState,
    error::PredictError,
    predict::{Estimate, PredictClient, PredictionFlow, PredictionRequest, Predictor, Ticket},
};

use super::{
    pages::{Page, PageKind},
    presenter::GuiPresenter,
    router,
};

pub type Completion = (Ticket, Result<Estimate, PredictError>);

pub fn run(state: AppState, options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let catalog = Arc::new(Catalog::load(state.options.catalog.path.as_deref())?);
    let client = PredictClient::new(&state.options.predict)?;
    logf!("Init: endpoint={} catalog={} vehicle(s)", client.endpoint(), catalog.len());

    eframe::run_native(
        "Used Car Price",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, catalog, Arc::new(client))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // comparison: session owns selection + derived table/chart
    pub session: ComparisonSession<GuiPresenter>,

    // prediction: typed form, ticket bookkeeping, worker channel
    pub form: PredictionRequest,
    pub flow: PredictionFlow,
    pub predictor: Arc<dyn Predictor + Send + Sync>,
    pub tx: Sender<Completion>,
    pub rx: Receiver<Completion>,

    // status line (presenter writes here) + pending alert text
    pub status: Arc<Mutex<String>>,
    pub alert: Option<String>,
}

impl App {
    pub fn new(
        state: AppState,
        catalog: Arc<Catalog>,
        predictor: Arc<dyn Predictor + Send + Sync>,
    ) -> Self {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let session = ComparisonSession::new(catalog, GuiPresenter::new(status.clone()));
        let (tx, rx) = mpsc::channel();

        if let Some(page) = router::all_pages().get(state.gui.current_page_index) {
            logf!("Init: default page={:?}", page.kind());
        }

        Self {
            state,
            session,
            form: PredictionRequest::default(),
            flow: PredictionFlow::new(),
            predictor,
            tx,
            rx,
            status,
            alert: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::predict::poll(self);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.flow.is_pending() {
                    ui.add(egui::Spinner::new().size(14.0));
                }
                ui.label(self.status_text());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            let page = self.current_page();
            page.draw(ui, self);
        });

        super::components::selection_modal::draw(ctx, self);
        super::components::alert::draw(ctx, self);

        if self.flow.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
