// benches/comparison.rs
use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};

use used_car_price::{
    catalog::Catalog,
    compare::{ComparisonSession, SelectionState, Slot, evaluate},
    presenter::NullPresenter,
};

fn full_selection(catalog: &Catalog) -> SelectionState {
    let mut sel = SelectionState::new();
    for (slot, rec) in Slot::ALL.into_iter().zip(catalog.records()) {
        sel.select(slot, rec.clone());
    }
    sel
}

fn bench_evaluate(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let sel = full_selection(&catalog);

    c.bench_function("evaluate_three_slots", |b| {
        b.iter(|| {
            let table = evaluate(black_box(&sel));
            black_box(table.rows.len())
        })
    });

    let empty = SelectionState::new();
    c.bench_function("evaluate_empty", |b| {
        b.iter(|| black_box(evaluate(black_box(&empty))))
    });
}

fn bench_session(c: &mut Criterion) {
    let catalog = Arc::new(Catalog::builtin());

    c.bench_function("session_select_reset", |b| {
        b.iter(|| {
            let mut session = ComparisonSession::new(catalog.clone(), NullPresenter);
            for (slot, id) in Slot::ALL.into_iter().zip(["Swift", "Verna", "Nexon"]) {
                let _ = session.select(slot, black_box(id));
            }
            session.reset();
            black_box(session.table().is_placeholder())
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_session);
criterion_main!(benches);
