// tests/cli_args.rs
#![cfg(feature = "cli")]

use std::sync::Arc;

use clap::Parser;
use figment::Jail;
use used_car_price::catalog::Catalog;
use used_car_price::cli::{Cli, Command, fill_slots, parse_pair, run_with};
use used_car_price::compare::{ComparisonSession, Slot};
use used_car_price::presenter::NullPresenter;
use used_car_price::{CompareError, PredictError};

#[test]
fn compare_takes_one_to_three_ids() {
    let cli = Cli::try_parse_from(["ucp", "compare", "Swift", "Verna"]).unwrap();
    assert_eq!(cli.command, Command::Compare { ids: vec!["Swift".into(), "Verna".into()] });

    assert!(Cli::try_parse_from(["ucp", "compare"]).is_err());
    assert!(Cli::try_parse_from(["ucp", "compare", "a", "b", "c", "d"]).is_err());
}

#[test]
fn predict_fields_are_name_value_pairs() {
    let cli = Cli::try_parse_from([
        "ucp", "predict", "-f", "Year=2019", "--field", "Mileage(km/l)=18.5", "--dry-run",
    ])
    .unwrap();
    match cli.command {
        Command::Predict { fields, json, dry_run, .. } => {
            assert_eq!(fields, vec![
                ("Year".to_string(), "2019".to_string()),
                ("Mileage(km/l)".to_string(), "18.5".to_string()),
            ]);
            assert!(json.is_none());
            assert!(dry_run);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn json_conflicts_with_fields() {
    assert!(Cli::try_parse_from(["ucp", "predict", "--json", "req.json", "-f", "Year=2019"]).is_err());
}

#[test]
fn parse_pair_splits_on_first_equals() {
    assert_eq!(parse_pair("City=Delhi"), Ok(("City".into(), "Delhi".into())));
    assert_eq!(parse_pair("Car_Name=A=B"), Ok(("Car_Name".into(), "A=B".into())));
    assert!(parse_pair("Year").is_err());
}

#[test]
fn global_options() {
    let cli = Cli::try_parse_from(["ucp", "--catalog", "cars.json", "list"]).unwrap();
    assert_eq!(cli.catalog.as_deref(), Some(std::path::Path::new("cars.json")));
    assert_eq!(cli.command, Command::List);
}

#[test]
fn unknown_id_leaves_only_its_slot_empty() {
    let mut session = ComparisonSession::new(Arc::new(Catalog::builtin()), NullPresenter);
    let ids = ["Swift", "Bogus", "Verna"].map(String::from);

    let rejected = fill_slots(&mut session, &ids);
    assert_eq!(rejected, vec![CompareError::NotFound("Bogus".into())]);

    let sel = session.selection();
    assert_eq!(sel.get(Slot::One).map(|r| r.id.as_str()), Some("Swift"));
    assert!(sel.get(Slot::Two).is_none());
    assert_eq!(sel.get(Slot::Three).map(|r| r.id.as_str()), Some("Verna"));
    assert!(session.chart().is_some());
}

#[test]
fn compare_prints_remaining_slots_after_a_rejection() {
    Jail::expect_with(|_jail| {
        let cli = Cli::try_parse_from(["ucp", "compare", "Swift", "Bogus", "Verna"]).unwrap();
        assert!(run_with(cli).is_ok());

        let cli = Cli::try_parse_from(["ucp", "compare", "Bogus", "Nope"]).unwrap();
        assert!(run_with(cli).is_err());
        Ok(())
    });
}

#[test]
fn predict_without_fields_is_rejected() {
    Jail::expect_with(|_jail| {
        let cli = Cli::try_parse_from(["ucp", "predict", "--dry-run"]).unwrap();
        let err = run_with(cli).unwrap_err();
        assert!(matches!(err.downcast_ref::<PredictError>(), Some(PredictError::MissingField(_))));
        Ok(())
    });
}

#[test]
fn explicit_config_file_must_exist() {
    Jail::expect_with(|_jail| {
        let cli = Cli::try_parse_from(["ucp", "--config", "typo.toml", "list"]).unwrap();
        assert!(run_with(cli).is_err());
        Ok(())
    });
}
