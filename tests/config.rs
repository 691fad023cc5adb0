// tests/config.rs
//
// Layered options: defaults → toml → UCP_* env. Runs inside figment's Jail
// (temporary cwd + scoped env vars).
//
use std::path::PathBuf;

use figment::Jail;
use used_car_price::config::consts::{DEFAULT_ENDPOINT, LOG_FILE, REQUEST_TIMEOUT_SECS};
use used_car_price::ConfigError;
use used_car_price::config::options::AppOptions;

fn load(file: Option<&str>) -> figment::Result<AppOptions> {
    AppOptions::load(file.map(std::path::Path::new)).map_err(|e| e.to_string().into())
}

#[test]
fn defaults_without_file_or_env() {
    Jail::expect_with(|_jail| {
        let o = load(None)?;
        assert_eq!(o, AppOptions::default());
        assert_eq!(o.predict.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(o.predict.timeout_secs, REQUEST_TIMEOUT_SECS);
        assert_eq!(o.log.file, PathBuf::from(LOG_FILE));
        assert_eq!(o.catalog.path, None);
        Ok(())
    });
}

#[test]
fn toml_file_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "used_car_price.toml",
            r#"
                [predict]
                endpoint = "http://estimator.local/api/predict"

                [catalog]
                path = "cars.json"
            "#,
        )?;
        let o = load(None)?;
        assert_eq!(o.predict.endpoint, "http://estimator.local/api/predict");
        // untouched keys keep their defaults
        assert_eq!(o.predict.timeout_secs, REQUEST_TIMEOUT_SECS);
        assert_eq!(o.catalog.path, Some(PathBuf::from("cars.json")));
        Ok(())
    });
}

#[test]
fn env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[predict]\ntimeout_secs = 5\n[log]\nlevel = \"warn\"\n")?;
        jail.set_env("UCP_PREDICT__TIMEOUT_SECS", "30");
        jail.set_env("UCP_LOG__LEVEL", "debug");

        let o = load(Some("custom.toml"))?;
        assert_eq!(o.predict.timeout_secs, 30);
        assert_eq!(o.log.level, "debug");
        Ok(())
    });
}

#[test]
fn bad_values_are_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("UCP_PREDICT__TIMEOUT_SECS", "soon");
        assert!(load(None).is_err());
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|jail| {
        // present default file must not stand in for the requested one
        jail.create_file("used_car_price.toml", "[predict]\ntimeout_secs = 5\n")?;

        let err = AppOptions::load(Some(std::path::Path::new("typo.toml"))).unwrap_err();
        assert!(matches!(&err, ConfigError::MissingFile(p) if p == &PathBuf::from("typo.toml")));
        assert!(err.to_string().contains("typo.toml"));

        // implicit default stays optional
        std::fs::remove_file("used_car_price.toml").map_err(|e| e.to_string())?;
        assert_eq!(load(None)?, AppOptions::default());
        Ok(())
    });
}
