// src/cli.rs
//
// Command-line front-end: list the catalog, compare up to three vehicles,
// browse the brand/model vocabulary, or request a price estimate.

use std::{fs, path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, bail, eyre};

use crate::{
    catalog::Catalog,
    compare::{Classification, ComparisonSession, Slot},
    error::CompareError,
    config::options::AppOptions,
    predict::{
        Outcome, PredictClient, PredictionFlow, PredictionRequest, brands,
        request::current_year,
    },
    presenter::Presenter,
};

/// Used-car price estimator and three-car comparison
#[derive(Parser, Debug)]
#[command(name = "ucp", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: used_car_price.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Catalog JSON replacing the built-in vehicles
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List catalog vehicles
    List,
    /// Compare up to three catalog vehicles side by side
    Compare {
        /// Catalog ids in slot order
        #[arg(required = true, num_args = 1..=3)]
        ids: Vec<String>,
    },
    /// List brands, or the models of one brand
    Brands {
        brand: Option<String>,
    },
    /// Request a price estimate
    Predict {
        /// Form field as NAME=VALUE (wire names, e.g. "Mileage(km/l)=18.5"); all fields required
        #[arg(short, long = "field", value_parser = parse_pair)]
        fields: Vec<(String, String)>,
        /// Read the request from a JSON file instead
        #[arg(long, conflicts_with = "fields")]
        json: Option<PathBuf>,
        /// Override the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Print the validated payload and exit
        #[arg(long)]
        dry_run: bool,
    },
}

pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    Ok((s!(k.trim()), s!(v)))
}

/// Unknown ids go to stderr; the table is printed after every slot is tried.
struct StderrPresenter;

impl Presenter for StderrPresenter {
    fn notify(&mut self, msg: &str) {
        eprintln!("Error: {msg}");
    }
}

pub fn run() -> Result<()> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<()> {
    let mut opts = AppOptions::load(cli.config.as_deref())?;
    if cli.catalog.is_some() {
        opts.catalog.path = cli.catalog.clone();
    }
    if let Err(e) = crate::log::init(&opts.log) {
        eprintln!("Logging disabled: {e}");
    }

    match cli.command {
        Command::List => list(&opts),
        Command::Compare { ids } => compare(&opts, &ids),
        Command::Brands { brand } => list_brands(brand.as_deref()),
        Command::Predict { fields, json, endpoint, dry_run } => {
            if let Some(url) = endpoint {
                opts.predict.endpoint = url;
            }
            predict(&opts, fields, json, dry_run)
        }
    }
}

fn load_catalog(opts: &AppOptions) -> Result<Catalog> {
    Catalog::load(opts.catalog.path.as_deref()).wrap_err("loading catalog")
}

fn list(opts: &AppOptions) -> Result<()> {
    let catalog = load_catalog(opts)?;
    for rec in catalog.records() {
        let card = crate::compare::SlotCard::from_record(Slot::One, rec);
        println!("{:<8} {:<24} {:>10} {:>12} {:>12}", rec.id, rec.name, card.price, card.mileage, card.power);
    }
    Ok(())
}

fn marker(class: Classification) -> &'static str {
    match class {
        Classification::Best => " (best)",
        Classification::Worst => " (worst)",
        Classification::Neutral | Classification::NotApplicable => "",
    }
}

/// Put `ids` into slots 1..=3 in order. A rejected id leaves its slot empty
/// and does not stop the remaining slots; the rejections are returned.
pub fn fill_slots<P: Presenter>(session: &mut ComparisonSession<P>, ids: &[String]) -> Vec<CompareError> {
    Slot::ALL
        .into_iter()
        .zip(ids)
        .filter_map(|(slot, id)| session.select(slot, id).err())
        .collect()
}

fn compare(opts: &AppOptions, ids: &[String]) -> Result<()> {
    let catalog = Arc::new(load_catalog(opts)?);
    let mut session = ComparisonSession::new(catalog, StderrPresenter);

    let rejected = fill_slots(&mut session, ids);
    if session.selection().is_empty() {
        bail!("none of the {} vehicle(s) are in the catalog", rejected.len());
    }

    let filled: Vec<Slot> = session.selection().populated().map(|(s, _)| s).collect();
    print!("{:<22}", "Feature");
    for &slot in &filled {
        print!("{:<28}", session.card(slot).header);
    }
    println!();

    for row in &session.table().rows {
        print!("{:<22}", row.attribute.label());
        for &slot in &filled {
            let cell = format!("{}{}", row.text(slot), marker(row.classification(slot)));
            print!("{cell:<28}");
        }
        println!();
    }
    Ok(())
}

fn list_brands(brand: Option<&str>) -> Result<()> {
    match brand {
        None => brands::brands().for_each(|b| println!("{b}")),
        Some(b) => {
            let models = brands::models_for(b).ok_or_else(|| eyre!("unknown brand '{b}'"))?;
            models.iter().for_each(|m| println!("{m}"));
        }
    }
    Ok(())
}

fn predict(
    opts: &AppOptions,
    fields: Vec<(String, String)>,
    json: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let year = current_year();
    let request = match json {
        Some(path) => {
            let text = fs::read_to_string(&path).wrap_err_with(|| format!("reading {}", path.display()))?;
            let req: PredictionRequest = serde_json::from_str(&text).wrap_err("parsing request JSON")?;
            req.validate(year)?;
            req
        }
        None => PredictionRequest::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())), year)?,
    };

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let client = PredictClient::new(&opts.predict)?;
    let mut flow = PredictionFlow::new();
    match flow.run(&client, &request) {
        Outcome::Shown => {
            let Some(est) = flow.estimate() else { bail!("no estimate") };
            println!("{}", est.predicted_text());
            for (label, value) in est.detail_lines() {
                println!("  {label:<14} {value}");
            }
            let chart = est.chart();
            for (label, value) in chart.labels.iter().zip(chart.values) {
                println!("  {label:<14} ₹ {value:.2} Lakhs");
            }
            Ok(())
        }
        Outcome::Alert(msg) => bail!(msg),
        Outcome::Stale => bail!("prediction was superseded"),
    }
}
