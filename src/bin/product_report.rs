//! Evaluate the product catalog across a grid of horizons
//!
//! Usage: cargo run --bin product_report -- --max-years 10 --output product_report.csv

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use lifeos_finance::{MarketRates, ProductCatalog, ProductEvaluator};

#[derive(Debug, Parser)]
#[command(about = "Write catalog evaluations for every horizon to CSV")]
struct Args {
    /// Directory holding market_rates.csv and products.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 1000.0)]
    principal: f64,

    /// Horizons 1..=max_years are evaluated
    #[arg(long, default_value_t = 10)]
    max_years: u32,

    #[arg(long, default_value = "product_report.csv")]
    output: PathBuf,
}

/// One CSV row per (product, horizon)
#[derive(Debug, Serialize)]
struct ReportRow {
    product_id: String,
    product_name: String,
    rule: &'static str,
    rate: f64,
    tax_exempt: bool,
    years: u32,
    gross_amount: f64,
    tax: f64,
    net_amount: f64,
    net_profit: f64,
    equivalent_benchmark_percent: f64,
    top_tier: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let (market, catalog) = match &args.data_dir {
        Some(dir) => (
            MarketRates::from_csv_path(dir).context("loading market rates")?,
            ProductCatalog::from_csv_path(dir).context("loading product catalog")?,
        ),
        None => (MarketRates::default_reference(), ProductCatalog::default_catalog()),
    };

    let start = Instant::now();
    let evaluator = ProductEvaluator::default();

    let rows: Vec<ReportRow> = (1..=args.max_years)
        .into_par_iter()
        .map(|years| {
            catalog
                .products()
                .iter()
                .map(|product| -> lifeos_finance::Result<ReportRow> {
                    let evaluation = evaluator.evaluate(product, market.reference_rate, args.principal, years)?;
                    Ok(ReportRow {
                        product_id: product.id.clone(),
                        product_name: product.name.clone(),
                        rule: product.rate_rule.kind(),
                        rate: product.rate_rule.value(),
                        tax_exempt: product.is_tax_exempt,
                        years,
                        gross_amount: evaluation.gross_amount,
                        tax: evaluation.tax,
                        net_amount: evaluation.net_amount,
                        net_profit: evaluation.net_profit,
                        equivalent_benchmark_percent: evaluation.equivalent_benchmark_percent,
                        top_tier: evaluation.is_top_tier(),
                    })
                })
                .collect::<lifeos_finance::Result<Vec<_>>>()
        })
        .collect::<lifeos_finance::Result<Vec<Vec<_>>>>()?
        .into_iter()
        .flatten()
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "Wrote {} rows ({} products x {} horizons) to {} in {:?}",
        rows.len(),
        catalog.len(),
        args.max_years,
        args.output.display(),
        start.elapsed()
    );

    Ok(())
}
