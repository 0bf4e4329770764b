//! LifeOS Finance CLI
//!
//! Command-line front end for the planner, goal solver and product comparator

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use lifeos_finance::{
    projection::{CompoundProjector, ProjectionConfig, ProjectionParams, ProjectionSeries},
    required_monthly_contribution, resolve_annual_rate, InvestmentPlan, RateProfile, SimulationRunner,
};

#[derive(Debug, Parser)]
#[command(name = "lifeos-finance", version, about = "Investment projections for the LifeOS dashboard")]
struct Cli {
    /// Directory holding market_rates.csv and products.csv (built-in defaults when omitted)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Year-by-year compound growth projection
    Project {
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        /// Annual rate in percent; resolved from --profile when omitted
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long, default_value = "SAFE")]
        profile: String,
        #[arg(long)]
        years: u32,
        /// Deflate figures to today's purchasing power
        #[arg(long)]
        real: bool,
    },
    /// Monthly contribution needed to reach a target
    Goal {
        #[arg(long)]
        target: f64,
        #[arg(long)]
        years: u32,
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long, default_value = "SAFE")]
        profile: String,
    },
    /// Rank the product catalog against the benchmark rate
    Compare {
        #[arg(long, default_value_t = 1000.0)]
        principal: f64,
        #[arg(long, default_value_t = 5)]
        years: u32,
    },
    /// Full planner run: projection, benchmark and optional goal
    Plan {
        #[arg(long, default_value = "MODERATE")]
        profile: String,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long, default_value_t = 0.0)]
        monthly: f64,
        #[arg(long)]
        years: u32,
        #[arg(long)]
        goal: Option<f64>,
        #[arg(long)]
        real: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = match &cli.data_dir {
        Some(dir) => SimulationRunner::from_csv_path(dir)
            .with_context(|| format!("loading data from {}", dir.display()))?,
        None => SimulationRunner::new(),
    };
    let market = *runner.market();

    match cli.command {
        Command::Project { initial, monthly, rate, profile, years, real } => {
            let annual_rate_percent = match rate {
                Some(rate) => rate,
                None => resolve_annual_rate(profile.parse::<RateProfile>()?, market.reference_rate)?,
            };
            let projector = CompoundProjector::new(ProjectionConfig {
                benchmark_rate_percent: market.savings_rate,
            });
            let series = projector.project(&ProjectionParams {
                initial_amount: initial,
                monthly_contribution: monthly,
                annual_rate_percent,
                years,
                apply_inflation_deflation: real,
                inflation_rate_percent: market.inflation_rate,
            })?;

            if cli.json {
                print_json(&series)?;
            } else {
                print_series(&series);
            }
        }
        Command::Goal { target, years, rate, profile } => {
            let annual_rate_percent = match rate {
                Some(rate) => rate,
                None => resolve_annual_rate(profile.parse::<RateProfile>()?, market.reference_rate)?,
            };
            let payment = required_monthly_contribution(target, years, annual_rate_percent)?;

            if cli.json {
                print_json(&serde_json::json!({
                    "target_amount": target,
                    "years": years,
                    "annual_rate_percent": annual_rate_percent,
                    "required_monthly_contribution": payment,
                }))?;
            } else {
                println!("Goal: {:.2} in {} years at {:.2}% a.a.", target, years, annual_rate_percent);
                println!("  Required monthly contribution: {:.2}", payment);
            }
        }
        Command::Compare { principal, years } => {
            let ranking = runner.compare_products(principal, years)?;

            if cli.json {
                print_json(&ranking)?;
            } else {
                println!(
                    "Principal {:.2}, {} years, benchmark {:.2}% a.a.",
                    principal, years, market.reference_rate
                );
                println!(
                    "{:<24} {:>20} {:>12} {:>10} {:>12} {:>9} {:>4}",
                    "Product", "Rate", "Gross", "Tax", "Net", "%Bench", "Top"
                );
                println!("{}", "-".repeat(97));
                for row in &ranking {
                    println!(
                        "{:<24} {:>20} {:>12.2} {:>10.2} {:>12.2} {:>9.2} {:>4}",
                        row.product.name,
                        row.product.rate_rule.to_string(),
                        row.evaluation.gross_amount,
                        row.evaluation.tax,
                        row.evaluation.net_amount,
                        row.evaluation.equivalent_benchmark_percent,
                        if row.top_tier { "*" } else { "" },
                    );
                }
            }
        }
        Command::Plan { profile, initial, monthly, years, goal, real } => {
            let plan = InvestmentPlan {
                profile: profile.parse()?,
                initial_amount: initial,
                monthly_contribution: monthly,
                years,
                goal_amount: goal,
                adjust_for_inflation: real,
            };
            let outcome = runner.run(&plan)?;

            if cli.json {
                print_json(&outcome)?;
            } else {
                println!("Profile {} at {:.2}% a.a.", plan.profile, outcome.annual_rate_percent);
                print_series(&outcome.series);
                let summary = &outcome.summary;
                println!("\nSummary:");
                println!("  Invested:          {:.0}", summary.final_invested);
                println!("  Final total:       {:.0}", summary.final_total);
                println!("  Interest earned:   {:.0}", summary.interest_earned);
                println!("  vs savings:        {:+.0}", summary.advantage_over_benchmark);
                if let Some(goal) = outcome.goal {
                    println!(
                        "  Goal {:.0}: {:.2}/month needed ({})",
                        goal.target_amount,
                        goal.required_monthly_contribution,
                        if goal.on_track { "on track" } else { "short" }
                    );
                }
            }
        }
    }

    Ok(())
}

fn print_series(series: &ProjectionSeries) {
    println!(
        "{:>4} {:>14} {:>14} {:>14}{}",
        "Year",
        "Invested",
        "Total",
        "Savings",
        if series.inflation_adjusted { "  (today's money)" } else { "" }
    );
    println!("{}", "-".repeat(49));
    for point in &series.points {
        println!(
            "{:>4} {:>14.0} {:>14.0} {:>14.0}",
            point.year_index, point.invested_principal, point.compounded_total, point.benchmark_total
        );
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
