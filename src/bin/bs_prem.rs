//! Black-Scholes premium calculator
//!
//! ```text
//! bs_prem [--greeks]
//! bs_prem [--greeks] <spot> <volatility> <strike> <rate> <expiry> <call|put>
//! bs_prem [--greeks] --config <job.toml>
//! bs_prem --batch <requests.csv>
//! ```
//!
//! Prints `Option Price: <value>` and exits 0; on failure prints the error to
//! stderr and exits 1. Set `RUST_LOG=debug` for diagnostics.

use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use premium_lib::batch::{load_inputs, price_batch, write_results};
use premium_lib::{
    call_put, greeks, price, BlackScholes, MarketModel, OptionType, PricingConfig, PricingRequest,
};

const USAGE: &str = "usage: bs_prem [--greeks] [<spot> <volatility> <strike> <rate> <expiry> <call|put> | --config <file> | --batch <file>]";

enum Mode {
    Help,
    Single(PricingRequest),
    Config(String),
    Batch(String),
}

struct Args {
    mode: Mode,
    show_greeks: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match parse_args(std::env::args().skip(1).collect()).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("An error occurred: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn parse_args(raw: Vec<String>) -> Result<Args> {
    let show_greeks = raw.iter().any(|a| a == "--greeks");
    let rest: Vec<&str> = raw
        .iter()
        .map(String::as_str)
        .filter(|a| *a != "--greeks")
        .collect();

    let mode = match rest.as_slice() {
        [] => Mode::Single(PricingConfig::default().to_request()?),
        ["--config", path] => Mode::Config(path.to_string()),
        ["--batch", path] => Mode::Batch(path.to_string()),
        [spot, vol, strike, rate, expiry, option_type] => {
            let model = MarketModel::new(number("spot", spot)?, number("volatility", vol)?)?;
            Mode::Single(PricingRequest::new(
                model,
                number("strike", strike)?,
                number("risk_free_rate", rate)?,
                number("time_to_expiry", expiry)?,
                option_type.parse::<OptionType>()?,
            )?)
        }
        ["-h"] | ["--help"] => Mode::Help,
        _ => bail!("{}", USAGE),
    };
    Ok(Args { mode, show_greeks })
}

fn number(field: &str, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|e| anyhow!("{} must be a number (got `{}`): {}", field, raw, e))
}

fn run(args: Args) -> Result<()> {
    match args.mode {
        Mode::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        Mode::Single(request) => print_request(&request, args.show_greeks),
        Mode::Config(path) => {
            let config = PricingConfig::from_file(&path)?;
            print_request(&config.to_request()?, args.show_greeks)?;

            for scenario in config.scenario_requests()? {
                let request = scenario.request;
                let pair = call_put(
                    request.model,
                    request.strike,
                    request.risk_free_rate,
                    request.time_to_expiry,
                )?;
                println!(
                    "{}: spot {:.2}, strike {:.2}, vol {:.1}%, rate {:.1}%, expiry {:.2}y -> call {:.4}, put {:.4}, parity gap {:.2e}",
                    scenario.name,
                    request.model.spot,
                    request.strike,
                    request.model.volatility * 100.0,
                    request.risk_free_rate * 100.0,
                    request.time_to_expiry,
                    pair.call,
                    pair.put,
                    pair.parity_gap
                );
            }
            Ok(())
        }
        Mode::Batch(path) => {
            let inputs = load_inputs(&path)?;
            let rows = price_batch(&BlackScholes, &inputs);
            info!(rows = rows.len(), "batch priced");
            write_results(std::io::stdout().lock(), &rows).context("failed to write results")
        }
    }
}

fn print_request(request: &PricingRequest, show_greeks: bool) -> Result<()> {
    debug!(?request, "pricing");
    let premium = price(request)?;
    println!("Option Price: {}", premium);

    if show_greeks {
        let g = greeks(request)?;
        println!("Delta: {:.6}", g.delta);
        println!("Gamma: {:.6}", g.gamma);
        println!("Vega: {:.6}", g.vega);
        println!("Theta: {:.6}", g.theta);
        println!("Rho: {:.6}", g.rho);
    }
    Ok(())
}
