// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Price a call with the call-only shortcut
//! 2. Price both legs from a market model and check put-call parity
//! 3. Re-price a handful of what-if scenarios
//! 4. Handle a rejected input

use anyhow::Result;
use premium_lib::{bs_call, bs_prem, call_put, greeks, OptionType, PricingConfig};

fn main() -> Result<()> {
    println!("Black-Scholes Options Calculator");
    println!("================================");

    let config = PricingConfig::demo();
    let request = config.to_request()?;
    let model = request.model;
    let (strike, rate, time) = (request.strike, request.risk_free_rate, request.time_to_expiry);

    println!("\nStep 1: Call-only shortcut...");
    let call_price = bs_call(model.spot, strike, model.volatility, rate, time)?;
    println!("  Call option price: ${:.4}", call_price);

    println!("\nStep 2: Both legs from the market model...");
    let call_premium = bs_prem(model, strike, rate, time, OptionType::Call)?;
    let put_premium = bs_prem(model, strike, rate, time, OptionType::Put)?;
    println!("  Call premium: ${:.4}", call_premium);
    println!("  Put premium:  ${:.4}", put_premium);

    let expected_parity = model.spot - strike * (-rate * time).exp();
    println!("  Call - Put = {:.4}", call_premium - put_premium);
    println!("  Expected   = {:.4}", expected_parity);

    let g = greeks(&request)?;
    println!(
        "  Call greeks: delta {:.4}, gamma {:.6}, vega {:.4}, theta {:.4}, rho {:.4}",
        g.delta, g.gamma, g.vega, g.theta, g.rho
    );

    println!("\nStep 3: Scenarios...");
    println!(
        "{:<24} {:<8} {:<8} {:<8} {:<10} {:<10}",
        "Scenario", "Spot", "Strike", "Vol", "Call", "Put"
    );
    println!("{}", "-".repeat(72));

    for scenario in config.scenario_requests()? {
        let r = scenario.request;
        let pair = call_put(r.model, r.strike, r.risk_free_rate, r.time_to_expiry)?;
        println!(
            "{:<24} {:<8.2} {:<8.2} {:<8.2} {:<10.4} {:<10.4}",
            scenario.name, r.model.spot, r.strike, r.model.volatility, pair.call, pair.put
        );
    }

    println!("\nStep 4: Rejected input...");
    match bs_prem(model, strike, rate, -1.0, OptionType::Call) {
        Ok(price) => println!("  Unexpected price: {}", price),
        Err(e) => println!("  Rejected: {}", e),
    }

    Ok(())
}
