//! Black-Scholes sensitivities
//!
//! All values are in raw model units: delta and gamma per unit of spot, vega per
//! unit of volatility (1.0 = 100 vol points), theta per year of calendar time,
//! rho per unit of rate. Scale at the call site if per-day or per-1% figures
//! are wanted.

use crate::error::PricingResult;
use crate::models::bs::d1_d2;
use crate::models::utils::{norm_cdf, norm_pdf};
use crate::types::{OptionType, PricingRequest};

/// First-order sensitivities plus gamma.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// dV/dS
    pub delta: f64,
    /// d²V/dS²
    pub gamma: f64,
    /// dV/dσ
    pub vega: f64,
    /// -dV/dT: value change per year as the option ages
    pub theta: f64,
    /// dV/dr
    pub rho: f64,
}

/// Closed-form Greeks for the option described by `request`.
///
/// Validates the request exactly like [`crate::price`].
pub fn greeks(request: &PricingRequest) -> PricingResult<Greeks> {
    request.validate()?;

    let spot = request.model.spot;
    let sigma = request.model.volatility;
    let strike = request.strike;
    let rate = request.risk_free_rate;
    let t = request.time_to_expiry;

    let sqrt_t = t.sqrt();
    let df = request.discount_factor();
    let vol_sqrt_t = sigma * sqrt_t;
    if vol_sqrt_t <= 0.0 || vol_sqrt_t.is_nan() {
        return Ok(degenerate_greeks(request, df));
    }

    let (d1, d2) = d1_d2(request);
    let pdf_d1 = norm_pdf(d1);

    let gamma = pdf_d1 / (spot * sigma * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;
    let decay = -spot * pdf_d1 * sigma / (2.0 * sqrt_t);

    let greeks = match request.option_type {
        OptionType::Call => Greeks {
            delta: norm_cdf(d1),
            gamma,
            vega,
            theta: decay - rate * strike * df * norm_cdf(d2),
            rho: strike * t * df * norm_cdf(d2),
        },
        OptionType::Put => Greeks {
            delta: norm_cdf(d1) - 1.0,
            gamma,
            vega,
            theta: decay + rate * strike * df * norm_cdf(-d2),
            rho: -strike * t * df * norm_cdf(-d2),
        },
    };
    Ok(greeks)
}

/// Sensitivities of the discounted intrinsic value `max(±(S - K·df), 0)`,
/// used when `sigma*sqrt(T)` underflows to zero.
fn degenerate_greeks(request: &PricingRequest, df: f64) -> Greeks {
    let spot = request.model.spot;
    let strike = request.strike;
    let rate = request.risk_free_rate;
    let t = request.time_to_expiry;
    let forward_strike = strike * df;

    match request.option_type {
        OptionType::Call if spot > forward_strike => Greeks {
            delta: 1.0,
            theta: -rate * forward_strike,
            rho: t * forward_strike,
            ..Greeks::default()
        },
        OptionType::Put if spot < forward_strike => Greeks {
            delta: -1.0,
            theta: rate * forward_strike,
            rho: -t * forward_strike,
            ..Greeks::default()
        },
        _ => Greeks::default(),
    }
}
