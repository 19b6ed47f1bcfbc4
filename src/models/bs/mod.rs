// Closed-form Black-Scholes pricing for European calls and puts on a
// non-dividend-paying underlying. The checked entry points validate every input
// and return `PricingError::InvalidParameter`; the `bs_*_price` kernels skip
// validation.

pub mod greeks;

use crate::error::PricingResult;
use crate::models::traits::PricingModel;
use crate::models::utils::{log_moneyness, norm_cdf};
use crate::types::{MarketModel, OptionType, Premium, PremiumPair, PricingRequest};

use greeks::Greeks;

/// Black-Scholes d1 and d2 for a validated request.
pub fn d1_d2(request: &PricingRequest) -> (f64, f64) {
    let vol_sqrt_t = request.model.volatility * request.time_to_expiry.sqrt();
    d1_d2_raw(
        -log_moneyness(request.strike, request.model.spot),
        request.risk_free_rate * request.time_to_expiry,
        vol_sqrt_t,
    )
}

/// d1 and d2 from `ln(S/K)`, `r*T` and `sigma*sqrt(T)`. Sigma is never squared.
fn d1_d2_raw(log_spot_strike: f64, rate_time: f64, vol_sqrt_t: f64) -> (f64, f64) {
    let d1 = (log_spot_strike + rate_time) / vol_sqrt_t + 0.5 * vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// Falls back to the discounted intrinsic value when there is no diffusion left
/// (`T <= 0`, `sigma <= 0`, or `sigma * sqrt(T)` underflowing to zero).
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let vol_sqrt_t = sigma * T.sqrt();
    if T <= 0.0 || vol_sqrt_t <= 0.0 || vol_sqrt_t.is_nan() {
        return (S - K * (-r * T).exp()).max(0.0);
    }
    let (d1, d2) = d1_d2_raw((S / K).ln(), r * T, vol_sqrt_t);
    (S * norm_cdf(d1) - K * (-r * T).exp() * norm_cdf(d2)).max(0.0)
}

/// Price of a European put option under Black-Scholes assumptions.
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let vol_sqrt_t = sigma * T.sqrt();
    if T <= 0.0 || vol_sqrt_t <= 0.0 || vol_sqrt_t.is_nan() {
        return (K * (-r * T).exp() - S).max(0.0);
    }
    let (d1, d2) = d1_d2_raw((S / K).ln(), r * T, vol_sqrt_t);
    (K * (-r * T).exp() * norm_cdf(-d2) - S * norm_cdf(-d1)).max(0.0)
}

/// Premium of the option described by `request`.
///
/// # Errors
///
/// `PricingError::InvalidParameter` when spot, volatility, strike or time to
/// expiry is not strictly positive, or any input is non-finite.
///
/// # Example
///
/// ```rust
/// use premium_lib::{price, MarketModel, OptionType, PricingRequest};
///
/// let model = MarketModel::new(100.0, 0.2)?;
/// let request = PricingRequest::new(model, 100.0, 0.05, 1.0, OptionType::Call)?;
/// let premium = price(&request)?;
/// assert!((premium - 10.4506).abs() < 1e-3);
/// # Ok::<(), premium_lib::PricingError>(())
/// ```
pub fn price(request: &PricingRequest) -> PricingResult<Premium> {
    request.validate()?;
    let PricingRequest {
        model,
        strike,
        risk_free_rate,
        time_to_expiry,
        option_type,
    } = *request;

    let price = match option_type {
        OptionType::Call => bs_call_price(
            model.spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            model.volatility,
        ),
        OptionType::Put => bs_put_price(
            model.spot,
            strike,
            risk_free_rate,
            time_to_expiry,
            model.volatility,
        ),
    };
    Ok(price)
}

/// Flat-argument form of [`price`].
pub fn price_option(
    spot: f64,
    volatility: f64,
    strike: f64,
    risk_free_rate: f64,
    time_to_expiry: f64,
    option_type: OptionType,
) -> PricingResult<Premium> {
    let request = PricingRequest {
        model: MarketModel { spot, volatility },
        strike,
        risk_free_rate,
        time_to_expiry,
        option_type,
    };
    price(&request)
}

/// Model-first argument order, matching the `bs_prem(model, strike, rate, time, type)` binding.
pub fn bs_prem(
    model: MarketModel,
    strike: f64,
    rate: f64,
    time: f64,
    option_type: OptionType,
) -> PricingResult<Premium> {
    price_option(model.spot, model.volatility, strike, rate, time, option_type)
}

/// Call-only shortcut with the binding's `(spot, strike, vol, rate, time)` order.
pub fn bs_call(spot: f64, strike: f64, vol: f64, rate: f64, time: f64) -> PricingResult<Premium> {
    price_option(spot, vol, strike, rate, time, OptionType::Call)
}

/// Prices both legs and reports how far the pair is from put-call parity.
pub fn call_put(model: MarketModel, strike: f64, rate: f64, time: f64) -> PricingResult<PremiumPair> {
    let call_request = PricingRequest {
        model,
        strike,
        risk_free_rate: rate,
        time_to_expiry: time,
        option_type: OptionType::Call,
    };
    let call = price(&call_request)?;
    let put = price(&call_request.with_option_type(OptionType::Put))?;
    let forward_value = model.spot - strike * call_request.discount_factor();

    Ok(PremiumPair {
        call,
        put,
        parity_gap: call - put - forward_value,
    })
}

/// Payoff if exercised immediately; the limit of the premium as expiry approaches.
pub fn intrinsic_value(option_type: OptionType, spot: f64, strike: f64) -> f64 {
    option_type.intrinsic(spot, strike)
}

/// [`PricingModel`] handle for the Black-Scholes engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl PricingModel for BlackScholes {
    fn model_name(&self) -> &str {
        "black-scholes"
    }

    fn premium(&self, request: &PricingRequest) -> PricingResult<Premium> {
        price(request)
    }

    fn greeks(&self, request: &PricingRequest) -> PricingResult<Greeks> {
        greeks::greeks(request)
    }
}
