//! # Premium-Lib: Closed-Form European Option Pricing
//!
//! `premium-lib` prices European calls and puts on a non-dividend-paying
//! underlying with the Black-Scholes formula, and computes the matching
//! closed-form Greeks. Every entry point is a pure function of plain `Copy`
//! values, so it can be called from any number of threads without coordination.
//!
//! ## Core Features
//!
//! - **Pricing**: [`price`] on a validated [`PricingRequest`], or the flat
//!   [`price_option`] / binding-style [`bs_prem`] and [`bs_call`] forms
//! - **Greeks**: delta, gamma, vega, theta and rho via [`greeks`]
//! - **Parity check**: [`call_put`] prices both legs and reports the put-call parity residual
//! - **Jobs and batches**: TOML pricing jobs ([`config`]) and CSV batch pricing ([`batch`])
//!
//! ## Quick Start
//!
//! ```rust
//! use premium_lib::{bs_prem, MarketModel, OptionType};
//!
//! let model = MarketModel::new(100.0, 0.2)?;
//! let premium = bs_prem(model, 100.0, 0.05, 1.0, OptionType::Call)?;
//! println!("Option Price: {}", premium);
//! # Ok::<(), premium_lib::PricingError>(())
//! ```
//!
//! ## Errors
//!
//! Pricing fails only with [`PricingError::InvalidParameter`], raised before
//! any computation when spot, volatility, strike or time to expiry is not
//! strictly positive, or when any input is NaN or infinite. The rate may be
//! negative.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod batch;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod models;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Core value types
pub use error::{PricingError, PricingResult};
pub use types::{MarketModel, OptionType, Premium, PremiumPair, PricingRequest};

// Black-Scholes engine
pub use models::bs::{
    bs_call, bs_call_price, bs_prem, bs_put_price, call_put, d1_d2, intrinsic_value, price,
    price_option, BlackScholes,
};
pub use models::bs::greeks::{greeks, Greeks};
pub use models::traits::PricingModel;

// Jobs and batches
#[cfg(feature = "serde")]
pub use batch::{price_batch, BatchInput, BatchRow};
#[cfg(feature = "serde")]
pub use config::{PricingConfig, Scenario};
