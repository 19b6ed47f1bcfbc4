//! TOML-described pricing jobs.
//!
//! Every field falls back to the values of the reference driver (spot 100,
//! vol 20%, strike 100, rate 5%, one year, call), so an empty document is a
//! valid job.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PricingResult;
use crate::types::{MarketModel, OptionType, PricingRequest};

/// Market model section (`[model]`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            volatility: default_volatility(),
        }
    }
}

/// One `[[scenarios]]` entry. Missing fields inherit the job's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub spot: Option<f64>,
    #[serde(default)]
    pub volatility: Option<f64>,
    #[serde(default)]
    pub strike: Option<f64>,
    #[serde(default)]
    pub risk_free_rate: Option<f64>,
    #[serde(default)]
    pub time_to_expiry: Option<f64>,
}

/// A resolved scenario, priced as a call/put pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    /// Call leg; the put leg is `request.with_option_type(OptionType::Put)`
    pub request: PricingRequest,
}

/// Main configuration struct for a pricing job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default = "default_strike")]
    pub strike: f64,

    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Time to expiration in years
    #[serde(default = "default_time_to_expiry")]
    pub time_to_expiry: f64,

    #[serde(default = "default_option_type")]
    pub option_type: OptionType,

    /// Extra what-if scenarios priced alongside the main job
    #[serde(default)]
    pub scenarios: Vec<ScenarioConfig>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            strike: default_strike(),
            risk_free_rate: default_risk_free_rate(),
            time_to_expiry: default_time_to_expiry(),
            option_type: default_option_type(),
            scenarios: Vec::new(),
        }
    }
}

impl PricingConfig {
    /// Three-month 105 strike on a 25% vol underlying, with in-, out- and
    /// at-the-money what-if scenarios.
    pub fn demo() -> Self {
        Self {
            model: ModelConfig {
                spot: 100.0,
                volatility: 0.25,
            },
            strike: 105.0,
            risk_free_rate: 0.05,
            time_to_expiry: 0.25,
            option_type: OptionType::Call,
            scenarios: vec![
                ScenarioConfig {
                    name: Some("in-the-money call".to_string()),
                    spot: Some(110.0),
                    volatility: Some(0.20),
                    strike: Some(100.0),
                    risk_free_rate: Some(0.03),
                    time_to_expiry: Some(0.5),
                },
                ScenarioConfig {
                    name: Some("out-of-the-money call".to_string()),
                    spot: Some(90.0),
                    volatility: Some(0.30),
                    strike: Some(100.0),
                    risk_free_rate: Some(0.04),
                    time_to_expiry: Some(0.25),
                },
                ScenarioConfig {
                    name: Some("at-the-money".to_string()),
                    spot: Some(100.0),
                    volatility: Some(0.15),
                    strike: Some(100.0),
                    risk_free_rate: Some(0.02),
                    time_to_expiry: Some(1.0),
                },
            ],
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("invalid pricing config")?;
        debug!(
            scenarios = config.scenarios.len(),
            option_type = %config.option_type,
            "parsed pricing config"
        );
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    /// Validated request for the main job.
    pub fn to_request(&self) -> PricingResult<PricingRequest> {
        PricingRequest::new(
            MarketModel::new(self.model.spot, self.model.volatility)?,
            self.strike,
            self.risk_free_rate,
            self.time_to_expiry,
            self.option_type,
        )
    }

    /// Resolves every scenario against the job's values. Fails on the first
    /// scenario that violates an input invariant.
    pub fn scenario_requests(&self) -> PricingResult<Vec<Scenario>> {
        self.scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| {
                let model = MarketModel::new(
                    scenario.spot.unwrap_or(self.model.spot),
                    scenario.volatility.unwrap_or(self.model.volatility),
                )?;
                let request = PricingRequest::new(
                    model,
                    scenario.strike.unwrap_or(self.strike),
                    scenario.risk_free_rate.unwrap_or(self.risk_free_rate),
                    scenario.time_to_expiry.unwrap_or(self.time_to_expiry),
                    OptionType::Call,
                )?;
                let name = scenario
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("scenario {}", i + 1));
                Ok(Scenario { name, request })
            })
            .collect()
    }
}

fn default_spot() -> f64 {
    100.0
}

fn default_volatility() -> f64 {
    0.2
}

fn default_strike() -> f64 {
    100.0
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_time_to_expiry() -> f64 {
    1.0
}

fn default_option_type() -> OptionType {
    OptionType::Call
}
