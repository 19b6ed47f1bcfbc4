use std::fmt;
use std::str::FromStr;

use crate::error::{require_finite, require_positive, PricingError, PricingResult};

/// Theoretical premium of an option, always non-negative.
pub type Premium = f64;

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff at expiry for a given spot.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::invalid(
                "option_type",
                format!("expected `call` or `put` (got `{}`)", other),
            )),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = PricingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.as_str().to_string()
    }
}

/// Market state for a single underlying: spot price and Black-Scholes volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketModel {
    /// Current price of the underlying
    pub spot: f64,
    /// Annualised volatility (as decimal, e.g., 0.2 for 20%)
    pub volatility: f64,
}

impl MarketModel {
    /// Creates a validated market model.
    pub fn new(spot: f64, volatility: f64) -> PricingResult<Self> {
        let model = Self { spot, volatility };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> PricingResult<()> {
        require_positive("spot", self.spot)?;
        require_positive("volatility", self.volatility)
    }
}

/// Everything needed to price one European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    pub model: MarketModel,
    /// Strike price
    pub strike: f64,
    /// Continuously compounded rate; may be negative
    pub risk_free_rate: f64,
    /// Time to expiration in years
    pub time_to_expiry: f64,
    pub option_type: OptionType,
}

impl PricingRequest {
    /// Creates a validated pricing request.
    pub fn new(
        model: MarketModel,
        strike: f64,
        risk_free_rate: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> PricingResult<Self> {
        let request = Self {
            model,
            strike,
            risk_free_rate,
            time_to_expiry,
            option_type,
        };
        request.validate()?;
        Ok(request)
    }

    /// Checks every input invariant. Fields are public, so the engine calls
    /// this again before pricing.
    pub fn validate(&self) -> PricingResult<()> {
        self.model.validate()?;
        require_positive("strike", self.strike)?;
        require_finite("risk_free_rate", self.risk_free_rate)?;
        require_positive("time_to_expiry", self.time_to_expiry)
    }

    /// Same contract with the other payoff.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Discount factor `exp(-r*T)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.risk_free_rate * self.time_to_expiry).exp()
    }
}

/// Call and put premia for one strike/expiry together with the put-call parity residual.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PremiumPair {
    pub call: Premium,
    pub put: Premium,
    /// `call - put - (spot - strike * exp(-r*T))`
    pub parity_gap: f64,
}
