pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::error::PricingResult;
    use crate::models::bs::greeks::Greeks;
    use crate::types::{Premium, PricingRequest};

    /// Closed-form European pricing model
    pub trait PricingModel {
        fn model_name(&self) -> &str;
        fn premium(&self, request: &PricingRequest) -> PricingResult<Premium>;
        fn greeks(&self, request: &PricingRequest) -> PricingResult<Greeks>;
    }
}

/// Utility functions shared by pricing and sensitivities
pub mod utils {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    /// Calculate log-moneyness: ln(K/S)
    pub fn log_moneyness(strike: f64, spot: f64) -> f64 {
        (strike / spot).ln()
    }

    /// Standard normal cumulative distribution function.
    ///
    /// Uses `erfc` rather than `1 + erf` so the left tail keeps full relative precision.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x * FRAC_1_SQRT_2)
    }

    /// Standard normal probability density function
    pub fn norm_pdf(x: f64) -> f64 {
        (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
    }

}
