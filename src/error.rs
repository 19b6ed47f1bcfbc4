//! Error type returned by the pricing engine.

use thiserror::Error;

/// Failure raised before any computation when a pricing input is out of range.
///
/// The engine has exactly one failure class. Callers at an I/O boundary
/// (config files, CSV batches, the CLI) wrap it into `anyhow::Error` with `?`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter { field: &'static str, reason: String },
}

pub type PricingResult<T> = Result<T, PricingError>;

impl PricingError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending input.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidParameter { field, .. } => field,
        }
    }
}

/// Ensure `value` is finite and strictly positive.
pub(crate) fn require_positive(field: &'static str, value: f64) -> PricingResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(PricingError::invalid(
            field,
            format!("must be greater than 0 (got {})", value),
        ));
    }
    Ok(())
}

/// Ensure `value` is neither NaN nor infinite.
pub(crate) fn require_finite(field: &'static str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(
            field,
            format!("must be finite (got {})", value),
        ));
    }
    Ok(())
}
