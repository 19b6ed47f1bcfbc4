//! CSV batch pricing.
//!
//! Input columns: `option_type,spot,volatility,strike,risk_free_rate,time_to_expiry`.
//! Output repeats them and appends `premium` and `error`. A row that parses but
//! breaks an input invariant is reported in its `error` column; the rest of the
//! batch still prices. Malformed CSV aborts the whole read.
//!
//! Rows are numbered from 1 at the first data line, after the header, in both
//! read errors and rejection logs.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PricingResult;
use crate::models::traits::PricingModel;
use crate::types::{MarketModel, OptionType, Premium, PricingRequest};

/// One input line, as read from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchInput {
    /// "call" or "put", any casing
    pub option_type: String,
    pub spot: f64,
    pub volatility: f64,
    pub strike: f64,
    pub risk_free_rate: f64,
    /// Time to expiration in years
    pub time_to_expiry: f64,
}

impl BatchInput {
    pub fn to_request(&self) -> PricingResult<PricingRequest> {
        let option_type: OptionType = self.option_type.parse()?;
        PricingRequest::new(
            MarketModel::new(self.spot, self.volatility)?,
            self.strike,
            self.risk_free_rate,
            self.time_to_expiry,
            option_type,
        )
    }
}

impl From<&PricingRequest> for BatchInput {
    fn from(request: &PricingRequest) -> Self {
        Self {
            option_type: request.option_type.to_string(),
            spot: request.model.spot,
            volatility: request.model.volatility,
            strike: request.strike,
            risk_free_rate: request.risk_free_rate,
            time_to_expiry: request.time_to_expiry,
        }
    }
}

/// One priced output line. Exactly one of `premium` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    pub option_type: String,
    pub spot: f64,
    pub volatility: f64,
    pub strike: f64,
    pub risk_free_rate: f64,
    pub time_to_expiry: f64,
    pub premium: Option<Premium>,
    pub error: Option<String>,
}

impl BatchRow {
    pub fn is_priced(&self) -> bool {
        self.premium.is_some()
    }
}

/// 1-based data row number for the `index`-th input.
fn row_number(index: usize) -> usize {
    index + 1
}

pub fn read_inputs<R: Read>(reader: R) -> Result<Vec<BatchInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for (i, record) in reader.deserialize::<BatchInput>().enumerate() {
        let input = record.with_context(|| format!("malformed row {}", row_number(i)))?;
        inputs.push(input);
    }
    debug!(rows = inputs.len(), "read batch input");
    Ok(inputs)
}

pub fn load_inputs(path: impl AsRef<Path>) -> Result<Vec<BatchInput>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open batch file {}", path.display()))?;
    read_inputs(file).with_context(|| format!("in {}", path.display()))
}

/// Prices every input with `model`, in input order.
pub fn price_batch<M: PricingModel>(model: &M, inputs: &[BatchInput]) -> Vec<BatchRow> {
    let mut rows = Vec::with_capacity(inputs.len());

    for (i, input) in inputs.iter().enumerate() {
        let outcome = input
            .to_request()
            .and_then(|request| model.premium(&request));

        let (premium, error) = match outcome {
            Ok(premium) => (Some(premium), None),
            Err(e) => {
                warn!(row = row_number(i), error = %e, "rejected batch row");
                (None, Some(e.to_string()))
            }
        };

        rows.push(BatchRow {
            option_type: input.option_type.clone(),
            spot: input.spot,
            volatility: input.volatility,
            strike: input.strike,
            risk_free_rate: input.risk_free_rate,
            time_to_expiry: input.time_to_expiry,
            premium,
            error,
        });
    }

    let priced = rows.iter().filter(|r| r.is_priced()).count();
    debug!(
        model = model.model_name(),
        priced,
        rejected = rows.len() - priced,
        "priced batch"
    );
    rows
}

pub fn write_results<W: Write>(writer: W, rows: &[BatchRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for row in rows {
        writer.serialize(row).context("failed to write result row")?;
    }
    writer.flush().context("failed to flush results")?;
    Ok(())
}
