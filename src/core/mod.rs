//! Rate lookup, rate recording and price recalculation

pub mod price_calculator;
pub mod rate_finder;
pub mod recorder;

pub use price_calculator::{PriceCalculator, PriceSummary};
pub use rate_finder::RateFinder;
pub use recorder::RateRecorder;

use crate::error::{RatesError, RatesResult};
use crate::excel::Worksheet;
use crate::types::cell_name;

/// Read a numeric cell, failing with `Malformed` for anything else
pub(crate) fn number_at(sheet: &Worksheet, row: u32, column: u16, what: &str) -> RatesResult<f64> {
    let value = sheet.get_value(row, column);
    value.as_number().ok_or_else(|| RatesError::Malformed {
        sheet: sheet.name().to_string(),
        cell: cell_name(row, column),
        reason: format!("expected a number for {}, found '{}'", what, value),
    })
}
