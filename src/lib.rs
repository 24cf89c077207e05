//! Ratesheet - daily exchange rates into an .xlsx price list
//!
//! Looks up the day's USD/EUR rates on the rate sheet, records them in the
//! header of the price sheet and recalculates every tagged price row.
//!
//! # Example
//!
//! ```no_run
//! use ratesheet::config::Layout;
//! use ratesheet::core::{PriceCalculator, RateFinder};
//! use ratesheet::excel::Workbook;
//! use chrono::NaiveDate;
//!
//! let layout = Layout::default();
//! let mut workbook = Workbook::load(&layout.file)?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//!
//! let rates = RateFinder::new(workbook.sheet(&layout.rates.sheet)?, &layout.rates)
//!     .get_rates_by_date(date)?;
//!
//! if let Some(rates) = rates {
//!     let sheet = workbook.sheet_mut(&layout.prices.sheet)?;
//!     PriceCalculator::new(&layout.prices, rates).calculate_prices(sheet)?;
//!     workbook.save(&layout.file)?;
//! }
//! # Ok::<(), ratesheet::error::RatesError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;

// Re-export commonly used types
pub use error::{RatesError, RatesResult};
pub use types::{CellValue, Currency, RateRecord};
