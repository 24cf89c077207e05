//! Sheet layout: workbook path, sheet names and every cell coordinate the
//! batch run touches.
//!
//! All coordinates are 1-based, as shown in Excel (row 1, column 1 = A1).
//! The defaults describe the `Pricess2.xlsx` price list; a YAML file can
//! override any subset of fields:
//!
//! ```yaml
//! file: prices.xlsx
//! prices:
//!   sheet: Price3
//!   first_row: 9
//! ```

use crate::error::{RatesError, RatesResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Last row of an .xlsx worksheet
pub const MAX_ROW: u32 = 1_048_576;
/// Last column of an .xlsx worksheet (XFD)
pub const MAX_COLUMN: u16 = 16_384;

/// A fixed 1-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellPos {
    pub row: u32,
    pub column: u16,
}

impl CellPos {
    pub const fn new(row: u32, column: u16) -> Self {
        Self { row, column }
    }
}

fn check_row(what: &str, row: u32) -> RatesResult<()> {
    if row == 0 || row > MAX_ROW {
        return Err(RatesError::Layout(format!(
            "{} row {} is outside 1..={}",
            what, row, MAX_ROW
        )));
    }
    Ok(())
}

fn check_column(what: &str, column: u16) -> RatesResult<()> {
    if column == 0 || column > MAX_COLUMN {
        return Err(RatesError::Layout(format!(
            "{} column {} is outside 1..={}",
            what, column, MAX_COLUMN
        )));
    }
    Ok(())
}

fn check_cell(what: &str, pos: CellPos) -> RatesResult<()> {
    check_row(what, pos.row)?;
    check_column(what, pos.column)
}

/// Full layout of the workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub file: PathBuf,
    pub rates: RateTableLayout,
    pub record: RecordLayout,
    pub prices: PriceTableLayout,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            file: PathBuf::from("Pricess2.xlsx"),
            rates: RateTableLayout::default(),
            record: RecordLayout::default(),
            prices: PriceTableLayout::default(),
        }
    }
}

impl Layout {
    /// Load a layout from a YAML file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> RatesResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a YAML layout and check its coordinates
    pub fn from_yaml(content: &str) -> RatesResult<Self> {
        let layout: Layout = serde_yaml::from_str(content)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Every row and column must address a real worksheet cell
    pub fn validate(&self) -> RatesResult<()> {
        let rates = &self.rates;
        check_row("rates.first_row", rates.first_row)?;
        check_column("rates.date_column", rates.date_column)?;
        check_column("rates.usd_column", rates.usd_column)?;
        check_column("rates.usd_deferred_column", rates.usd_deferred_column)?;
        check_column("rates.eur_column", rates.eur_column)?;
        check_column("rates.eur_deferred_column", rates.eur_deferred_column)?;

        let record = &self.record;
        check_cell("record.date", record.date)?;
        check_cell("record.usd", record.usd)?;
        check_cell("record.usd_deferred", record.usd_deferred)?;
        check_cell("record.eur", record.eur)?;
        check_cell("record.eur_deferred", record.eur_deferred)?;

        let prices = &self.prices;
        check_row("prices.first_row", prices.first_row)?;
        check_column("prices.key_column", prices.key_column)?;
        check_column("prices.price_column", prices.price_column)?;
        check_column("prices.currency_column", prices.currency_column)?;
        check_column("prices.result_column", prices.result_column)?;
        check_column("prices.deferred_result_column", prices.deferred_result_column)?;
        Ok(())
    }
}

/// Where the daily rate table lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateTableLayout {
    pub sheet: String,
    pub first_row: u32,
    pub date_column: u16,
    pub usd_column: u16,
    pub usd_deferred_column: u16,
    pub eur_column: u16,
    pub eur_deferred_column: u16,
}

impl Default for RateTableLayout {
    fn default() -> Self {
        Self {
            sheet: "Kurs".to_string(),
            first_row: 2,
            date_column: 2,         // B
            usd_column: 3,          // C
            usd_deferred_column: 4, // D
            eur_column: 5,          // E
            eur_deferred_column: 6, // F
        }
    }
}

/// Cells on the price sheet that receive the day's rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    pub date: CellPos,
    pub usd: CellPos,
    pub usd_deferred: CellPos,
    pub eur: CellPos,
    pub eur_deferred: CellPos,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            date: CellPos::new(2, 2),         // B2
            usd: CellPos::new(3, 4),          // D3
            usd_deferred: CellPos::new(3, 5), // E3
            eur: CellPos::new(4, 4),          // D4
            eur_deferred: CellPos::new(4, 5), // E4
        }
    }
}

/// The product price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTableLayout {
    pub sheet: String,
    pub first_row: u32,
    /// Scan stops at the first row whose key cell is empty
    pub key_column: u16,
    pub price_column: u16,
    pub currency_column: u16,
    pub result_column: u16,
    pub deferred_result_column: u16,
}

impl Default for PriceTableLayout {
    fn default() -> Self {
        Self {
            sheet: "Price2".to_string(),
            first_row: 7,
            key_column: 2,              // B
            price_column: 10,           // J
            currency_column: 11,        // K
            result_column: 12,          // L
            deferred_result_column: 13, // M
        }
    }
}
