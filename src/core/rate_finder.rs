use super::number_at;
use crate::config::RateTableLayout;
use crate::error::RatesResult;
use crate::excel::Worksheet;
use crate::types::{RateRecord, DATE_FORMAT};
use chrono::NaiveDate;
use tracing::debug;

/// Looks up the rate record for a date in the daily rate table
pub struct RateFinder<'a> {
    sheet: &'a Worksheet,
    layout: &'a RateTableLayout,
}

impl<'a> RateFinder<'a> {
    pub fn new(sheet: &'a Worksheet, layout: &'a RateTableLayout) -> Self {
        Self { sheet, layout }
    }

    /// Scan the date column from the first row down to the first empty cell.
    ///
    /// The first row whose date reads as `date` supplies the record. `None`
    /// means the table has no row for that date.
    pub fn get_rates_by_date(&self, date: NaiveDate) -> RatesResult<Option<RateRecord>> {
        let target = date.format(DATE_FORMAT).to_string();
        let mut row = self.layout.first_row;

        loop {
            let cell = self.sheet.get_value(row, self.layout.date_column);
            if cell.is_blank() {
                break;
            }

            if cell.as_date_string().as_deref() == Some(target.as_str()) {
                debug!("Found rates for {} in {} row {}", target, self.sheet.name(), row);
                return self.read_record(row).map(Some);
            }
            row += 1;
        }

        debug!(
            "Scanned {} rows of {} without a match for {}",
            row - self.layout.first_row,
            self.sheet.name(),
            target
        );
        Ok(None)
    }

    fn read_record(&self, row: u32) -> RatesResult<RateRecord> {
        let layout = self.layout;
        Ok(RateRecord {
            usd: number_at(self.sheet, row, layout.usd_column, "usd")?,
            usd_deferred: number_at(self.sheet, row, layout.usd_deferred_column, "usd_deferred")?,
            eur: number_at(self.sheet, row, layout.eur_column, "eur")?,
            eur_deferred: number_at(self.sheet, row, layout.eur_deferred_column, "eur_deferred")?,
        })
    }
}
