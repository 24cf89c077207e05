use super::number_at;
use crate::config::PriceTableLayout;
use crate::error::RatesResult;
use crate::excel::Worksheet;
use crate::types::{Currency, RateRecord};
use tracing::{debug, info};

/// Counts from one pass over the price table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceSummary {
    pub rows_scanned: usize,
    pub euro_rows: usize,
    pub dollar_rows: usize,
    /// Rows without a recognised currency tag
    pub skipped_rows: usize,
}

impl PriceSummary {
    pub fn rows_priced(&self) -> usize {
        self.euro_rows + self.dollar_rows
    }
}

/// Recalculates every tagged row of the price table with one day's rates
pub struct PriceCalculator<'a> {
    layout: &'a PriceTableLayout,
    rates: RateRecord,
}

impl<'a> PriceCalculator<'a> {
    pub fn new(layout: &'a PriceTableLayout, rates: RateRecord) -> Self {
        Self { layout, rates }
    }

    /// (primary, deferred) price for one row
    pub fn convert(&self, price: f64, currency: Currency) -> (f64, f64) {
        let (rate, deferred_rate) = self.rates.pair(currency);
        (price * rate, price * deferred_rate)
    }

    /// Walk the table from its first row until the key column is empty
    pub fn calculate_prices(&self, sheet: &mut Worksheet) -> RatesResult<PriceSummary> {
        info!("Start calculating prices");
        let layout = self.layout;
        let mut summary = PriceSummary::default();
        let mut row = layout.first_row;

        while !sheet.get_value(row, layout.key_column).is_blank() {
            summary.rows_scanned += 1;

            let currency = sheet
                .get_value(row, layout.currency_column)
                .as_text()
                .and_then(Currency::from_tag);

            match currency {
                Some(currency) => {
                    let price = number_at(sheet, row, layout.price_column, "price")?;
                    let (primary, deferred) = self.convert(price, currency);
                    info!(
                        "Calculated {} prices for row {}: {}, {}",
                        currency.tag(),
                        row,
                        primary,
                        deferred
                    );
                    sheet.set_value(row, layout.result_column, primary);
                    sheet.set_value(row, layout.deferred_result_column, deferred);

                    match currency {
                        Currency::Euro => summary.euro_rows += 1,
                        Currency::Dollar => summary.dollar_rows += 1,
                    }
                }
                None => {
                    debug!("Row {} has no known currency tag, skipped", row);
                    summary.skipped_rows += 1;
                }
            }

            row += 1;
        }

        Ok(summary)
    }
}
