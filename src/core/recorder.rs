use crate::config::RecordLayout;
use crate::excel::Worksheet;
use crate::types::{RateRecord, DATE_FORMAT};
use chrono::NaiveDate;
use tracing::info;

/// Writes the day's rates into the fixed header cells of the price sheet
pub struct RateRecorder<'a> {
    layout: &'a RecordLayout,
}

impl<'a> RateRecorder<'a> {
    pub fn new(layout: &'a RecordLayout) -> Self {
        Self { layout }
    }

    /// Overwrites whatever the target cells held
    pub fn record_rates(&self, sheet: &mut Worksheet, date: NaiveDate, rates: &RateRecord) {
        let layout = self.layout;
        let date = date.format(DATE_FORMAT).to_string();

        sheet.set_value(layout.date.row, layout.date.column, date.as_str());
        sheet.set_value(layout.usd.row, layout.usd.column, rates.usd);
        sheet.set_value(
            layout.usd_deferred.row,
            layout.usd_deferred.column,
            rates.usd_deferred,
        );
        sheet.set_value(layout.eur.row, layout.eur.column, rates.eur);
        sheet.set_value(
            layout.eur_deferred.row,
            layout.eur_deferred.column,
            rates.eur_deferred,
        );

        info!("Recorded exchange rates for {}: {}", date, rates);
    }
}
