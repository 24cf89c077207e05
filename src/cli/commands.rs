use crate::config::Layout;
use crate::core::{PriceCalculator, PriceSummary, RateFinder, RateRecorder};
use crate::error::RatesResult;
use crate::excel::Workbook;
use crate::types::{RateRecord, DATE_FORMAT};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What a batch run ended with
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// No rates for the date; the workbook was left alone
    NotFound,
    Completed {
        rates: RateRecord,
        summary: PriceSummary,
        saved: bool,
    },
}

/// Build the layout from an optional YAML file plus a workbook path override
pub fn resolve_layout(layout_file: Option<&Path>, file: Option<PathBuf>) -> RatesResult<Layout> {
    let mut layout = match layout_file {
        Some(path) => Layout::from_file(path)?,
        None => Layout::default(),
    };
    if let Some(file) = file {
        layout.file = file;
    }
    Ok(layout)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn log_rates(date: &str, rates: &RateRecord) {
    info!("Exchange rates for {}:", date);
    info!("USD: {}", rates.usd);
    info!("USD Deferred: {}", rates.usd_deferred);
    info!("EUR: {}", rates.eur);
    info!("EUR Deferred: {}", rates.eur_deferred);
}

/// Execute the batch run: look up, record, recalculate, save
pub fn run(layout: &Layout, date: Option<NaiveDate>, dry_run: bool) -> RatesResult<RunOutcome> {
    layout.validate()?;
    let date = date.unwrap_or_else(today);
    let formatted = date.format(DATE_FORMAT).to_string();

    println!("{}", "💱 Ratesheet - Updating prices".bold().green());
    println!("   File: {}", layout.file.display());
    println!("   Date: {}", formatted);
    println!();

    let mut workbook = Workbook::load(&layout.file)?;

    let rates = {
        let rate_sheet = workbook.sheet(&layout.rates.sheet)?;
        RateFinder::new(rate_sheet, &layout.rates).get_rates_by_date(date)?
    };

    let Some(rates) = rates else {
        warn!("No exchange rates found for {}.", formatted);
        println!(
            "{}",
            format!("⚠️  No exchange rates found for {}", formatted).yellow()
        );
        return Ok(RunOutcome::NotFound);
    };
    log_rates(&formatted, &rates);

    let price_sheet = workbook.sheet_mut(&layout.prices.sheet)?;
    RateRecorder::new(&layout.record).record_rates(price_sheet, date, &rates);
    let summary = PriceCalculator::new(&layout.prices, rates).calculate_prices(price_sheet)?;

    println!("{}", "✅ Rates:".bold().green());
    println!("   USD {} / {}", rates.usd, rates.usd_deferred);
    println!("   EUR {} / {}", rates.eur, rates.eur_deferred);
    println!(
        "   Priced {} rows ({} EVRO, {} DOLLAR), skipped {}",
        summary.rows_priced(),
        summary.euro_rows,
        summary.dollar_rows,
        summary.skipped_rows
    );

    if dry_run {
        println!("{}", "📋 Dry run complete - no changes written".yellow());
    } else {
        workbook.save(&layout.file)?;
        info!("Finished all operations and saved the Excel file.");
        println!(
            "{}",
            format!("💾 Saved {}", layout.file.display()).bold().green()
        );
    }

    Ok(RunOutcome::Completed {
        rates,
        summary,
        saved: !dry_run,
    })
}

/// Print the rate record for a date without touching the workbook
pub fn lookup(layout: &Layout, date: Option<NaiveDate>) -> RatesResult<Option<RateRecord>> {
    layout.validate()?;
    let date = date.unwrap_or_else(today);
    let formatted = date.format(DATE_FORMAT).to_string();

    let workbook = Workbook::load(&layout.file)?;
    let rate_sheet = workbook.sheet(&layout.rates.sheet)?;
    let rates = RateFinder::new(rate_sheet, &layout.rates).get_rates_by_date(date)?;

    match &rates {
        Some(rates) => {
            log_rates(&formatted, rates);
            println!("{}", format!("Exchange rates for {}:", formatted).bold().green());
            println!("   USD:          {}", rates.usd);
            println!("   USD Deferred: {}", rates.usd_deferred);
            println!("   EUR:          {}", rates.eur);
            println!("   EUR Deferred: {}", rates.eur_deferred);
        }
        None => {
            warn!("No exchange rates found for {}.", formatted);
            println!(
                "{}",
                format!("⚠️  No exchange rates found for {}", formatted).yellow()
            );
        }
    }

    Ok(rates)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
