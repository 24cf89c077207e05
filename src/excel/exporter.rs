//! Excel exporter - in-memory Workbook → .xlsx

use super::workbook::{checked_coordinate, Workbook, Worksheet};
use crate::error::{RatesError, RatesResult};
use crate::types::CellValue;
use chrono::{NaiveDateTime, Timelike};
use rust_xlsxwriter::{Format, Formula};
use std::path::Path;
use tracing::{debug, info};

/// Writes a Workbook to disk, one worksheet per sheet in file order
pub struct WorkbookExporter<'a> {
    workbook: &'a Workbook,
    date_format: Format,
    datetime_format: Format,
}

impl<'a> WorkbookExporter<'a> {
    /// Exporter with `yyyy-mm-dd` formats for date cells
    pub fn new(workbook: &'a Workbook) -> Self {
        Self {
            workbook,
            date_format: Format::new().set_num_format("yyyy-mm-dd"),
            datetime_format: Format::new().set_num_format("yyyy-mm-dd hh:mm:ss"),
        }
    }

    /// Write a new .xlsx file at `output_path`, replacing any existing one
    pub fn export(&self, output_path: &Path) -> RatesResult<()> {
        let mut xlsx = rust_xlsxwriter::Workbook::new();

        for sheet in self.workbook.sheets() {
            let worksheet = xlsx.add_worksheet();
            worksheet.set_name(sheet.name()).map_err(|e| {
                RatesError::Save(format!("Failed to set worksheet name '{}': {}", sheet.name(), e))
            })?;
            self.export_sheet(worksheet, sheet)?;
        }

        xlsx.save(output_path).map_err(|e| {
            RatesError::Save(format!("{}: {}", output_path.display(), e))
        })?;

        info!("Saved file {}", output_path.display());
        Ok(())
    }

    fn export_sheet(
        &self,
        worksheet: &mut rust_xlsxwriter::Worksheet,
        sheet: &Worksheet,
    ) -> RatesResult<()> {
        for (row, column, cell) in sheet.cells() {
            let (row, column) = checked_coordinate(sheet.name(), row, column)?;
            // Worksheet API is 0-indexed
            let (r, c) = (row - 1, column - 1);

            let written = if let Some(formula) = &cell.formula {
                let mut formula = Formula::new(format!("={}", formula));
                if let Some(result) = cached_result(&cell.value) {
                    formula = formula.set_result(result);
                }
                worksheet.write_formula(r, c, formula).map(|_| ())
            } else {
                match &cell.value {
                    CellValue::Empty => Ok(()),
                    CellValue::Number(n) => worksheet.write_number(r, c, *n).map(|_| ()),
                    CellValue::Text(s) => worksheet.write_string(r, c, s).map(|_| ()),
                    CellValue::Bool(b) => worksheet.write_boolean(r, c, *b).map(|_| ()),
                    CellValue::Date(dt) => {
                        let format = if dt.time().num_seconds_from_midnight() == 0 {
                            &self.date_format
                        } else {
                            &self.datetime_format
                        };
                        worksheet
                            .write_number_with_format(r, c, excel_serial(dt), format)
                            .map(|_| ())
                    }
                    CellValue::Error(e) => {
                        debug!(
                            "Skipping error value {} in {}!{}",
                            e,
                            sheet.name(),
                            crate::types::cell_name(row, column)
                        );
                        Ok(())
                    }
                }
            };

            written.map_err(|e| {
                RatesError::Save(format!(
                    "Failed to write {}!{}: {}",
                    sheet.name(),
                    crate::types::cell_name(row, column),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

/// Serial of 1970-01-01 in the 1900 date system
const UNIX_EPOCH_SERIAL: f64 = 25_569.0;

/// Excel serial date number (1900 date system)
pub(crate) fn excel_serial(dt: &NaiveDateTime) -> f64 {
    dt.and_utc().timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_SERIAL
}

/// Cached result text stored next to a formula, in the form Excel keeps it
fn cached_result(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Empty => None,
        CellValue::Number(n) => Some(n.to_string()),
        CellValue::Text(s) => Some(s.clone()),
        CellValue::Bool(true) => Some("TRUE".to_string()),
        CellValue::Bool(false) => Some("FALSE".to_string()),
        CellValue::Date(dt) => Some(excel_serial(dt).to_string()),
        CellValue::Error(e) => Some(e.clone()),
    }
}
