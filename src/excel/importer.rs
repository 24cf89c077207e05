//! Excel importer - .xlsx → in-memory Workbook

use super::workbook::{Workbook, Worksheet};
use crate::error::{RatesError, RatesResult};
use crate::types::CellValue;
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads every sheet (values and formulas) of an .xlsx file
pub struct WorkbookImporter {
    path: PathBuf,
}

impl WorkbookImporter {
    /// Importer for the .xlsx file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read every sheet; the workbook remembers `path` as its source file
    pub fn import(&self) -> RatesResult<Workbook> {
        let mut excel: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            RatesError::Open(format!("{}: {}", self.path.display(), e))
        })?;

        let mut workbook = Workbook::new();

        for sheet_name in excel.sheet_names().to_vec() {
            let mut sheet = Worksheet::new(sheet_name.clone());

            let range = excel.worksheet_range(&sheet_name).map_err(|e| {
                RatesError::Open(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            if let Some((start_row, start_col)) = range.start() {
                for (row, col, data) in range.cells() {
                    let value = convert_cell(data);
                    if value == CellValue::Empty {
                        continue;
                    }
                    sheet.put_value(
                        start_row + row as u32 + 1,
                        (start_col as usize + col + 1) as u16,
                        value,
                    );
                }
            }

            // Formulas come back without the leading '='
            if let Ok(formulas) = excel.worksheet_formula(&sheet_name) {
                if let Some((start_row, start_col)) = formulas.start() {
                    for (row, col, formula) in formulas.cells() {
                        if formula.is_empty() {
                            continue;
                        }
                        sheet.put_formula(
                            start_row + row as u32 + 1,
                            (start_col as usize + col + 1) as u16,
                            formula.trim_start_matches('=').to_string(),
                        );
                    }
                }
            }

            debug!("Loaded sheet '{}' ({} cells)", sheet.name(), sheet.len());
            workbook.add_sheet(sheet);
        }

        workbook.set_source(self.path.clone());
        Ok(workbook)
    }
}

/// Convert a calamine cell to a CellValue
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(data.to_string())),
        Data::DateTimeIso(s) => parse_iso_datetime(s)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::Text(s.clone())),
        Data::Error(e) => CellValue::Error(e.to_string()),
        #[allow(unreachable_patterns)]
        _ => CellValue::Text(data.to_string()),
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
