//! Excel patcher - writes edited cells back into the file they came from

use super::exporter::excel_serial;
use super::workbook::{checked_coordinate, Workbook, Worksheet};
use crate::error::{RatesError, RatesResult};
use crate::types::{cell_name, CellValue};
use std::path::Path;
use tracing::{debug, info};

const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";

/// Applies the edited cells of a loaded Workbook to a copy of its source
/// file. Everything else in the file (styles, merged ranges, column widths,
/// untouched formulas) is carried over as it was.
pub struct WorkbookPatcher<'a> {
    workbook: &'a Workbook,
}

impl<'a> WorkbookPatcher<'a> {
    /// Patcher for a workbook previously read with `Workbook::load`
    pub fn new(workbook: &'a Workbook) -> Self {
        Self { workbook }
    }

    /// Read `source`, overwrite the edited cells, write the result to `output_path`
    pub fn apply(&self, source: &Path, output_path: &Path) -> RatesResult<()> {
        let mut book = umya_spreadsheet::reader::xlsx::read(source)
            .map_err(|e| RatesError::Open(format!("{}: {}", source.display(), e)))?;

        let mut patched = 0;
        for sheet in self.workbook.sheets() {
            patched += self.patch_sheet(&mut book, sheet)?;
        }

        umya_spreadsheet::writer::xlsx::write(&book, output_path)
            .map_err(|e| RatesError::Save(format!("{}: {}", output_path.display(), e)))?;

        info!(
            "Saved file {} ({} cells updated)",
            output_path.display(),
            patched
        );
        Ok(())
    }

    fn patch_sheet(
        &self,
        book: &mut umya_spreadsheet::Spreadsheet,
        sheet: &Worksheet,
    ) -> RatesResult<usize> {
        let mut edited = sheet.edited_cells().peekable();
        if edited.peek().is_none() {
            return Ok(0);
        }

        let target = book
            .get_sheet_by_name_mut(sheet.name())
            .ok_or_else(|| RatesError::SheetNotFound(sheet.name().to_string()))?;

        let mut patched = 0;
        for (row, column, value) in edited {
            let (row, column) = checked_coordinate(sheet.name(), row, column)?;
            // umya addresses cells as (column, row)
            let cell = target.get_cell_mut((u32::from(column), row));
            match value {
                CellValue::Number(n) => {
                    cell.set_value_number(*n);
                }
                CellValue::Text(s) => {
                    cell.set_value_string(s.as_str());
                }
                CellValue::Bool(b) => {
                    cell.set_value_bool(*b);
                }
                CellValue::Date(dt) => {
                    let has_format = cell
                        .get_style()
                        .get_number_format()
                        .map(|nf| !nf.get_format_code().eq_ignore_ascii_case("General"))
                        .unwrap_or(false);
                    cell.set_value_number(excel_serial(dt));
                    if !has_format {
                        cell.get_style_mut()
                            .get_number_format_mut()
                            .set_format_code(DATE_NUM_FORMAT);
                    }
                }
                CellValue::Empty | CellValue::Error(_) => {
                    debug!(
                        "Skipping {}!{}: {} is not written",
                        sheet.name(),
                        cell_name(row, column),
                        value
                    );
                    continue;
                }
            }
            patched += 1;
        }
        Ok(patched)
    }
}
