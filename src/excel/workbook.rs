//! In-memory workbook: every sheet of an .xlsx file as a sparse cell grid

use crate::error::{RatesError, RatesResult};
use crate::types::{cell_name, Cell, CellValue};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::debug;

static EMPTY: CellValue = CellValue::Empty;

/// One worksheet, addressed by 1-based (row, column)
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    name: String,
    cells: BTreeMap<(u32, u16), Cell>,
    /// Cells written through `set_value` since the sheet was loaded
    edited: BTreeSet<(u32, u16)>,
}

impl PartialEq for Worksheet {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.cells == other.cells
    }
}

impl Worksheet {
    /// Create an empty worksheet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            edited: BTreeSet::new(),
        }
    }

    /// Sheet name as shown on the workbook tab
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value at (row, column); absent cells read as `Empty`
    pub fn get_value(&self, row: u32, column: u16) -> &CellValue {
        self.cells
            .get(&(row, column))
            .map(|cell| &cell.value)
            .unwrap_or(&EMPTY)
    }

    /// Overwrite the cell at (row, column). Any formula it held is dropped.
    pub fn set_value(&mut self, row: u32, column: u16, value: impl Into<CellValue>) {
        let value = value.into();
        debug!(
            "Set value {} in {}!{}",
            value,
            self.name,
            cell_name(row, column)
        );
        self.cells.insert(
            (row, column),
            Cell {
                value,
                formula: None,
            },
        );
        self.edited.insert((row, column));
    }

    /// Formula at (row, column) without the leading `=`
    pub fn get_formula(&self, row: u32, column: u16) -> Option<&str> {
        self.cells
            .get(&(row, column))
            .and_then(|cell| cell.formula.as_deref())
    }

    /// Store a formula with its cached value, as read from a file
    pub(crate) fn put_formula(&mut self, row: u32, column: u16, formula: String) {
        self.cells.entry((row, column)).or_default().formula = Some(formula);
    }

    /// Store a raw value without touching an existing formula
    pub(crate) fn put_value(&mut self, row: u32, column: u16, value: CellValue) {
        self.cells.entry((row, column)).or_default().value = value;
    }

    /// Non-empty cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.cells
            .iter()
            .map(|(&(row, column), cell)| (row, column, cell))
    }

    /// Cells written through `set_value`, with their new values
    pub fn edited_cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.edited
            .iter()
            .map(|&(row, column)| (row, column, self.get_value(row, column)))
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Check a 1-based coordinate before it reaches a writer
pub(crate) fn checked_coordinate(sheet: &str, row: u32, column: u16) -> RatesResult<(u32, u16)> {
    if row == 0 || column == 0 {
        return Err(RatesError::Save(format!(
            "{}: cell coordinates start at 1, got row {} column {}",
            sheet, row, column
        )));
    }
    Ok((row, column))
}

/// All worksheets of a workbook, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
    /// File the workbook was loaded from
    source: Option<PathBuf>,
}

impl Workbook {
    /// Create a workbook with no sheets and no source file
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every sheet of an .xlsx file
    pub fn load(path: &Path) -> RatesResult<Self> {
        super::WorkbookImporter::new(path).import()
    }

    /// Write the workbook to `path`.
    ///
    /// A loaded workbook is saved by patching its source file, so only
    /// edited cells change and styles, merges and column widths stay. A
    /// workbook built in memory is written from scratch.
    pub fn save(&self, path: &Path) -> RatesResult<()> {
        match &self.source {
            Some(source) => super::WorkbookPatcher::new(self).apply(source, path),
            None => super::WorkbookExporter::new(self).export(path),
        }
    }

    /// File the workbook was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub(crate) fn set_source(&mut self, path: PathBuf) {
        self.source = Some(path);
    }

    /// Append a sheet after the existing ones
    pub fn add_sheet(&mut self, sheet: Worksheet) {
        self.sheets.push(sheet);
    }

    /// Sheet names in file order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name()).collect()
    }

    /// All sheets in file order
    pub fn sheets(&self) -> &[Worksheet] {
        &self.sheets
    }

    /// Sheet by name; a missing sheet is an error
    pub fn sheet(&self, name: &str) -> RatesResult<&Worksheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RatesError::SheetNotFound(name.to_string()))
    }

    /// Mutable sheet by name; a missing sheet is an error
    pub fn sheet_mut(&mut self, name: &str) -> RatesResult<&mut Worksheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| RatesError::SheetNotFound(name.to_string()))
    }
}
