//! Workbook load/save
//!
//! The whole workbook is read into memory with calamine and edited through
//! [`Worksheet::get_value`] / [`Worksheet::set_value`]. Saving a loaded
//! workbook patches only the edited cells into a copy of its source file
//! with umya-spreadsheet, so formatting and layout survive. A workbook built
//! in memory is written from scratch with rust_xlsxwriter.

mod exporter;
mod importer;
mod patcher;
mod workbook;

pub use exporter::WorkbookExporter;
pub use importer::WorkbookImporter;
pub use patcher::WorkbookPatcher;
pub use workbook::{Workbook, Worksheet};
