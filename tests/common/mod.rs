//! Shared fixture: a small Pricess2-style workbook written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Formula, Workbook};
use std::path::Path;

/// Number format on the first price row
pub const RUB_FORMAT: &str = "#,##0.00 \"RUB\"";

/// Excel serial number of 2024-01-16
pub const JAN_16_SERIAL: f64 = 45307.0;

/// Write the fixture workbook.
///
/// Kurs: B2 text date, B3 real date, B4 text date, rates in C..F.
/// Price2: A1:F1 merged title, wide column B, rows 7..9 priced (EVRO,
/// DOLLAR, unknown), RUB number format on J7 and L7, a formula in N7.
/// Notes: one text cell, checks sheet order survives a save.
pub fn write_fixture(path: &Path) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let kurs = workbook.add_worksheet();
    kurs.set_name("Kurs").unwrap();
    kurs.write_string(0, 1, "Date").unwrap();
    kurs.write_string(0, 2, "USD").unwrap();
    kurs.write_string(0, 3, "USD deferred").unwrap();
    kurs.write_string(0, 4, "EUR").unwrap();
    kurs.write_string(0, 5, "EUR deferred").unwrap();

    kurs.write_string(1, 1, "2024-01-15").unwrap();
    kurs.write_number_with_format(2, 1, JAN_16_SERIAL, &date_format).unwrap();
    kurs.write_string(3, 1, "2024-01-17").unwrap();

    let rates = [
        [89.5, 91.0, 97.75, 99.25],
        [90.0, 92.0, 98.0, 100.0],
        [90.5, 92.5, 98.5, 100.5],
    ];
    for (i, row) in rates.iter().enumerate() {
        for (j, rate) in row.iter().enumerate() {
            kurs.write_number(1 + i as u32, 2 + j as u16, *rate).unwrap();
        }
    }

    let price = workbook.add_worksheet();
    price.set_name("Price2").unwrap();
    price
        .merge_range(0, 0, 0, 5, "Price list", &Format::new())
        .unwrap();
    price.set_column_width(1, 40).unwrap();
    price.write_string(1, 1, "old date").unwrap();
    price.write_string(5, 1, "Product").unwrap();
    price.write_string(5, 9, "Price").unwrap();
    price.write_string(5, 10, "Currency").unwrap();

    let products = [
        ("Widget", 10.0, "EVRO"),
        ("Gadget", 5.0, "DOLLAR"),
        ("Gizmo", 3.0, "RUB"),
    ];
    for (i, (name, amount, tag)) in products.iter().enumerate() {
        let row = 6 + i as u32;
        price.write_string(row, 1, *name).unwrap();
        price.write_number(row, 9, *amount).unwrap();
        price.write_string(row, 10, *tag).unwrap();
    }
    let rub_format = Format::new().set_num_format(RUB_FORMAT);
    price.write_number_with_format(6, 9, 10.0, &rub_format).unwrap();
    price.write_blank(6, 11, &rub_format).unwrap();
    price.write_formula(6, 13, Formula::new("=L7+M7")).unwrap();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "keep me").unwrap();

    workbook.save(path).unwrap();
}
