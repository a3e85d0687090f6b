//! Helpers shared by the integration tests: reading an exported file back
//! and comparing its rows field by field.
#![allow(dead_code)]

use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use widget_export::Widget;

pub struct Exported {
    pub header: Vec<String>,
    pub rows: Vec<Widget>,
}

pub fn read_back(path: &Path) -> Exported {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap_or_else(|e| panic!("can't open exported file {}: {e}", path.display()));

    let header = rdr
        .headers()
        .expect("exported file has no header")
        .iter()
        .map(str::to_owned)
        .collect();

    let rows = rdr
        .deserialize()
        .enumerate()
        .map(|(i, row)| row.unwrap_or_else(|e| panic!("row {} is not a widget: {e}", i + 1)))
        .collect();

    Exported { header, rows }
}

pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("exported file is readable")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Field-level differences between an exported row and the widget it came
/// from, one message per field.
pub fn row_mismatches(row: usize, actual: &Widget, expected: &Widget) -> Vec<String> {
    let mut mismatches = Vec::new();

    if actual.code != expected.code {
        mismatches.push(format!(
            "row {row}: expected Code {:?}, got {:?}",
            expected.code, actual.code
        ));
    }
    if actual.name != expected.name {
        mismatches.push(format!(
            "row {row}: expected Name {:?}, got {:?}",
            expected.name, actual.name
        ));
    }
    if actual.price != expected.price {
        mismatches.push(format!(
            "row {row}: expected Price {}, got {}",
            expected.price, actual.price
        ));
    }

    mismatches
}

pub fn assert_row_matches(row: usize, actual: &Widget, expected: &Widget) {
    let mismatches = row_mismatches(row, actual, expected);
    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}

pub fn assert_exported(path: &Path, expected: &[Widget]) {
    let exported = read_back(path);

    assert_eq!(exported.header, ["Code", "Name", "Price"]);
    assert_eq!(
        exported.rows.len(),
        expected.len(),
        "expected {} data rows, got {}",
        expected.len(),
        exported.rows.len()
    );

    let mismatches: Vec<String> = exported
        .rows
        .iter()
        .zip(expected)
        .enumerate()
        .flat_map(|(i, (actual, expected))| row_mismatches(i + 1, actual, expected))
        .collect();
    assert!(mismatches.is_empty(), "{}", mismatches.join("\n"));
}
