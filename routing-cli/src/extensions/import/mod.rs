//! Import command helpers

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

mod json;
pub use self::json::*;

use routing_core::prelude::{GenericResult, Point};
use std::io::{BufReader, Read};

/// Imports points from specific format.
pub fn import_points<R: Read>(input_format: &str, reader: BufReader<R>) -> GenericResult<Vec<Point>> {
    match input_format {
        "json" => read_json_points(reader),
        "csv" => read_csv_points(reader),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}
