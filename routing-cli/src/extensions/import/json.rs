use routing_core::prelude::{GenericResult, Point};
use std::io::{BufReader, Read};

/// Reads points from json array where each entry has `id`, `name`, `lat`, `lng` and, optionally,
/// `passengers` properties.
pub fn read_json_points<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Point>> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize points: '{err}'").into())
}
