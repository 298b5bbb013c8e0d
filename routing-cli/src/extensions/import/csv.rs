//! Import from a simple csv format logic.
#[cfg(all(test, feature = "csv-format"))]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_points;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use routing_core::prelude::{GenericError, GenericResult, Point};
    use serde::Deserialize;
    use std::io::{BufReader, Read};

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "lowercase")]
    struct CsvPoint {
        id: String,
        #[serde(default)]
        name: String,
        lat: f64,
        lng: f64,
        #[serde(default)]
        passengers: Option<u32>,
    }

    impl From<CsvPoint> for Point {
        fn from(point: CsvPoint) -> Self {
            Point { id: point.id, name: point.name, lat: point.lat, lng: point.lng, passengers: point.passengers }
        }
    }

    /// Reads points from csv with `id,name,lat,lng[,passengers]` header.
    pub fn read_csv_points<R: Read>(reader: BufReader<R>) -> GenericResult<Vec<Point>> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        reader
            .deserialize::<CsvPoint>()
            .enumerate()
            .map(|(idx, entry)| {
                entry
                    .map(Point::from)
                    .map_err(|err| GenericError::from(format!("cannot read csv point at record {}: '{err}'", idx + 1)))
            })
            .collect()
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use routing_core::prelude::{GenericResult, Point};
    use std::io::{BufReader, Read};

    /// A stub method for reading points from csv format.
    pub fn read_csv_points<R: Read>(_reader: BufReader<R>) -> GenericResult<Vec<Point>> {
        Err("csv-format feature is not included".into())
    }
}
