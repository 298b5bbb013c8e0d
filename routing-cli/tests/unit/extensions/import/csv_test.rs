use super::*;
use std::io::BufReader;

#[test]
fn can_read_points() {
    let points_csv = r"
id,name,lat,lng,passengers
p1,Hotel,-23.5505,-46.6333,2
p2,Airport,-23.4356,-46.4731,
p3, Museum ,-23.5874,-46.6576,1
";

    let points = read_csv_points(BufReader::new(points_csv.trim_start().as_bytes())).unwrap();

    assert_eq!(points.len(), 3);
    assert_eq!(points[0].passengers, Some(2));
    assert_eq!(points[1].passengers, None);
    assert_eq!(points[2].name, "Museum");
    assert_eq!((points[1].lat, points[1].lng), (-23.4356, -46.4731));
}

#[test]
fn can_read_points_without_optional_columns() {
    let points_csv = "id,lat,lng\np1,1.5,2.5\np2,-1,0\n";

    let points = read_csv_points(BufReader::new(points_csv.as_bytes())).unwrap();

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].name, "");
    assert_eq!(points[1].passengers, None);
}

#[test]
fn can_propagate_format_error() {
    let points_csv = "id,name,lat,lng\np1,Hotel,-23.5,-46.6\np2,Airport,north,-46.4\n";

    let err = read_csv_points(BufReader::new(points_csv.as_bytes())).expect_err("should return error");

    assert!(err.to_string().starts_with("cannot read csv point at record 2"));
}
