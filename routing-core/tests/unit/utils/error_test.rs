use super::*;

#[test]
fn can_join_many_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errors.as_slice(), ", "), "first, second");
    assert_eq!(GenericError::join_many(&[], ", "), "");
}

#[test]
fn can_compare_errors_by_message() {
    assert_eq!(GenericError::from("invalid point"), GenericError::from("invalid point".to_string()));
    assert_ne!(GenericError::from("invalid point"), GenericError::from("duplicate id"));
}

#[test]
fn can_convert_io_error() {
    let err = GenericError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"));

    assert_eq!(err.to_string(), "no such file");
}
