use std::io;

use gen_mq::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::ValueError("missing project name".to_string());
    assert_eq!(err.to_string(), "Value error: missing project name.");

    let err = Error::TemplateError("undefined placeholder 'USER'".to_string());
    assert_eq!(err.to_string(), "Template error: undefined placeholder 'USER'.");

    let err = Error::ProjectExistsError { pro_name: "latest_pro".to_string() };
    assert_eq!(err.to_string(), "Project directory 'latest_pro' already exists.");
}
