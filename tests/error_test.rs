use std::io;

use go_app_gen::error::Error;

#[test]
fn test_io_error_keeps_path() {
    let err = Error::io("/tmp/shop/main.go", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

    match &err {
        Error::IoError { path, source } => {
            assert_eq!(path, "/tmp/shop/main.go");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        _ => panic!("Expected IoError variant"),
    }
    assert_eq!(err.to_string(), "IO error at '/tmp/shop/main.go': denied.");
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("app name is required".to_string());
    assert_eq!(err.to_string(), "Configuration error: app name is required.");

    let err = Error::ResourceNotFound { path: "templates/x.tmpl".to_string() };
    assert_eq!(err.to_string(), "Template 'templates/x.tmpl' not found in the template store.");

    let err = Error::PostProcessStepError {
        step: "mod-tidy".to_string(),
        source: Box::new(Error::CommandFailed {
            command: "go mod tidy".to_string(),
            status: "exit status: 1".to_string(),
        }),
    };
    assert_eq!(
        err.to_string(),
        "Post-processing step 'mod-tidy' failed: 'go mod tidy' exited with exit status: 1."
    );
    let source = std::error::Error::source(&err).unwrap();
    assert_eq!(source.to_string(), "'go mod tidy' exited with exit status: 1");

    let err = Error::CommandFailed {
        command: "go mod tidy".to_string(),
        status: "exit status: 1".to_string(),
    };
    assert_eq!(err.to_string(), "'go mod tidy' exited with exit status: 1");
}
