use super::*;

#[test]
fn test_missing_description_message_names_the_story() {
    let err = VitrineError::MissingDescription {
        story: "Rectangle".to_string(),
    };
    assert_eq!(err.to_string(), "Story 'Rectangle' requires a description");
}

#[test]
fn test_story_not_found_message() {
    let err = VitrineError::StoryNotFound {
        path: "buttons/oops".to_string(),
    };
    assert_eq!(err.to_string(), "No story registered at 'buttons/oops'");
}

#[test]
fn test_io_errors_convert_to_site_export() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: VitrineError = io.into();
    assert!(matches!(err, VitrineError::SiteExport(_)));
}

#[test]
fn test_log_err_keeps_ok_and_drops_err() {
    let ok: std::result::Result<u32, &str> = Ok(7);
    assert_eq!(ok.log_err(), Some(7));

    let failed: std::result::Result<u32, &str> = Err("nope");
    assert_eq!(failed.log_err(), None);
}

#[test]
fn test_warn_on_err_keeps_ok_and_drops_err() {
    let ok: std::result::Result<&str, String> = Ok("fine");
    assert_eq!(ok.warn_on_err(), Some("fine"));

    let failed: std::result::Result<&str, String> = Err("expected".to_string());
    assert_eq!(failed.warn_on_err(), None);
}
