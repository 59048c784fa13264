use super::*;
use github_api::{GitHubApiError, HttpStatusError};

#[test]
fn test_format_error_text_classified() {
    let err = Error::new(
        "The resource that you requested does not exist.",
        GitHubApiError::NotFound,
    );
    assert_eq!(
        format_error_text(&err),
        "NotFound: The resource that you requested does not exist."
    );
}

#[test]
fn test_format_error_text_with_cause() {
    let err = Error::with_cause(
        "Error consuming GitHub REST API.",
        HttpStatusError::Server {
            status: 502,
            body: "Bad Gateway".to_string(),
        },
    );
    assert_eq!(
        format_error_text(&err),
        "ServerError: Error consuming GitHub REST API.\n  caused by: Server error 502: Bad Gateway"
    );
}

#[test]
fn test_format_error_text_after_json_round_trip() {
    let err = Error::with_cause("Error consuming GitHub REST API.", "timeout");
    let decoded = Error::from_json(&err.to_json().unwrap()).unwrap();
    assert_eq!(format_error_text(&decoded), format_error_text(&err));
}
