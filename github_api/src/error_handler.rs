//! Translation of HTTP error responses into [`Error`] values.
//!
//! [`GitHubErrorHandler`] recognizes the status codes GitHub documents and
//! defers everything else to a [`ResponseErrorHandler`] supplied by the
//! transport, wrapping whatever that handler fails with.

use std::convert::Infallible;

use reqwest::Method;
use url::Url;

use crate::errors::{BoxError, Error, GitHubApiError};

const FALLBACK_MESSAGE: &str = "Error consuming GitHub REST API.";

/// An HTTP response that the transport has already read into memory.
#[derive(Debug, Clone, Default)]
pub struct ErrorResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl ErrorResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Lossy UTF-8 view of the body, truncated for logs and error text.
    pub fn body_snippet(&self) -> String {
        truncate_body(&String::from_utf8_lossy(&self.body))
    }
}

/// Generic error handling provided by the transport layer.
pub trait ResponseErrorHandler {
    /// Whether `response` signals an error at all.
    fn has_error(&self, response: &ErrorResponse) -> bool {
        is_error_status(response.status)
    }

    /// Handles an error response. `Err` is the failure to report.
    fn handle_error(
        &self,
        url: &Url,
        method: &Method,
        response: &ErrorResponse,
    ) -> Result<(), BoxError>;
}

/// Status errors produced by [`DefaultResponseErrorHandler`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpStatusError {
    #[error("Client error {status}: {body}")]
    Client { status: u16, body: String },
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },
    #[error("Unknown status code {status}")]
    Unknown { status: u16 },
}

impl HttpStatusError {
    pub fn status(&self) -> u16 {
        match self {
            Self::Client { status, .. } | Self::Server { status, .. } | Self::Unknown { status } => {
                *status
            }
        }
    }
}

/// Fails every response with an [`HttpStatusError`] carrying its status and body.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultResponseErrorHandler;

impl ResponseErrorHandler for DefaultResponseErrorHandler {
    fn handle_error(
        &self,
        _url: &Url,
        _method: &Method,
        response: &ErrorResponse,
    ) -> Result<(), BoxError> {
        let status = response.status;
        let err = match status / 100 {
            4 => HttpStatusError::Client {
                status,
                body: response.body_snippet(),
            },
            5 => HttpStatusError::Server {
                status,
                body: response.body_snippet(),
            },
            _ => HttpStatusError::Unknown { status },
        };
        Err(Box::new(err))
    }
}

/// Maps GitHub error responses onto [`GitHubApiError`] kinds.
///
/// Only 400, 401, 403, 404, 409 and 500 are classified directly. Every other
/// status goes to the fallback handler, and its failure is reported as
/// `ServerError` with the original failure as cause.
#[derive(Debug, Clone, Default)]
pub struct GitHubErrorHandler<D = DefaultResponseErrorHandler> {
    fallback: D,
}

impl<D: ResponseErrorHandler> GitHubErrorHandler<D> {
    pub fn new(fallback: D) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &D {
        &self.fallback
    }

    /// Produces the error for `response`. Never fails to produce one.
    pub fn classify(&self, url: &Url, method: &Method, response: &ErrorResponse) -> Error {
        let classified = match response.status / 100 {
            4 => client_error(response.status),
            5 => server_error(response.status),
            _ => None,
        };
        if let Some(err) = classified {
            return err;
        }

        match self.fallback.handle_error(url, method, response) {
            Err(cause) => Error::with_cause(FALLBACK_MESSAGE, cause),
            // The fallback accepted the response; still report a failure.
            Ok(()) => Error::new(FALLBACK_MESSAGE, GitHubApiError::ServerError),
        }
    }

    /// Handles an error response. Only ever returns `Err`.
    pub fn handle_error(
        &self,
        url: &Url,
        method: &Method,
        response: &ErrorResponse,
    ) -> Result<Infallible, Error> {
        Err(self.classify(url, method, response))
    }

    pub fn has_error(&self, response: &ErrorResponse) -> bool {
        self.fallback.has_error(response)
    }
}

fn client_error(status: u16) -> Option<Error> {
    let (message, kind) = match status {
        400 => (
            "The server could not understand your request. Verify that request parameters (and content, if any) are valid.",
            GitHubApiError::BadRequest,
        ),
        401 => (
            "Authentication failed or was not provided. Verify that you have sent valid credentials.",
            GitHubApiError::AuthorizationRequired,
        ),
        403 => (
            "The server understood your request and verified your credentials, but you are not allowed to perform the requested action.",
            GitHubApiError::Forbidden,
        ),
        404 => (
            "The resource that you requested does not exist.",
            GitHubApiError::NotFound,
        ),
        409 => (
            "The resource that you are trying to create already exists. This should also provide a Location header to the resource in question.",
            GitHubApiError::Conflict,
        ),
        _ => return None,
    };
    Some(Error::new(message, kind))
}

fn server_error(status: u16) -> Option<Error> {
    match status {
        500 => Some(Error::new(
            "An unknown error has occurred.",
            GitHubApiError::InternalServerError,
        )),
        _ => None,
    }
}

fn is_error_status(status: u16) -> bool {
    matches!(status / 100, 4 | 5)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
