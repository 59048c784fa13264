//! Error types for the API client.
//!
//! Every failure surfaced by this crate is an [`Error`]: a message plus a
//! [`GitHubApiError`] kind that callers branch on. Transport and fallback
//! failures are kept as the error's cause.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Boxed error produced by transport-level handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The kind of failure reported by the GitHub REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GitHubApiError {
    /// HTTP 400.
    BadRequest,
    /// HTTP 401.
    AuthorizationRequired,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 409.
    Conflict,
    /// HTTP 500.
    InternalServerError,
    /// Anything else: unmapped statuses, network and parse failures.
    ServerError,
}

impl GitHubApiError {
    /// The status code this kind is classified from, if it has exactly one.
    pub fn status_code(self) -> Option<u16> {
        match self {
            Self::BadRequest => Some(400),
            Self::AuthorizationRequired => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Conflict => Some(409),
            Self::InternalServerError => Some(500),
            Self::ServerError => None,
        }
    }
}

impl fmt::Display for GitHubApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BadRequest => "BadRequest",
            Self::AuthorizationRequired => "AuthorizationRequired",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::InternalServerError => "InternalServerError",
            Self::ServerError => "ServerError",
        };
        f.write_str(name)
    }
}

/// An error that occurred while consuming the GitHub REST API.
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: GitHubApiError,
    cause: Option<BoxError>,
}

impl Error {
    /// Creates an error with an explicit classification.
    pub fn new(message: impl Into<String>, kind: GitHubApiError) -> Self {
        Self {
            message: message.into(),
            kind,
            cause: None,
        }
    }

    /// Wraps an underlying failure. The kind is always `ServerError`.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            kind: GitHubApiError::ServerError,
            cause: Some(cause.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> GitHubApiError {
        self.kind
    }

    /// The wrapped failure, if this error was built from one.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Encodes the error as JSON. The cause, if any, is kept as its display text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Payload {
            message: self.message.clone(),
            error: self.kind,
            cause: self.cause.as_ref().map(|c| c.to_string()),
        })
    }

    /// Decodes an error written by [`Error::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let payload: Payload = serde_json::from_str(json)?;
        Ok(Self {
            message: payload.message,
            kind: payload.error,
            cause: payload
                .cause
                .map(|text| Box::new(RemoteCause(text)) as BoxError),
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// A cause restored from a serialized error. Only its text survives.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RemoteCause(pub String);

#[derive(Serialize, Deserialize)]
struct Payload {
    message: String,
    error: GitHubApiError,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause: Option<String>,
}
