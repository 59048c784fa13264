//! HTTP client for the GitHub REST API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error_handler::{
        DefaultResponseErrorHandler, ErrorResponse, GitHubErrorHandler, ResponseErrorHandler,
    },
    Error,
};

const USER_AGENT: &str = concat!("github_api/", env!("CARGO_PKG_VERSION"));
const FAILURE_MESSAGE: &str = "Error consuming GitHub REST API.";

/// HTTP client for the GitHub REST API.
///
/// Every failure, whether an error status, a network problem or an
/// unparseable body, comes back as an [`Error`]. Error statuses are
/// classified by a [`GitHubErrorHandler`].
pub struct Client<D = DefaultResponseErrorHandler> {
    /// Base URL for the API. Defaults to `https://api.github.com`.
    base_api_url: String,
    http: reqwest::Client,
    handler: GitHubErrorHandler<D>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the public GitHub API.
    pub fn new() -> Self {
        Self::with_base_url("https://api.github.com")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_handler(base_url, DefaultResponseErrorHandler)
    }
}

impl<D: ResponseErrorHandler> Client<D> {
    /// Creates a client whose unclassified error responses go to `fallback`.
    pub fn with_handler(base_url: &str, fallback: D) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            handler: GitHubErrorHandler::new(fallback),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn handler(&self) -> &GitHubErrorHandler<D> {
        &self.handler
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::with_cause(FAILURE_MESSAGE, e)
        })
    }

    /// Fetches `path` and deserializes the JSON body.
    pub async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        tracing::debug!("GET {}", url);
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/vnd.github+json")
            .header("user-agent", USER_AGENT)
            .timeout(Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::with_cause(FAILURE_MESSAGE, e)
            })?;

        let status = resp.status();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::with_cause(FAILURE_MESSAGE, e)
        })?;

        let response = ErrorResponse {
            status: status.as_u16(),
            headers,
            body: body.to_vec(),
        };
        if self.handler.has_error(&response) {
            let err = self.handler.classify(&url, &Method::GET, &response);
            tracing::error!(
                "Request failed with status {} ({}): {}",
                status,
                err.kind(),
                response.body_snippet()
            );
            return Err(err);
        }

        serde_json::from_slice::<T>(&response.body).map_err(|e| {
            tracing::error!(
                "Failed to parse resource: {} | body: {}",
                e,
                response.body_snippet()
            );
            Error::with_cause(FAILURE_MESSAGE, e)
        })
    }

    /// Fetches `path` as untyped JSON.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, Error> {
        self.get::<serde_json::Value>(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_url_joins_paths() {
        let client = Client::with_base_url("https://example.com/api/");
        assert_eq!(
            client.get_url("/repos/octo/hello").unwrap().as_str(),
            "https://example.com/api/repos/octo/hello"
        );
        assert_eq!(
            client.get_url("users/octo").unwrap().as_str(),
            "https://example.com/api/users/octo"
        );
    }

    #[test]
    fn invalid_base_url_is_a_server_error() {
        let client = Client::with_base_url("not a url");
        let err = client.get_url("/users").unwrap_err();
        assert_eq!(err.kind(), crate::GitHubApiError::ServerError);
        assert!(err.cause().unwrap().downcast_ref::<url::ParseError>().is_some());
    }
}
