mod client;
pub mod error_handler;
mod errors;
pub use self::client::Client;
pub use self::error_handler::{
    DefaultResponseErrorHandler, ErrorResponse, GitHubErrorHandler, HttpStatusError,
    ResponseErrorHandler,
};
pub use self::errors::{BoxError, Error, GitHubApiError, RemoteCause};
pub use reqwest::Method;
pub use url::Url;
