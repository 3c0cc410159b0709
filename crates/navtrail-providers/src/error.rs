use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{service} request failed: {message}")]
    Request {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned HTTP {status}: {message}")]
    Status {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} response could not be decoded: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    /// The service answered 200 but reported a failure in the body.
    #[error("{service} rejected the request: {message}")]
    Upstream {
        service: &'static str,
        message: String,
    },

    #[error("no results for {0}")]
    NotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
