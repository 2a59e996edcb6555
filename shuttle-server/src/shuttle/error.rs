//! Shuttle client error types.

/// Errors that can occur while fetching bus locations from the shuttle site.
#[derive(Debug, thiserror::Error)]
pub enum ShuttleError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The map page did not answer 200
    #[error("failed to fetch session cookies (status {status})")]
    SessionFetch { status: u16 },

    /// The map page answered without a usable `Set-Cookie` header
    #[error("no session cookies found")]
    MissingCookie,

    /// The bus data service did not answer 200
    #[error("failed to fetch bus data (status {status})")]
    DataFetch { status: u16 },

    /// Bus data body was not valid JSON
    #[error("JSON parse error: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },

    /// Client could not be built from the given configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
