use thiserror::Error;

/// Transport-level client failures. Application-level failures (non-2xx
/// responses) are not errors: fetches degrade to an empty snapshot and
/// updates surface the status code to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the connection dropped before a
    /// response arrived.
    #[error("connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// The configured request timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// A 2xx response body could not be decoded as a table snapshot.
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The client could not be constructed from the builder settings.
    #[error("invalid client configuration: {0}")]
    Config(#[source] reqwest::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Connection(err)
        }
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
