use thiserror::Error;

/// Failure talking to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// True when the request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Parse(_))
    }
}
