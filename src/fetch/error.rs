use thiserror::Error;

/// Every way a joke search can fail.
///
/// Variants carry rendered messages rather than the transport error so the
/// value can travel through channels and be cloned into UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("search term is empty")]
    EmptyQuery,

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Request(_) | FetchError::Status(_))
    }
}
