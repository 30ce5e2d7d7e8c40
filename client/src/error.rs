use thiserror::Error;

#[derive(Debug, Error)]
pub enum GroupaldError {
    #[error("groupald returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("groupald endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP request to groupald failed: {0}")]
    RequestFailed(String),

    #[error("invalid response payload: {0}")]
    InvalidPayload(String),

    #[error("unexpected response shape: {0}")]
    UnexpectedPayload(String),
}

impl GroupaldError {
    /// The HTTP status code, when the service answered with a non-success
    /// status. `None` for every other failure kind.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GroupaldError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
