use thiserror::Error;

/// The single failure mode of the admin table: fetching the member list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("member list request failed: {0}")]
    Transport(String),
    #[error("member list request returned status {status}")]
    Status { status: u16 },
    #[error("invalid member list payload: {0}")]
    InvalidPayload(String),
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload(message.into())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidPayload(value.to_string())
    }
}
