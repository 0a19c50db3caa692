#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("no patient with that id")]
    NotFound,
    #[error("submission rejected: {0}")]
    Validation(String),
    #[error("transport failure talking to the record service: {0}")]
    Transport(reqwest::Error),
    #[error("unexpected status {status} from the record service")]
    UnexpectedStatus { status: reqwest::StatusCode },
    #[error("failed to decode record service response: {0}")]
    Decode(reqwest::Error),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// The line shown to the user for this failure.
    ///
    /// Rejection messages from the record service and missing-patient
    /// lookups are meaningful to the user and pass through; everything
    /// else collapses to a generic fallback, with the detail left to the
    /// logs.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound => "no patient with that id".into(),
            ApiError::Validation(message) => message.clone(),
            ApiError::Config(_)
            | ApiError::Transport(_)
            | ApiError::UnexpectedStatus { .. }
            | ApiError::Decode(_) => "something went wrong talking to the record service".into(),
        }
    }
}
