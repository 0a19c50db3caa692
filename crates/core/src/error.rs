/// Errors raised when assembling a submission from raw form fields.
///
/// Only structural problems are caught here (unparseable dates, an
/// out-of-range rating, a half-filled sick-leave range). Content rules such
/// as blank descriptions are judged by the record service so its rejection
/// messages stay visible to the user.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("select an entry kind before submitting")]
    NoKindSelected,
    #[error("health check rating must be an integer from 0 to 3, got '{0}'")]
    InvalidRating(String),
    #[error("{field} must be a date in YYYY-MM-DD form, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
    #[error("sick leave needs both a start and an end date, or neither")]
    PartialSickLeave,
}

pub type FormResult<T> = std::result::Result<T, FormError>;

/// Errors raised by the page state machine.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("no entry form is open")]
    FormNotOpen,
    #[error("a submission is already in flight")]
    SubmissionInFlight,
    #[error(transparent)]
    Form(#[from] FormError),
}

pub type PageResult<T> = std::result::Result<T, PageError>;
