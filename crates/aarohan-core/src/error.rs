use thiserror::Error;

use crate::reservation::Field;

/// Why a reservation draft was rejected before submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(Field),

    #[error("email address is malformed")]
    MalformedEmail,

    #[error("phone number must contain 7 to 15 digits")]
    MalformedPhone,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Reserved for a real booking backend; nothing produces it yet.
    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("no {section} item at index {index}")]
    UnknownItem { section: &'static str, index: usize },

    #[error("a submission is already in progress")]
    SubmissionInProgress,

    #[error("the booking window is closed")]
    BookingClosed,
}

pub type Result<T> = std::result::Result<T, SiteError>;
