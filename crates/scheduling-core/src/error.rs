//! Error types for availability requests and the user store.
//!
//! The interval algorithms themselves are total and never fail; every variant
//! here originates from request validation or from loading/looking up users.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("At least one user_id is required")]
    MissingUserIds,

    #[error("Invalid user_id: {0}")]
    InvalidUserId(String),

    #[error("Invalid {field}: ISO 8601 format required")]
    InvalidDate { field: &'static str, value: String },

    #[error("Start date must be less than end date")]
    InvalidRange,

    #[error("User id {0} does not exist")]
    UserNotFound(u64),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid working hours: {0}")]
    InvalidWorkingHours(String),

    #[error("Invalid user store: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedulingError {
    /// HTTP-style status class for this error.
    ///
    /// Bad request parameters map to 400, an unknown user to 404, and
    /// store/IO faults to 500.
    pub fn status(&self) -> u16 {
        match self {
            SchedulingError::MissingUserIds
            | SchedulingError::InvalidUserId(_)
            | SchedulingError::InvalidDate { .. }
            | SchedulingError::InvalidRange => 400,
            SchedulingError::UserNotFound(_) => 404,
            SchedulingError::InvalidTimezone(_)
            | SchedulingError::InvalidWorkingHours(_)
            | SchedulingError::Store(_)
            | SchedulingError::Json(_)
            | SchedulingError::Io(_) => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
