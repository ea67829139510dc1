use thiserror::Error;

/// Maximum accepted registration photo size (20 KiB).
pub const MAX_PHOTO_BYTES: usize = 20 * 1024;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("no player selected")]
    NoPlayerSelected,

    #[error("missing required match setup fields: {}", .missing.join(", "))]
    IncompleteMatchSetup { missing: Vec<&'static str> },

    #[error("match clock has not started")]
    ClockNotStarted,

    #[error("submission failed: {0}")]
    SubmissionRejected(String),

    #[error("update failed: {0}")]
    UpdateRejected(String),

    #[error("registration for this user type is coming soon")]
    RegistrationUnavailable,

    #[error("missing required fields: {}", .missing.join(", "))]
    IncompleteRegistration { missing: Vec<&'static str> },

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password must be at least {min} characters long", min = MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error("photo size must be {max} bytes or less, got {size}", max = MAX_PHOTO_BYTES)]
    PhotoTooLarge { size: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
