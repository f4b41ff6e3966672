use thiserror::Error;

/// Error type for raw field values arriving from the UI layer.
///
/// Never surfaced to callers: the tracker logs these and leaves the current
/// snapshot unchanged.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
