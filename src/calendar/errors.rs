//! Error types for calendar content selection

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Argument cannot be selected from (e.g., an empty content list)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Curated content list could not be decoded
    #[error("Invalid content list: {0}")]
    InvalidContent(String),

    /// Date string is not an ISO calendar date (YYYY-MM-DD)
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
