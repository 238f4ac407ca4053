//! Service-level errors for render sessions.

use crate::render::{
    domain::{ControlId, RenderDomainError, SessionId},
    ports::DeliveryError,
};
use std::num::ParseIntError;
use thiserror::Error;

/// Errors returned by render session operations.
///
/// No variant leaves a session changed: the page index and live output
/// reference are exactly as they were before the failed call.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RenderDomainError),

    /// The session was already dispatched.
    #[error("session {0} has already been dispatched")]
    DuplicateDispatch(SessionId),

    /// Navigation targeted a page that does not exist.
    #[error("page {requested} is out of range for {page_count} pages")]
    PageOutOfRange {
        /// Requested page, 1-based as entered by the caller.
        requested: i64,
        /// Number of pages available.
        page_count: usize,
    },

    /// Page-number input was not an integer.
    #[error("page number '{input}' is not an integer")]
    InvalidPageNumber {
        /// The raw submitted text.
        input: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// A prompt submission did not carry the page-number field.
    #[error("prompt submission is missing the page number field")]
    MissingPageInput,

    /// The activated control does not belong to this session.
    #[error("control {0} is not handled by this session")]
    UnknownControl(ControlId),

    /// The underlying delivery failed.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Result type for render session operations.
pub type SessionResult<T> = Result<T, SessionError>;
