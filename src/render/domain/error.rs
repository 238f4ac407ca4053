//! Error types for render domain construction.

use thiserror::Error;

/// Errors returned while constructing render domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderDomainError {
    /// A paginated session needs at least one page.
    #[error("a paginated session requires at least one page")]
    EmptyPages,

    /// The requested default page does not exist.
    #[error("default page index {index} is out of range for {page_count} pages")]
    DefaultPageOutOfRange {
        /// Requested 0-based page index.
        index: usize,
        /// Number of pages available.
        page_count: usize,
    },

    /// A page's control surface has no room left for navigation controls.
    #[error("page {page} already holds {existing} controls; navigation requires fewer than {limit}")]
    ControlLimitExceeded {
        /// 0-based page index.
        page: usize,
        /// Controls already on the page's surface.
        existing: usize,
        /// Maximum number of pre-existing controls plus one.
        limit: usize,
    },

    /// A control surface is already at platform capacity.
    #[error("control surface is full ({max} controls)")]
    ControlSurfaceFull {
        /// Platform limit on controls per surface.
        max: usize,
    },

    /// A selection prompt needs at least one variant.
    #[error("a selection prompt requires at least one variant")]
    EmptyPromptPatterns,

    /// The requested prompt variant does not exist.
    #[error("prompt variant {index} is out of range for {count} variants")]
    PatternOutOfRange {
        /// Requested 0-based variant index.
        index: usize,
        /// Number of variants available.
        count: usize,
    },
}
