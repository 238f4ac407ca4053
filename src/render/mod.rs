//! Response rendering for vitrine.
//!
//! A [`domain::RenderDescriptor`] describes a response once and projects
//! itself onto four delivery mechanisms: new message (or threaded reply),
//! in-place edit, interaction acknowledgement and interaction edit. Sessions
//! in [`services`] own the resulting live output; a
//! [`services::PaginatedSession`] adds bounds-checked page navigation on top.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
