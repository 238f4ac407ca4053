//! Time-bounded background handles for vitrine.
//!
//! A [`services::BackgroundHandle`] binds a long-lived runner (typically a
//! paginated session) to a channel and a countdown. The
//! [`services::HandleRegistry`] owns live handles; each sweep decrements
//! every countdown by a fixed interval and destroys and removes the handles
//! whose countdown lapsed. Elapsed time is a parameter of the sweep, so
//! expiry is deterministic under test.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
