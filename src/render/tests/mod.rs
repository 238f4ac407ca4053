//! Unit tests for the render module.
//!
//! Tests are organised by concept: descriptor projections and copies, the
//! serialised shape of each option set, delivery dispatch, single-response
//! sessions, pagination and selection prompts.

mod option_shape_tests;
mod session_tests;
