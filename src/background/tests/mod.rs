//! Unit tests for the background module.

mod fixtures;
