//! Vitrine: render descriptors and live sessions for chat responses.
//!
//! A bot command describes its response once as a [`render::domain::RenderDescriptor`]
//! and lets the crate deliver it through whichever mechanism applies: a new
//! channel message, a reply, an in-place edit, or an interaction
//! acknowledgement. Sessions own the live output a descriptor produced and
//! drive multi-page navigation; background handles tear sessions down once
//! their time-to-live lapses.
//!
//! # Architecture
//!
//! Vitrine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure values with no transport dependencies
//! - **Ports**: Abstract trait interfaces for channels, outputs and interactions
//! - **Adapters**: Concrete implementations of ports (in-memory transport)
//! - **Services**: Delivery, sessions, pagination and expiry orchestration
//!
//! # Modules
//!
//! - [`render`]: Descriptors, delivery dispatch and render sessions
//! - [`background`]: Time-bounded handles and their registry

pub mod background;
pub mod render;
