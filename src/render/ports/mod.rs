//! Port contracts for response delivery.
//!
//! Ports define the transport-agnostic surface the render services need from
//! a chat platform client.

mod channel;
mod interaction;

pub use channel::{DeliveryError, DeliveryResult, LiveOutput, Messageable, OutputHandle};
pub use interaction::Interaction;
