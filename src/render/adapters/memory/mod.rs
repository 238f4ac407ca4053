//! In-memory adapters for render ports.

mod channel;
mod interaction;
mod transport;

pub use channel::{InMemoryChannel, InMemoryOutput};
pub use interaction::InMemoryInteraction;
pub use transport::{DeliveryEvent, InMemoryTransport, Operation, StoredOutput};
