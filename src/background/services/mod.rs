//! Application services for background handle expiry.

mod handle;
mod registry;
mod sweeper;

pub use handle::{BackgroundHandle, TickOutcome};
pub use registry::{HandleRegistry, HandleSummary, RegistryConfig, RegistryError, SweepReport};
pub use sweeper::spawn_sweeper;
