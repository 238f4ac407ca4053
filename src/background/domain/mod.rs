//! Domain model for time-bounded background handles.

mod countdown;
mod ids;

pub use countdown::{Countdown, CountdownState};
pub use ids::HandleId;
