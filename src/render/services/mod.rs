//! Application services for delivering and navigating responses.

mod dispatch;
mod error;
mod pagination;
mod prompt;
mod runner;
mod session;

pub use dispatch::Deliverable;
pub use error::{SessionError, SessionResult};
pub use pagination::{Direction, NavigationControl, PAGE_CONTROL_LIMIT, PaginatedSession};
pub use prompt::SelectionPrompt;
pub use runner::Runner;
pub use session::RenderSession;
