//! The run/destroy capability shared by render sessions.

use super::SessionResult;
use crate::render::ports::{Interaction, OutputHandle};
use async_trait::async_trait;
use std::fmt;

/// A response that is dispatched once and can later be torn down.
///
/// Event layers and the background registry hold `Box<dyn Runner>` and never
/// need to know which kind of session they drive.
#[async_trait]
pub trait Runner: fmt::Debug + Send + Sync {
    /// Dispatches the response as the acknowledgement of `interaction`.
    ///
    /// # Errors
    ///
    /// Returns [`super::SessionError::DuplicateDispatch`] when already run,
    /// or a delivery error when the acknowledgement fails.
    async fn run(&mut self, interaction: &dyn Interaction) -> SessionResult<OutputHandle>;

    /// Deletes the live output, if any.
    ///
    /// # Errors
    ///
    /// Returns a delivery error when deletion fails; the output is then kept.
    async fn destroy(&mut self) -> SessionResult<()>;
}
