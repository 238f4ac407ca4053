//! Single-response render session.

use super::{Deliverable, Runner, SessionError, SessionResult};
use crate::render::{
    domain::{RenderDescriptor, SessionId},
    ports::{Interaction, OutputHandle},
};
use async_trait::async_trait;
use tracing::debug;

/// Owns at most one live output created from a descriptor.
///
/// The live output is set once by [`RenderSession::run`] and cleared by
/// [`RenderSession::destroy`]. A session dispatches at most once, so a
/// destroyed session cannot be run again.
#[derive(Debug)]
pub struct RenderSession {
    id: SessionId,
    descriptor: RenderDescriptor,
    output: Option<OutputHandle>,
    dispatched: bool,
}

impl RenderSession {
    /// Creates an undispatched session.
    #[must_use]
    pub fn new(descriptor: RenderDescriptor) -> Self {
        Self::with_id(SessionId::new(), descriptor)
    }

    /// Creates an undispatched session with a caller-chosen identifier.
    #[must_use]
    pub const fn with_id(id: SessionId, descriptor: RenderDescriptor) -> Self {
        Self {
            id,
            descriptor,
            output: None,
            dispatched: false,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the descriptor used for the first dispatch.
    #[must_use]
    pub const fn descriptor(&self) -> &RenderDescriptor {
        &self.descriptor
    }

    /// Returns the live output, if dispatched and not yet destroyed.
    #[must_use]
    pub const fn output(&self) -> Option<&OutputHandle> {
        self.output.as_ref()
    }

    /// Returns `true` once a dispatch has succeeded, even after destroy.
    #[must_use]
    pub const fn is_dispatched(&self) -> bool {
        self.dispatched
    }

    /// Returns `true` while a live output exists.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.output.is_some()
    }
}

#[async_trait]
impl Runner for RenderSession {
    async fn run(&mut self, interaction: &dyn Interaction) -> SessionResult<OutputHandle> {
        if self.dispatched {
            return Err(SessionError::DuplicateDispatch(self.id));
        }
        let output = self.descriptor.acknowledge_with_new(interaction).await?;
        debug!(session_id = %self.id, output_id = %output.id(), "session dispatched");
        self.dispatched = true;
        self.output = Some(output.clone());
        Ok(output)
    }

    async fn destroy(&mut self) -> SessionResult<()> {
        let Some(output) = self.output.as_ref() else {
            return Ok(());
        };
        output.delete().await?;
        debug!(session_id = %self.id, output_id = %output.id(), "session destroyed");
        self.output = None;
        Ok(())
    }
}
