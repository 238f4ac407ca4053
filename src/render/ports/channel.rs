//! Channel and delivered-output ports.

use crate::render::domain::{ChannelId, Emoji, MessageEditOptions, MessageSendOptions, OutputId};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Shared handle to an already-delivered output.
pub type OutputHandle = Arc<dyn LiveOutput>;

/// A destination that accepts new messages.
#[async_trait]
pub trait Messageable: fmt::Debug + Send + Sync {
    /// Returns the channel identifier.
    fn channel_id(&self) -> ChannelId;

    /// Sends a new message.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] when the platform rejects the message or the
    /// transport fails.
    async fn send(&self, options: &MessageSendOptions) -> DeliveryResult<OutputHandle>;
}

/// A delivered output that can be replied to, edited, deleted and reacted to.
#[async_trait]
pub trait LiveOutput: fmt::Debug + Send + Sync {
    /// Returns the output identifier.
    fn id(&self) -> OutputId;

    /// Sends a new message threaded as a reply to this output.
    async fn reply(&self, options: &MessageSendOptions) -> DeliveryResult<OutputHandle>;

    /// Edits this output in place and returns the updated handle.
    async fn edit(&self, options: &MessageEditOptions) -> DeliveryResult<OutputHandle>;

    /// Deletes this output.
    async fn delete(&self) -> DeliveryResult<()>;

    /// Adds a reaction to this output.
    async fn add_reaction(&self, emoji: &Emoji) -> DeliveryResult<()>;
}

/// Errors returned by channel, output and interaction adapters.
#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    /// The platform refused the request.
    #[error("delivery rejected: {0}")]
    Rejected(String),

    /// The target output does not exist.
    #[error("output not found: {0}")]
    NotFound(OutputId),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeliveryError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
