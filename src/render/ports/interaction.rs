//! Inbound interaction port.

use super::{DeliveryResult, OutputHandle};
use crate::render::domain::{
    InteractionEditOptions, InteractionId, InteractionSendOptions, TextInputPrompt,
};
use async_trait::async_trait;
use std::fmt;

/// An inbound request that must be acknowledged exactly once.
///
/// Commands, control activations and prompt submissions all arrive as
/// interactions. The acknowledgement is either a new response, an edit of the
/// output the interaction originated from, or a text-input prompt.
#[async_trait]
pub trait Interaction: fmt::Debug + Send + Sync {
    /// Returns the interaction identifier.
    fn id(&self) -> InteractionId;

    /// Acknowledges with a new response.
    async fn send_response(&self, options: &InteractionSendOptions)
    -> DeliveryResult<OutputHandle>;

    /// Acknowledges by editing the originating output.
    async fn edit_response(&self, options: &InteractionEditOptions)
    -> DeliveryResult<OutputHandle>;

    /// Acknowledges with a text-input prompt.
    async fn send_prompt(&self, prompt: &TextInputPrompt) -> DeliveryResult<()>;
}
