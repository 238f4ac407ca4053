//! Delivery of render descriptors through the render ports.

use crate::render::{
    domain::{Emoji, RenderDescriptor},
    ports::{DeliveryResult, Interaction, LiveOutput, Messageable, OutputHandle},
};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Something that can be materialised through every delivery mechanism.
///
/// Each operation sends the matching option set and, once the primary
/// delivery succeeds, adds the configured reactions in order. Reactions are
/// best effort: a failed reaction is logged and the rest are still tried.
/// When the primary delivery fails its error is returned and no reactions are
/// attempted.
#[async_trait]
pub trait Deliverable: Send + Sync {
    /// Sends a new message to a channel.
    async fn deliver(&self, channel: &dyn Messageable) -> DeliveryResult<OutputHandle>;

    /// Sends a new message as a threaded reply to `target`.
    async fn deliver_as_reply(&self, target: &dyn LiveOutput) -> DeliveryResult<OutputHandle>;

    /// Acknowledges an interaction with a new response.
    async fn acknowledge_with_new(
        &self,
        interaction: &dyn Interaction,
    ) -> DeliveryResult<OutputHandle>;

    /// Edits an existing output in place.
    async fn edit_existing(&self, output: &dyn LiveOutput) -> DeliveryResult<OutputHandle>;

    /// Acknowledges an interaction by editing the output it came from.
    async fn acknowledge_with_edit(
        &self,
        interaction: &dyn Interaction,
    ) -> DeliveryResult<OutputHandle>;
}

#[async_trait]
impl Deliverable for RenderDescriptor {
    async fn deliver(&self, channel: &dyn Messageable) -> DeliveryResult<OutputHandle> {
        let output = channel.send(&self.for_send()).await?;
        apply_reactions(self.emojis(), output.as_ref()).await;
        Ok(output)
    }

    async fn deliver_as_reply(&self, target: &dyn LiveOutput) -> DeliveryResult<OutputHandle> {
        let output = target.reply(&self.for_send()).await?;
        apply_reactions(self.emojis(), output.as_ref()).await;
        Ok(output)
    }

    async fn acknowledge_with_new(
        &self,
        interaction: &dyn Interaction,
    ) -> DeliveryResult<OutputHandle> {
        let output = interaction
            .send_response(&self.for_interaction_send())
            .await?;
        apply_reactions(self.emojis(), output.as_ref()).await;
        Ok(output)
    }

    async fn edit_existing(&self, output: &dyn LiveOutput) -> DeliveryResult<OutputHandle> {
        let edited = output.edit(&self.for_edit()).await?;
        apply_reactions(self.emojis(), edited.as_ref()).await;
        Ok(edited)
    }

    async fn acknowledge_with_edit(
        &self,
        interaction: &dyn Interaction,
    ) -> DeliveryResult<OutputHandle> {
        let output = interaction
            .edit_response(&self.for_interaction_edit())
            .await?;
        apply_reactions(self.emojis(), output.as_ref()).await;
        Ok(output)
    }
}

/// Adds each emoji in order and returns how many were applied.
async fn apply_reactions(emojis: &[Emoji], output: &dyn LiveOutput) -> usize {
    let mut applied = 0_usize;
    for emoji in emojis {
        match output.add_reaction(emoji).await {
            Ok(()) => applied = applied.saturating_add(1),
            Err(err) => warn!(
                output_id = %output.id(),
                ?emoji,
                error = %err,
                "failed to add reaction; continuing with remaining reactions"
            ),
        }
    }
    if !emojis.is_empty() {
        debug!(output_id = %output.id(), applied, total = emojis.len(), "reactions applied");
    }
    applied
}
