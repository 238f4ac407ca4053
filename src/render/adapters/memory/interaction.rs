//! In-memory interaction adapter.

use super::{DeliveryEvent, InMemoryOutput, InMemoryTransport, Operation};
use crate::render::{
    domain::{
        ChannelId, InteractionEditOptions, InteractionId, InteractionSendOptions, OutputId,
        TextInputPrompt,
    },
    ports::{DeliveryError, DeliveryResult, Interaction, OutputHandle},
};
use async_trait::async_trait;

/// In-memory interaction adapter.
///
/// Like a real platform interaction, it accepts exactly one acknowledgement;
/// later attempts fail with [`DeliveryError::Rejected`].
#[derive(Debug, Clone)]
pub struct InMemoryInteraction {
    transport: InMemoryTransport,
    id: InteractionId,
    channel_id: ChannelId,
    origin: Option<OutputId>,
}

impl InMemoryInteraction {
    pub(super) const fn new(
        transport: InMemoryTransport,
        id: InteractionId,
        channel_id: ChannelId,
        origin: Option<OutputId>,
    ) -> Self {
        Self {
            transport,
            id,
            channel_id,
            origin,
        }
    }

    /// Returns the output this interaction originated from, if any.
    #[must_use]
    pub const fn origin(&self) -> Option<OutputId> {
        self.origin
    }
}

#[async_trait]
impl Interaction for InMemoryInteraction {
    fn id(&self) -> InteractionId {
        self.id
    }

    async fn send_response(
        &self,
        options: &InteractionSendOptions,
    ) -> DeliveryResult<OutputHandle> {
        let output_id = self.transport.with_state(|state| {
            state.check(Operation::InteractionSend)?;
            state.acknowledge(self.id)?;
            let output_id = state.create_output(
                self.channel_id,
                options.content.clone(),
                options.controls.clone(),
            );
            state.events.push(DeliveryEvent::InteractionResponded {
                interaction_id: self.id,
                output_id,
                options: options.clone(),
            });
            Ok(output_id)
        })?;
        Ok(InMemoryOutput::handle(self.transport.clone(), output_id))
    }

    async fn edit_response(
        &self,
        options: &InteractionEditOptions,
    ) -> DeliveryResult<OutputHandle> {
        let origin = self.origin.ok_or_else(|| {
            DeliveryError::Rejected(format!("interaction {} has no originating output", self.id))
        })?;
        self.transport.with_state(|state| {
            state.check(Operation::InteractionEdit)?;
            state.output_mut(origin)?;
            state.acknowledge(self.id)?;
            let stored = state.output_mut(origin)?;
            stored.content.clone_from(&options.content);
            stored.controls.clone_from(&options.controls);
            state.events.push(DeliveryEvent::InteractionEdited {
                interaction_id: self.id,
                output_id: origin,
                options: options.clone(),
            });
            Ok(())
        })?;
        Ok(InMemoryOutput::handle(self.transport.clone(), origin))
    }

    async fn send_prompt(&self, prompt: &TextInputPrompt) -> DeliveryResult<()> {
        self.transport.with_state(|state| {
            state.check(Operation::Prompt)?;
            state.acknowledge(self.id)?;
            state.events.push(DeliveryEvent::Prompted {
                interaction_id: self.id,
                prompt: prompt.clone(),
            });
            Ok(())
        })
    }
}
