//! In-memory channel and output adapters.

use super::{DeliveryEvent, InMemoryTransport, Operation};
use crate::render::{
    domain::{ChannelId, Emoji, MessageEditOptions, MessageSendOptions, OutputId},
    ports::{DeliveryResult, LiveOutput, Messageable, OutputHandle},
};
use async_trait::async_trait;
use std::sync::Arc;

/// In-memory channel adapter.
#[derive(Debug, Clone)]
pub struct InMemoryChannel {
    transport: InMemoryTransport,
    channel_id: ChannelId,
}

impl InMemoryChannel {
    pub(super) const fn new(transport: InMemoryTransport, channel_id: ChannelId) -> Self {
        Self {
            transport,
            channel_id,
        }
    }
}

#[async_trait]
impl Messageable for InMemoryChannel {
    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    async fn send(&self, options: &MessageSendOptions) -> DeliveryResult<OutputHandle> {
        let output_id = self.transport.with_state(|state| {
            state.check(Operation::Send)?;
            let output_id = state.create_output(
                self.channel_id,
                options.content.clone(),
                options.controls.clone(),
            );
            state.events.push(DeliveryEvent::Sent {
                channel_id: self.channel_id,
                output_id,
                options: options.clone(),
            });
            Ok(output_id)
        })?;
        Ok(InMemoryOutput::handle(self.transport.clone(), output_id))
    }
}

/// In-memory delivered-output adapter.
#[derive(Debug, Clone)]
pub struct InMemoryOutput {
    transport: InMemoryTransport,
    output_id: OutputId,
}

impl InMemoryOutput {
    pub(super) fn handle(transport: InMemoryTransport, output_id: OutputId) -> OutputHandle {
        Arc::new(Self {
            transport,
            output_id,
        })
    }
}

#[async_trait]
impl LiveOutput for InMemoryOutput {
    fn id(&self) -> OutputId {
        self.output_id
    }

    async fn reply(&self, options: &MessageSendOptions) -> DeliveryResult<OutputHandle> {
        let reply_id = self.transport.with_state(|state| {
            state.check(Operation::Reply)?;
            let channel_id = state.output_mut(self.output_id)?.channel_id;
            let reply_id =
                state.create_output(channel_id, options.content.clone(), options.controls.clone());
            state.events.push(DeliveryEvent::Replied {
                to: self.output_id,
                output_id: reply_id,
                options: options.clone(),
            });
            Ok(reply_id)
        })?;
        Ok(Self::handle(self.transport.clone(), reply_id))
    }

    async fn edit(&self, options: &MessageEditOptions) -> DeliveryResult<OutputHandle> {
        self.transport.with_state(|state| {
            state.check(Operation::Edit)?;
            let stored = state.output_mut(self.output_id)?;
            stored.content.clone_from(&options.content);
            stored.controls.clone_from(&options.controls);
            state.events.push(DeliveryEvent::Edited {
                output_id: self.output_id,
                options: options.clone(),
            });
            Ok(())
        })?;
        Ok(Self::handle(self.transport.clone(), self.output_id))
    }

    async fn delete(&self) -> DeliveryResult<()> {
        self.transport.with_state(|state| {
            state.check(Operation::Delete)?;
            state.output_mut(self.output_id)?;
            state.outputs.remove(&self.output_id);
            state.events.push(DeliveryEvent::Deleted {
                output_id: self.output_id,
            });
            Ok(())
        })
    }

    async fn add_reaction(&self, emoji: &Emoji) -> DeliveryResult<()> {
        self.transport.with_state(|state| {
            state.check_reaction(emoji)?;
            state.output_mut(self.output_id)?.reactions.push(emoji.clone());
            state.events.push(DeliveryEvent::Reacted {
                output_id: self.output_id,
                emoji: emoji.clone(),
            });
            Ok(())
        })
    }
}
