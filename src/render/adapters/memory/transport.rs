//! Shared in-memory transport state.

use super::{InMemoryChannel, InMemoryInteraction};
use crate::render::{
    domain::{
        ChannelId, ControlSurface, Emoji, InteractionEditOptions, InteractionId,
        InteractionSendOptions, MessageEditOptions, MessageSendOptions, OutputId, TextInputPrompt,
    },
    ports::{DeliveryError, DeliveryResult},
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// Transport operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`crate::render::ports::Messageable::send`].
    Send,
    /// [`crate::render::ports::LiveOutput::reply`].
    Reply,
    /// [`crate::render::ports::LiveOutput::edit`].
    Edit,
    /// [`crate::render::ports::LiveOutput::delete`].
    Delete,
    /// [`crate::render::ports::Interaction::send_response`].
    InteractionSend,
    /// [`crate::render::ports::Interaction::edit_response`].
    InteractionEdit,
    /// [`crate::render::ports::Interaction::send_prompt`].
    Prompt,
}

/// A delivery recorded by the in-memory transport.
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryEvent {
    /// A new message was sent to a channel.
    Sent {
        /// Target channel.
        channel_id: ChannelId,
        /// Created output.
        output_id: OutputId,
        /// Options used.
        options: MessageSendOptions,
    },
    /// A reply was sent to an output.
    Replied {
        /// Output replied to.
        to: OutputId,
        /// Created output.
        output_id: OutputId,
        /// Options used.
        options: MessageSendOptions,
    },
    /// An output was edited directly.
    Edited {
        /// Edited output.
        output_id: OutputId,
        /// Options used.
        options: MessageEditOptions,
    },
    /// An interaction was acknowledged with a new response.
    InteractionResponded {
        /// Acknowledged interaction.
        interaction_id: InteractionId,
        /// Created output.
        output_id: OutputId,
        /// Options used.
        options: InteractionSendOptions,
    },
    /// An interaction was acknowledged by editing its originating output.
    InteractionEdited {
        /// Acknowledged interaction.
        interaction_id: InteractionId,
        /// Edited output.
        output_id: OutputId,
        /// Options used.
        options: InteractionEditOptions,
    },
    /// An interaction was acknowledged with a text-input prompt.
    Prompted {
        /// Acknowledged interaction.
        interaction_id: InteractionId,
        /// Prompt sent.
        prompt: TextInputPrompt,
    },
    /// An output was deleted.
    Deleted {
        /// Deleted output.
        output_id: OutputId,
    },
    /// A reaction was added.
    Reacted {
        /// Reacted-to output.
        output_id: OutputId,
        /// Emoji added.
        emoji: Emoji,
    },
}

impl DeliveryEvent {
    /// Returns `true` for either kind of in-place edit.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self, Self::Edited { .. } | Self::InteractionEdited { .. })
    }
}

/// Current state of an output held by the in-memory transport.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredOutput {
    /// Channel holding the output.
    pub channel_id: ChannelId,
    /// Latest text content.
    pub content: Option<String>,
    /// Latest control surface.
    pub controls: Option<ControlSurface>,
    /// Reactions in the order they were added.
    pub reactions: Vec<Emoji>,
}

/// Thread-safe in-memory chat transport.
///
/// Channels, outputs and interactions created from one transport share its
/// state, so tests can inspect every delivery through
/// [`InMemoryTransport::events`]. It performs no network I/O and is suitable
/// for unit tests, integration tests and local wiring.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransport {
    state: Arc<RwLock<TransportState>>,
}

#[derive(Debug, Default)]
pub(super) struct TransportState {
    next_id: u64,
    pub(super) outputs: HashMap<OutputId, StoredOutput>,
    pub(super) events: Vec<DeliveryEvent>,
    failing: HashSet<Operation>,
    rejected_reactions: HashSet<Emoji>,
    responded: HashSet<InteractionId>,
}

impl TransportState {
    pub(super) const fn allocate_id(&mut self) -> u64 {
        self.next_id = self.next_id.saturating_add(1);
        self.next_id
    }

    pub(super) fn check(&self, operation: Operation) -> DeliveryResult<()> {
        if self.failing.contains(&operation) {
            return Err(DeliveryError::Rejected(format!(
                "{operation:?} failure injected"
            )));
        }
        Ok(())
    }

    pub(super) fn check_reaction(&self, emoji: &Emoji) -> DeliveryResult<()> {
        if self.rejected_reactions.contains(emoji) {
            return Err(DeliveryError::Rejected(format!(
                "reaction {emoji:?} rejected"
            )));
        }
        Ok(())
    }

    /// Marks an interaction as acknowledged, failing if it already was.
    pub(super) fn acknowledge(&mut self, interaction_id: InteractionId) -> DeliveryResult<()> {
        if !self.responded.insert(interaction_id) {
            return Err(DeliveryError::Rejected(format!(
                "interaction {interaction_id} already acknowledged"
            )));
        }
        Ok(())
    }

    pub(super) fn create_output(
        &mut self,
        channel_id: ChannelId,
        content: Option<String>,
        controls: Option<ControlSurface>,
    ) -> OutputId {
        let output_id = OutputId::new(self.allocate_id());
        self.outputs.insert(
            output_id,
            StoredOutput {
                channel_id,
                content,
                controls,
                reactions: Vec::new(),
            },
        );
        output_id
    }

    pub(super) fn output_mut(&mut self, output_id: OutputId) -> DeliveryResult<&mut StoredOutput> {
        self.outputs
            .get_mut(&output_id)
            .ok_or(DeliveryError::NotFound(output_id))
    }
}

impl InMemoryTransport {
    /// Creates an empty transport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the transport state.
    pub(super) fn with_state<T>(
        &self,
        f: impl FnOnce(&mut TransportState) -> DeliveryResult<T>,
    ) -> DeliveryResult<T> {
        let mut state = self
            .state
            .write()
            .map_err(|err| DeliveryError::transport(std::io::Error::other(err.to_string())))?;
        f(&mut state)
    }

    fn read<T>(&self, f: impl FnOnce(&TransportState) -> T) -> DeliveryResult<T> {
        let state = self
            .state
            .read()
            .map_err(|err| DeliveryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(f(&state))
    }

    /// Returns a channel handle backed by this transport.
    #[must_use]
    pub fn channel(&self, channel_id: ChannelId) -> InMemoryChannel {
        InMemoryChannel::new(self.clone(), channel_id)
    }

    /// Creates a command interaction with no originating output.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn interaction(&self, channel_id: ChannelId) -> DeliveryResult<InMemoryInteraction> {
        let id = self.with_state(|state| Ok(InteractionId::new(state.allocate_id())))?;
        Ok(InMemoryInteraction::new(self.clone(), id, channel_id, None))
    }

    /// Creates a control-activation or prompt-submission interaction that
    /// originates from an existing output.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::NotFound`] when the output does not exist, or
    /// transport errors when lock acquisition fails.
    pub fn component_interaction(
        &self,
        origin: OutputId,
    ) -> DeliveryResult<InMemoryInteraction> {
        let (id, channel_id) = self.with_state(|state| {
            let channel_id = state.output_mut(origin)?.channel_id;
            Ok((InteractionId::new(state.allocate_id()), channel_id))
        })?;
        Ok(InMemoryInteraction::new(
            self.clone(),
            id,
            channel_id,
            Some(origin),
        ))
    }

    /// Makes every subsequent call of `operation` fail until recovered.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn fail(&self, operation: Operation) -> DeliveryResult<()> {
        self.with_state(|state| {
            state.failing.insert(operation);
            Ok(())
        })
    }

    /// Clears an injected failure.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn recover(&self, operation: Operation) -> DeliveryResult<()> {
        self.with_state(|state| {
            state.failing.remove(&operation);
            Ok(())
        })
    }

    /// Makes every attempt to add `emoji` as a reaction fail.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn reject_reaction(&self, emoji: Emoji) -> DeliveryResult<()> {
        self.with_state(|state| {
            state.rejected_reactions.insert(emoji);
            Ok(())
        })
    }

    /// Returns every recorded delivery in order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn events(&self) -> DeliveryResult<Vec<DeliveryEvent>> {
        self.read(|state| state.events.clone())
    }

    /// Returns the number of in-place edits recorded.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn edit_count(&self) -> DeliveryResult<usize> {
        self.read(|state| state.events.iter().filter(|event| event.is_edit()).count())
    }

    /// Returns the current state of an output, or `None` once deleted.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn output(&self, output_id: OutputId) -> DeliveryResult<Option<StoredOutput>> {
        self.read(|state| state.outputs.get(&output_id).cloned())
    }
}
