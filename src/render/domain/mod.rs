//! Domain model for response rendering.
//!
//! The render domain describes what a response looks like and how that
//! description projects onto each delivery mechanism. It performs no I/O;
//! delivery goes through the ports in [`crate::render::ports`].

mod controls;
mod descriptor;
mod error;
mod ids;
mod options;
mod payload;

pub use controls::{
    Control, ControlStyle, ControlSurface, PromptSubmission, TextInputField, TextInputPrompt,
    TextInputStyle,
};
pub use descriptor::{DescriptorOverrides, Override, RenderDescriptor};
pub use error::RenderDomainError;
pub use ids::{ChannelId, ControlId, InteractionId, OutputId, SessionId};
pub use options::{
    InteractionEditOptions, InteractionSendOptions, MessageEditOptions, MessageSendOptions,
};
pub use payload::{AllowedMentions, Attachment, Embed, EmbedField, Emoji, MessageReference, StickerId};
