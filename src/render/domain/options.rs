//! Option sets accepted by each delivery mechanism.
//!
//! Every mechanism accepts a different subset of a descriptor's fields. Each
//! subset is its own type, so a field a mechanism does not accept cannot be
//! expressed for it. Serialised forms skip absent optionals, which is the
//! shape transport adapters observe.

use super::{AllowedMentions, Attachment, ControlSurface, Embed, MessageReference, StickerId};
use serde::Serialize;
use std::time::Duration;

/// Options for sending a new message to a channel or replying to an output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageSendOptions {
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Whether the message is read aloud.
    pub tts: bool,
    /// Primary embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    /// Embed list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Primary file upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Attachment>,
    /// File uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<Attachment>>,
    /// Stickers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stickers: Option<Vec<StickerId>>,
    /// Delay after which the message is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<Duration>,
    /// Deduplication token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<u64>,
    /// Mention notification policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Output this message replies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<MessageReference>,
    /// Whether the referenced author is notified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_author: Option<bool>,
    /// Interactive controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlSurface>,
    /// Whether link previews are suppressed.
    pub suppress_embeds: bool,
    /// Whether delivery skips push notifications.
    pub silent: bool,
}

/// Options for editing an existing message in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MessageEditOptions {
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Primary embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    /// Embed list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Existing attachments to retain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Delay after which the message is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<Duration>,
    /// Mention notification policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Interactive controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlSurface>,
    /// Whether link previews are suppressed.
    pub suppress: bool,
}

/// Options for acknowledging an interaction with a new response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionSendOptions {
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Whether the message is read aloud.
    pub tts: bool,
    /// Whether only the requesting user sees the response.
    pub ephemeral: bool,
    /// Primary embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    /// Embed list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Primary file upload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Attachment>,
    /// File uploads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<Attachment>>,
    /// Delay after which the response is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<Duration>,
    /// Mention notification policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Interactive controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlSurface>,
    /// Whether link previews are suppressed.
    pub suppress_embeds: bool,
    /// Whether delivery skips push notifications.
    pub silent: bool,
}

/// Options for acknowledging an interaction by editing the output it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InteractionEditOptions {
    /// Message text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Primary embed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<Embed>,
    /// Embed list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embeds: Option<Vec<Embed>>,
    /// Existing attachments to retain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<Attachment>>,
    /// Delay after which the output is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<Duration>,
    /// Mention notification policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_mentions: Option<AllowedMentions>,
    /// Interactive controls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controls: Option<ControlSurface>,
}
