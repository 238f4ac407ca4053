//! The render descriptor and its per-mechanism projections.

use super::{
    AllowedMentions, Attachment, ControlSurface, Embed, Emoji, InteractionEditOptions,
    InteractionSendOptions, MessageEditOptions, MessageReference, MessageSendOptions, StickerId,
};
use std::time::Duration;

/// Immutable description of a response's content and delivery options.
///
/// A descriptor is built once with the `with_*` methods and then only read.
/// Variants are derived with [`RenderDescriptor::copy`]. Each delivery
/// mechanism gets its own projection:
///
/// | mechanism                  | projection                                 |
/// |----------------------------|--------------------------------------------|
/// | new message / reply        | [`RenderDescriptor::for_send`]             |
/// | in-place edit              | [`RenderDescriptor::for_edit`]             |
/// | interaction acknowledgement| [`RenderDescriptor::for_interaction_send`] |
/// | interaction edit           | [`RenderDescriptor::for_interaction_edit`] |
///
/// # Examples
///
/// ```
/// use vitrine::render::domain::{Embed, RenderDescriptor};
///
/// let descriptor = RenderDescriptor::text("hello").with_embed(Embed::titled("greeting"));
/// let edit = descriptor.for_edit();
/// assert_eq!(edit.content.as_deref(), Some("hello"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderDescriptor {
    content: Option<String>,
    tts: bool,
    embed: Option<Embed>,
    embeds: Option<Vec<Embed>>,
    file: Option<Attachment>,
    files: Option<Vec<Attachment>>,
    stickers: Option<Vec<StickerId>>,
    delete_after: Option<Duration>,
    nonce: Option<u64>,
    allowed_mentions: Option<AllowedMentions>,
    reference: Option<MessageReference>,
    mention_author: Option<bool>,
    controls: Option<ControlSurface>,
    suppress_embeds: bool,
    silent: bool,
    ephemeral: bool,
    emojis: Option<Vec<Emoji>>,
}

impl RenderDescriptor {
    /// Creates a descriptor with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a descriptor holding only text content.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::new().with_content(content)
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the text-to-speech flag.
    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Sets the primary embed.
    #[must_use]
    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embed = Some(embed);
        self
    }

    /// Sets the embed list.
    #[must_use]
    pub fn with_embeds(mut self, embeds: impl IntoIterator<Item = Embed>) -> Self {
        self.embeds = Some(embeds.into_iter().collect());
        self
    }

    /// Sets the primary file attachment.
    #[must_use]
    pub fn with_file(mut self, file: Attachment) -> Self {
        self.file = Some(file);
        self
    }

    /// Sets the file attachment list.
    #[must_use]
    pub fn with_files(mut self, files: impl IntoIterator<Item = Attachment>) -> Self {
        self.files = Some(files.into_iter().collect());
        self
    }

    /// Sets the stickers.
    #[must_use]
    pub fn with_stickers(mut self, stickers: impl IntoIterator<Item = StickerId>) -> Self {
        self.stickers = Some(stickers.into_iter().collect());
        self
    }

    /// Sets the auto-delete delay.
    #[must_use]
    pub const fn with_delete_after(mut self, delay: Duration) -> Self {
        self.delete_after = Some(delay);
        self
    }

    /// Sets the deduplication token.
    #[must_use]
    pub const fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Sets the mention notification policy.
    #[must_use]
    pub const fn with_allowed_mentions(mut self, allowed_mentions: AllowedMentions) -> Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Sets the output this response replies to.
    #[must_use]
    pub const fn with_reference(mut self, reference: MessageReference) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Sets whether the referenced author is notified.
    #[must_use]
    pub const fn with_mention_author(mut self, mention_author: bool) -> Self {
        self.mention_author = Some(mention_author);
        self
    }

    /// Sets the interactive control surface.
    #[must_use]
    pub fn with_controls(mut self, controls: ControlSurface) -> Self {
        self.controls = Some(controls);
        self
    }

    /// Sets whether link previews are suppressed.
    #[must_use]
    pub const fn with_suppress_embeds(mut self, suppress_embeds: bool) -> Self {
        self.suppress_embeds = suppress_embeds;
        self
    }

    /// Sets whether delivery skips push notifications.
    #[must_use]
    pub const fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Sets whether interaction responses are visible only to the requester.
    #[must_use]
    pub const fn with_ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    /// Sets the reactions added after every successful delivery.
    #[must_use]
    pub fn with_emojis(mut self, emojis: impl IntoIterator<Item = Emoji>) -> Self {
        self.emojis = Some(emojis.into_iter().collect());
        self
    }

    /// Returns the text content.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Returns the text-to-speech flag.
    #[must_use]
    pub const fn tts(&self) -> bool {
        self.tts
    }

    /// Returns the primary embed.
    #[must_use]
    pub const fn embed(&self) -> Option<&Embed> {
        self.embed.as_ref()
    }

    /// Returns the embed list.
    #[must_use]
    pub fn embeds(&self) -> Option<&[Embed]> {
        self.embeds.as_deref()
    }

    /// Returns the primary file attachment.
    #[must_use]
    pub const fn file(&self) -> Option<&Attachment> {
        self.file.as_ref()
    }

    /// Returns the file attachment list.
    #[must_use]
    pub fn files(&self) -> Option<&[Attachment]> {
        self.files.as_deref()
    }

    /// Returns the stickers.
    #[must_use]
    pub fn stickers(&self) -> Option<&[StickerId]> {
        self.stickers.as_deref()
    }

    /// Returns the auto-delete delay.
    #[must_use]
    pub const fn delete_after(&self) -> Option<Duration> {
        self.delete_after
    }

    /// Returns the deduplication token.
    #[must_use]
    pub const fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    /// Returns the mention notification policy.
    #[must_use]
    pub const fn allowed_mentions(&self) -> Option<AllowedMentions> {
        self.allowed_mentions
    }

    /// Returns the reply reference.
    #[must_use]
    pub const fn reference(&self) -> Option<MessageReference> {
        self.reference
    }

    /// Returns whether the referenced author is notified.
    #[must_use]
    pub const fn mention_author(&self) -> Option<bool> {
        self.mention_author
    }

    /// Returns the interactive control surface.
    #[must_use]
    pub const fn controls(&self) -> Option<&ControlSurface> {
        self.controls.as_ref()
    }

    /// Returns whether link previews are suppressed.
    #[must_use]
    pub const fn suppress_embeds(&self) -> bool {
        self.suppress_embeds
    }

    /// Returns whether delivery skips push notifications.
    #[must_use]
    pub const fn silent(&self) -> bool {
        self.silent
    }

    /// Returns whether interaction responses are private.
    #[must_use]
    pub const fn ephemeral(&self) -> bool {
        self.ephemeral
    }

    /// Returns the reactions added after delivery.
    #[must_use]
    pub fn emojis(&self) -> &[Emoji] {
        self.emojis.as_deref().unwrap_or_default()
    }

    /// Projects the descriptor onto a new-message or reply send.
    #[must_use]
    pub fn for_send(&self) -> MessageSendOptions {
        MessageSendOptions {
            content: self.content.clone(),
            tts: self.tts,
            embed: self.embed.clone(),
            embeds: self.embeds.clone(),
            file: self.file.clone(),
            files: self.files.clone(),
            stickers: self.stickers.clone(),
            delete_after: self.delete_after,
            nonce: self.nonce,
            allowed_mentions: self.allowed_mentions,
            reference: self.reference,
            mention_author: self.mention_author,
            controls: self.controls.clone(),
            suppress_embeds: self.suppress_embeds,
            silent: self.silent,
        }
    }

    /// Projects the descriptor onto an in-place message edit.
    #[must_use]
    pub fn for_edit(&self) -> MessageEditOptions {
        MessageEditOptions {
            content: self.content.clone(),
            embed: self.embed.clone(),
            embeds: self.embeds.clone(),
            attachments: self.retained_attachments(),
            delete_after: self.delete_after,
            allowed_mentions: self.allowed_mentions,
            controls: self.controls.clone(),
            suppress: self.suppress_embeds,
        }
    }

    /// Projects the descriptor onto an interaction acknowledgement.
    #[must_use]
    pub fn for_interaction_send(&self) -> InteractionSendOptions {
        InteractionSendOptions {
            content: self.content.clone(),
            tts: self.tts,
            ephemeral: self.ephemeral,
            embed: self.embed.clone(),
            embeds: self.embeds.clone(),
            file: self.file.clone(),
            files: self.files.clone(),
            delete_after: self.delete_after,
            allowed_mentions: self.allowed_mentions,
            controls: self.controls.clone(),
            suppress_embeds: self.suppress_embeds,
            silent: self.silent,
        }
    }

    /// Projects the descriptor onto an interaction edit.
    #[must_use]
    pub fn for_interaction_edit(&self) -> InteractionEditOptions {
        InteractionEditOptions {
            content: self.content.clone(),
            embed: self.embed.clone(),
            embeds: self.embeds.clone(),
            attachments: self.retained_attachments(),
            delete_after: self.delete_after,
            allowed_mentions: self.allowed_mentions,
            controls: self.controls.clone(),
        }
    }

    /// Files uploaded at send time, restated as attachments kept on edit.
    ///
    /// The list takes precedence over the single file.
    fn retained_attachments(&self) -> Option<Vec<Attachment>> {
        self.files
            .clone()
            .or_else(|| self.file.clone().map(|file| vec![file]))
    }

    /// Returns a new descriptor with the given fields replaced.
    ///
    /// Fields left as [`Override::Unset`] keep this descriptor's value;
    /// `Override::Set(None)` clears an optional field.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine::render::domain::{DescriptorOverrides, Embed, Override, RenderDescriptor};
    ///
    /// let source = RenderDescriptor::text("a").with_embed(Embed::titled("E"));
    /// let copy = source.copy(DescriptorOverrides {
    ///     content: Override::Set(Some("x".to_owned())),
    ///     ..DescriptorOverrides::default()
    /// });
    /// assert_eq!(copy.content(), Some("x"));
    /// assert_eq!(copy.embed(), source.embed());
    /// ```
    #[must_use]
    pub fn copy(&self, overrides: DescriptorOverrides) -> Self {
        Self {
            content: overrides.content.resolve(&self.content),
            tts: overrides.tts.resolve(&self.tts),
            embed: overrides.embed.resolve(&self.embed),
            embeds: overrides.embeds.resolve(&self.embeds),
            file: overrides.file.resolve(&self.file),
            files: overrides.files.resolve(&self.files),
            stickers: overrides.stickers.resolve(&self.stickers),
            delete_after: overrides.delete_after.resolve(&self.delete_after),
            nonce: overrides.nonce.resolve(&self.nonce),
            allowed_mentions: overrides.allowed_mentions.resolve(&self.allowed_mentions),
            reference: overrides.reference.resolve(&self.reference),
            mention_author: overrides.mention_author.resolve(&self.mention_author),
            controls: overrides.controls.resolve(&self.controls),
            suppress_embeds: overrides.suppress_embeds.resolve(&self.suppress_embeds),
            silent: overrides.silent.resolve(&self.silent),
            ephemeral: overrides.ephemeral.resolve(&self.ephemeral),
            emojis: overrides.emojis.resolve(&self.emojis),
        }
    }
}

/// A field override for [`RenderDescriptor::copy`].
///
/// `Unset` is distinct from every legal value, including `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Override<T> {
    /// Keep the source value.
    Unset,
    /// Replace the source value.
    Set(T),
}

impl<T> Default for Override<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T: Clone> Override<T> {
    /// Returns the override value, or a clone of `current` when unset.
    #[must_use]
    pub fn resolve(self, current: &T) -> T {
        match self {
            Self::Unset => current.clone(),
            Self::Set(value) => value,
        }
    }
}

impl<T> Override<T> {
    /// Returns `true` when the source value is kept.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

/// Per-field overrides applied by [`RenderDescriptor::copy`].
///
/// Start from [`DescriptorOverrides::default`], which leaves every field
/// unset, and set only what should change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorOverrides {
    /// Text content.
    pub content: Override<Option<String>>,
    /// Text-to-speech flag.
    pub tts: Override<bool>,
    /// Primary embed.
    pub embed: Override<Option<Embed>>,
    /// Embed list.
    pub embeds: Override<Option<Vec<Embed>>>,
    /// Primary file attachment.
    pub file: Override<Option<Attachment>>,
    /// File attachment list.
    pub files: Override<Option<Vec<Attachment>>>,
    /// Stickers.
    pub stickers: Override<Option<Vec<StickerId>>>,
    /// Auto-delete delay.
    pub delete_after: Override<Option<Duration>>,
    /// Deduplication token.
    pub nonce: Override<Option<u64>>,
    /// Mention notification policy.
    pub allowed_mentions: Override<Option<AllowedMentions>>,
    /// Reply reference.
    pub reference: Override<Option<MessageReference>>,
    /// Whether the referenced author is notified.
    pub mention_author: Override<Option<bool>>,
    /// Interactive control surface.
    pub controls: Override<Option<ControlSurface>>,
    /// Link preview suppression.
    pub suppress_embeds: Override<bool>,
    /// Silent delivery.
    pub silent: Override<bool>,
    /// Private visibility.
    pub ephemeral: Override<bool>,
    /// Reactions.
    pub emojis: Override<Option<Vec<Emoji>>>,
}
