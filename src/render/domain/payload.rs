//! Payload values carried by a render descriptor.
//!
//! These are transport-neutral descriptions of rich content. Adapters map
//! them onto whatever their platform client expects.

use super::{ChannelId, OutputId};
use serde::{Deserialize, Serialize};

/// A rich content block displayed alongside message text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Block title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Block body text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link target for the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Accent colour as `0xRRGGBB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<u32>,
    /// Name/value rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    /// Footer text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Embed {
    /// Creates an embed with a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a name/value row.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Sets the footer text.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// One name/value row of an [`Embed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    /// Row label.
    pub name: String,
    /// Row content.
    pub value: String,
    /// Whether the row may share a line with its neighbours.
    pub inline: bool,
}

/// A file uploaded with a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// File name shown to readers.
    pub filename: String,
    /// Alt text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from a file name and its bytes.
    #[must_use]
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            description: None,
            data: data.into(),
        }
    }

    /// Sets the alt text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Platform identifier of a sticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StickerId(pub u64);

/// Which mentions in the content are allowed to notify their targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMentions {
    /// Whether `@everyone` and `@here` notify.
    pub everyone: bool,
    /// Whether user mentions notify.
    pub users: bool,
    /// Whether role mentions notify.
    pub roles: bool,
    /// Whether the author of a referenced message is notified.
    pub replied_user: bool,
}

impl AllowedMentions {
    /// Suppresses every notification.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            everyone: false,
            users: false,
            roles: false,
            replied_user: false,
        }
    }

    /// Allows every notification.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            everyone: true,
            users: true,
            roles: true,
            replied_user: true,
        }
    }
}

/// Reference to an earlier output that a new message replies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReference {
    /// The referenced output.
    pub output_id: OutputId,
    /// Channel holding the referenced output, when it differs from the target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<ChannelId>,
    /// Whether delivery fails when the referenced output no longer exists.
    pub fail_if_not_exists: bool,
}

impl MessageReference {
    /// References an output in the same channel.
    #[must_use]
    pub const fn to_output(output_id: OutputId) -> Self {
        Self {
            output_id,
            channel_id: None,
            fail_if_not_exists: true,
        }
    }
}

/// A reaction emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Emoji {
    /// A standard Unicode emoji.
    Unicode {
        /// The emoji character sequence.
        value: String,
    },
    /// A platform custom emoji.
    Custom {
        /// Platform identifier.
        id: u64,
        /// Emoji name.
        name: String,
        /// Whether the emoji is animated.
        animated: bool,
    },
}

impl Emoji {
    /// Creates a Unicode emoji.
    #[must_use]
    pub fn unicode(value: impl Into<String>) -> Self {
        Self::Unicode {
            value: value.into(),
        }
    }
}
