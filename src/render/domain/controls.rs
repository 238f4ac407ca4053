//! Interactive controls and text-input prompts.
//!
//! A [`ControlSurface`] is the container of clickable controls attached to a
//! delivered response. A [`TextInputPrompt`] is a form sent in reply to an
//! interaction; its submission comes back as a [`PromptSubmission`].

use super::{ControlId, RenderDomainError};
use serde::{Deserialize, Serialize};

/// Visual style of a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStyle {
    /// Highlighted call to action.
    Primary,
    /// Neutral control.
    #[default]
    Secondary,
    /// Positive action.
    Success,
    /// Destructive action.
    Danger,
}

/// A clickable control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    /// Identifier echoed back on activation.
    pub custom_id: ControlId,
    /// Visible label.
    pub label: String,
    /// Visual style.
    pub style: ControlStyle,
    /// Whether the control rejects activation.
    pub disabled: bool,
}

impl Control {
    /// Creates an enabled control with the default style.
    #[must_use]
    pub fn new(custom_id: impl Into<ControlId>, label: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style: ControlStyle::default(),
            disabled: false,
        }
    }

    /// Sets the visual style.
    #[must_use]
    pub const fn with_style(mut self, style: ControlStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets whether the control is disabled.
    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Ordered container of controls attached to one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlSurface {
    controls: Vec<Control>,
}

impl ControlSurface {
    /// Platform limit on controls per surface.
    pub const MAX_CONTROLS: usize = 25;

    /// Creates an empty surface.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            controls: Vec::new(),
        }
    }

    /// Returns the controls in display order.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Returns the number of controls on the surface.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.controls.len()
    }

    /// Returns `true` when the surface holds no controls.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Returns how many more controls fit on the surface.
    #[must_use]
    pub const fn remaining_capacity(&self) -> usize {
        Self::MAX_CONTROLS.saturating_sub(self.controls.len())
    }

    /// Finds a control by identifier.
    #[must_use]
    pub fn find(&self, custom_id: &ControlId) -> Option<&Control> {
        self.controls
            .iter()
            .find(|control| control.custom_id == *custom_id)
    }

    /// Appends a control.
    ///
    /// # Errors
    ///
    /// Returns [`RenderDomainError::ControlSurfaceFull`] when the surface is
    /// already at [`Self::MAX_CONTROLS`].
    pub fn push(&mut self, control: Control) -> Result<(), RenderDomainError> {
        if self.remaining_capacity() == 0 {
            return Err(RenderDomainError::ControlSurfaceFull {
                max: Self::MAX_CONTROLS,
            });
        }
        self.controls.push(control);
        Ok(())
    }

    /// Appends a control, consuming and returning the surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderDomainError::ControlSurfaceFull`] when the surface is
    /// already at [`Self::MAX_CONTROLS`].
    pub fn with_control(mut self, control: Control) -> Result<Self, RenderDomainError> {
        self.push(control)?;
        Ok(self)
    }
}

/// Line mode of a text-input field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextInputStyle {
    /// Single line.
    #[default]
    Short,
    /// Multi-line.
    Paragraph,
}

/// One field of a [`TextInputPrompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputField {
    /// Identifier echoed back with the submitted value.
    pub custom_id: ControlId,
    /// Field label.
    pub label: String,
    /// Line mode.
    pub style: TextInputStyle,
    /// Hint shown while empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether the field must be filled.
    pub required: bool,
    /// Minimum accepted length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    /// Maximum accepted length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
}

impl TextInputField {
    /// Creates a required single-line field.
    #[must_use]
    pub fn new(custom_id: impl Into<ControlId>, label: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            label: label.into(),
            style: TextInputStyle::default(),
            placeholder: None,
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    /// Sets the placeholder hint.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the accepted length range.
    #[must_use]
    pub const fn with_length(mut self, min: u16, max: u16) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

/// A form sent as the acknowledgement of an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInputPrompt {
    /// Identifier echoed back on submission.
    pub custom_id: ControlId,
    /// Form title.
    pub title: String,
    /// Input fields in display order.
    pub fields: Vec<TextInputField>,
}

impl TextInputPrompt {
    /// Creates a prompt with no fields.
    #[must_use]
    pub fn new(custom_id: impl Into<ControlId>, title: impl Into<String>) -> Self {
        Self {
            custom_id: custom_id.into(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: TextInputField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Values submitted for a [`TextInputPrompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSubmission {
    /// The submitted prompt's identifier.
    pub prompt_id: ControlId,
    /// Submitted `(field, value)` pairs.
    pub values: Vec<(ControlId, String)>,
}

impl PromptSubmission {
    /// Creates a submission with no values.
    #[must_use]
    pub fn new(prompt_id: impl Into<ControlId>) -> Self {
        Self {
            prompt_id: prompt_id.into(),
            values: Vec::new(),
        }
    }

    /// Adds a submitted field value.
    #[must_use]
    pub fn with_value(mut self, field: impl Into<ControlId>, value: impl Into<String>) -> Self {
        self.values.push((field.into(), value.into()));
        self
    }

    /// Returns the value submitted for a field.
    #[must_use]
    pub fn value(&self, field: &ControlId) -> Option<&str> {
        self.values
            .iter()
            .find(|(id, _)| id == field)
            .map(|(_, value)| value.as_str())
    }
}
