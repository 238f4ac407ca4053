//! Text-input prompt with selectable variants.

use crate::render::{
    domain::{RenderDomainError, TextInputPrompt},
    ports::{DeliveryResult, Interaction},
};

/// A fixed set of prompt variants, one of which is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPrompt {
    patterns: Vec<TextInputPrompt>,
    active: TextInputPrompt,
    active_index: usize,
}

impl SelectionPrompt {
    /// Creates a prompt with the first variant active.
    ///
    /// # Errors
    ///
    /// Returns [`RenderDomainError::EmptyPromptPatterns`] when `patterns` is
    /// empty.
    pub fn new(patterns: Vec<TextInputPrompt>) -> Result<Self, RenderDomainError> {
        let active = patterns
            .first()
            .cloned()
            .ok_or(RenderDomainError::EmptyPromptPatterns)?;
        Ok(Self {
            patterns,
            active,
            active_index: 0,
        })
    }

    /// Returns the 0-based index of the active variant.
    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the active variant.
    #[must_use]
    pub const fn active(&self) -> &TextInputPrompt {
        &self.active
    }

    /// Returns every variant.
    #[must_use]
    pub fn patterns(&self) -> &[TextInputPrompt] {
        &self.patterns
    }

    /// Makes the variant at `index` active.
    ///
    /// # Errors
    ///
    /// Returns [`RenderDomainError::PatternOutOfRange`] when no such variant
    /// exists; the active variant is unchanged.
    pub fn set_pattern(&mut self, index: usize) -> Result<(), RenderDomainError> {
        let chosen = self
            .patterns
            .get(index)
            .ok_or(RenderDomainError::PatternOutOfRange {
                index,
                count: self.patterns.len(),
            })?;
        self.active = chosen.clone();
        self.active_index = index;
        Ok(())
    }

    /// Acknowledges `interaction` with the active variant.
    ///
    /// # Errors
    ///
    /// Returns the delivery error when the prompt cannot be sent.
    pub async fn respond(&self, interaction: &dyn Interaction) -> DeliveryResult<()> {
        interaction.send_prompt(&self.active).await
    }
}
