//! Multi-page navigable render session.

use super::{Deliverable, RenderSession, Runner, SessionError, SessionResult};
use crate::render::{
    domain::{
        Control, ControlId, ControlSurface, DescriptorOverrides, Override, PromptSubmission,
        RenderDescriptor, RenderDomainError, SessionId, TextInputField, TextInputPrompt,
    },
    ports::{Interaction, OutputHandle},
};
use async_trait::async_trait;
use tracing::debug;

/// Number of navigation controls added to every page.
const NAVIGATION_CONTROL_COUNT: usize = 3;

/// A page already holding this many controls cannot take navigation.
pub const PAGE_CONTROL_LIMIT: usize = ControlSurface::MAX_CONTROLS - NAVIGATION_CONTROL_COUNT + 1;

/// Navigation direction for [`PaginatedSession::move_page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the last page.
    Forward,
    /// Towards the first page.
    Backward,
}

/// The three controls every page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationControl {
    /// Moves one page back; disabled on the first page.
    Previous,
    /// Shows `page/total`; opens the jump-to-page prompt.
    PageIndicator,
    /// Moves one page forward; disabled on the last page.
    Next,
}

impl NavigationControl {
    const ALL: [Self; 3] = [Self::Previous, Self::PageIndicator, Self::Next];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Previous => "prev",
            Self::PageIndicator => "page",
            Self::Next => "next",
        }
    }

    /// Returns the control identifier used by `session`.
    #[must_use]
    pub fn control_id(self, session: SessionId) -> ControlId {
        ControlId::new(format!("vitrine:{session}:{}", self.suffix()))
    }
}

/// An ordered set of pages shown one at a time in a single output.
///
/// Every page gets previous, page-indicator and next controls at
/// construction. Navigation acknowledges the triggering interaction by
/// editing the output in place and moves the current index only after the
/// edit succeeds.
#[derive(Debug)]
pub struct PaginatedSession {
    base: RenderSession,
    pages: Vec<RenderDescriptor>,
    index: usize,
}

impl PaginatedSession {
    /// Creates a session showing `default_index` (0-based) first.
    ///
    /// # Errors
    ///
    /// Returns [`RenderDomainError::EmptyPages`] for an empty page list,
    /// [`RenderDomainError::DefaultPageOutOfRange`] when `default_index` is
    /// not a page, and [`RenderDomainError::ControlLimitExceeded`] when a page
    /// has no room for navigation controls.
    pub fn new(
        pages: Vec<RenderDescriptor>,
        default_index: usize,
    ) -> Result<Self, RenderDomainError> {
        if pages.is_empty() {
            return Err(RenderDomainError::EmptyPages);
        }
        let page_count = pages.len();
        let out_of_range = RenderDomainError::DefaultPageOutOfRange {
            index: default_index,
            page_count,
        };
        if default_index >= page_count {
            return Err(out_of_range);
        }

        let id = SessionId::new();
        let wired = pages
            .into_iter()
            .enumerate()
            .map(|(page, descriptor)| attach_navigation(id, page, page_count, &descriptor))
            .collect::<Result<Vec<_>, _>>()?;
        let first = wired.get(default_index).cloned().ok_or(out_of_range)?;

        Ok(Self {
            base: RenderSession::with_id(id, first),
            pages: wired,
            index: default_index,
        })
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.base.id()
    }

    /// Returns the underlying single-response session.
    #[must_use]
    pub const fn session(&self) -> &RenderSession {
        &self.base
    }

    /// Returns the live output, if dispatched and not yet destroyed.
    #[must_use]
    pub const fn output(&self) -> Option<&OutputHandle> {
        self.base.output()
    }

    /// Returns the number of pages.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the 0-based index of the page currently shown.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.index
    }

    /// Returns the pages with navigation controls attached.
    #[must_use]
    pub fn pages(&self) -> &[RenderDescriptor] {
        &self.pages
    }

    /// Returns the navigation control an identifier refers to, if it belongs
    /// to this session.
    #[must_use]
    pub fn navigation_for(&self, control_id: &ControlId) -> Option<NavigationControl> {
        NavigationControl::ALL
            .into_iter()
            .find(|control| control.control_id(self.id()) == *control_id)
    }

    /// Returns `true` when an activation or submission with this identifier
    /// targets this session.
    #[must_use]
    pub fn owns_control(&self, control_id: &ControlId) -> bool {
        self.navigation_for(control_id).is_some() || *control_id == self.prompt_id()
    }

    /// Returns the jump-to-page prompt bound to this session.
    #[must_use]
    pub fn page_prompt(&self) -> TextInputPrompt {
        TextInputPrompt::new(self.prompt_id(), "Page number").with_field(
            TextInputField::new(self.page_field_id(), "Page number")
                .with_placeholder(format!("1-{}", self.page_count())),
        )
    }

    fn prompt_id(&self) -> ControlId {
        ControlId::new(format!("vitrine:{}:page-prompt", self.id()))
    }

    fn page_field_id(&self) -> ControlId {
        ControlId::new(format!("vitrine:{}:page-input", self.id()))
    }

    /// Shows the page with the given 1-based number.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PageOutOfRange`] when no such page exists, or
    /// a delivery error when the edit fails. The index is unchanged on error.
    pub async fn jump_to_page(
        &mut self,
        page_number: i64,
        interaction: &dyn Interaction,
    ) -> SessionResult<()> {
        let target = page_number
            .checked_sub(1)
            .and_then(|zero_based| usize::try_from(zero_based).ok())
            .filter(|candidate| *candidate < self.pages.len())
            .ok_or(SessionError::PageOutOfRange {
                requested: page_number,
                page_count: self.pages.len(),
            })?;
        self.show(target, interaction).await
    }

    /// Moves one page in `direction` without wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::PageOutOfRange`] when already on the first or
    /// last page, or a delivery error when the edit fails. The index is
    /// unchanged on error.
    pub async fn move_page(
        &mut self,
        direction: Direction,
        interaction: &dyn Interaction,
    ) -> SessionResult<()> {
        let (candidate, requested) = match direction {
            Direction::Forward => {
                let next = self.index.saturating_add(1);
                (Some(next).filter(|i| *i < self.pages.len()), one_based(next))
            }
            Direction::Backward => (self.index.checked_sub(1), one_based(self.index).saturating_sub(1)),
        };
        let target = candidate.ok_or(SessionError::PageOutOfRange {
            requested,
            page_count: self.pages.len(),
        })?;
        self.show(target, interaction).await
    }

    /// Routes a control activation to the matching navigation action.
    ///
    /// Previous and next move one page; the page indicator answers with the
    /// jump-to-page prompt.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownControl`] for identifiers this session
    /// does not own, plus any navigation or delivery error.
    pub async fn handle_activation(
        &mut self,
        control_id: &ControlId,
        interaction: &dyn Interaction,
    ) -> SessionResult<()> {
        match self.navigation_for(control_id) {
            Some(NavigationControl::Previous) => {
                self.move_page(Direction::Backward, interaction).await
            }
            Some(NavigationControl::Next) => self.move_page(Direction::Forward, interaction).await,
            Some(NavigationControl::PageIndicator) => {
                interaction.send_prompt(&self.page_prompt()).await?;
                Ok(())
            }
            None => Err(SessionError::UnknownControl(control_id.clone())),
        }
    }

    /// Handles a submitted jump-to-page prompt.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownControl`] when the submission belongs to
    /// another prompt, [`SessionError::MissingPageInput`] when the page field
    /// is absent, plus any error from [`Self::submit_page_number`].
    pub async fn handle_submission(
        &mut self,
        submission: &PromptSubmission,
        interaction: &dyn Interaction,
    ) -> SessionResult<()> {
        if submission.prompt_id != self.prompt_id() {
            return Err(SessionError::UnknownControl(submission.prompt_id.clone()));
        }
        let raw = submission
            .value(&self.page_field_id())
            .ok_or(SessionError::MissingPageInput)?;
        self.submit_page_number(raw, interaction).await
    }

    /// Parses a typed page number and jumps to it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidPageNumber`] for non-integer input,
    /// plus any error from [`Self::jump_to_page`].
    pub async fn submit_page_number(
        &mut self,
        raw: &str,
        interaction: &dyn Interaction,
    ) -> SessionResult<()> {
        let page_number =
            raw.trim()
                .parse::<i64>()
                .map_err(|source| SessionError::InvalidPageNumber {
                    input: raw.to_owned(),
                    source,
                })?;
        self.jump_to_page(page_number, interaction).await
    }

    async fn show(&mut self, target: usize, interaction: &dyn Interaction) -> SessionResult<()> {
        let page = self.pages.get(target).ok_or(SessionError::PageOutOfRange {
            requested: one_based(target),
            page_count: self.pages.len(),
        })?;
        page.acknowledge_with_edit(interaction).await?;
        debug!(session_id = %self.id(), from = self.index, to = target, "page changed");
        self.index = target;
        Ok(())
    }
}

#[async_trait]
impl Runner for PaginatedSession {
    async fn run(&mut self, interaction: &dyn Interaction) -> SessionResult<OutputHandle> {
        self.base.run(interaction).await
    }

    async fn destroy(&mut self) -> SessionResult<()> {
        self.base.destroy().await
    }
}

fn one_based(index: usize) -> i64 {
    i64::try_from(index).map_or(i64::MAX, |value| value.saturating_add(1))
}

/// Returns `descriptor` with previous, page-indicator and next controls
/// appended to its surface.
fn attach_navigation(
    session: SessionId,
    page: usize,
    page_count: usize,
    descriptor: &RenderDescriptor,
) -> Result<RenderDescriptor, RenderDomainError> {
    let mut surface = descriptor.controls().cloned().unwrap_or_default();
    if surface.len() >= PAGE_CONTROL_LIMIT {
        return Err(RenderDomainError::ControlLimitExceeded {
            page,
            existing: surface.len(),
            limit: PAGE_CONTROL_LIMIT,
        });
    }

    let is_last = page.saturating_add(1) >= page_count;
    surface.push(
        Control::new(NavigationControl::Previous.control_id(session), "<<")
            .with_disabled(page == 0),
    )?;
    surface.push(Control::new(
        NavigationControl::PageIndicator.control_id(session),
        format!("{}/{page_count}", page.saturating_add(1)),
    ))?;
    surface.push(
        Control::new(NavigationControl::Next.control_id(session), ">>").with_disabled(is_last),
    )?;

    Ok(descriptor.copy(DescriptorOverrides {
        controls: Override::Set(Some(surface)),
        ..DescriptorOverrides::default()
    }))
}
