//! Shared test helpers for in-memory transport integration tests.

use eyre::{Result, eyre};
use rstest::fixture;
use vitrine::render::{
    adapters::memory::{InMemoryInteraction, InMemoryTransport, StoredOutput},
    domain::{ChannelId, Embed, RenderDescriptor},
    services::PaginatedSession,
};

/// Channel used by every integration scenario.
pub const CHANNEL: ChannelId = ChannelId::new(42);

/// Provides a fresh in-memory transport for each test.
#[fixture]
pub fn transport() -> InMemoryTransport {
    InMemoryTransport::new()
}

/// Builds `count` pages, each with text and a titled embed.
#[must_use]
pub fn numbered_pages(count: usize) -> Vec<RenderDescriptor> {
    (1..=count)
        .map(|page| {
            RenderDescriptor::text(format!("entry {page}"))
                .with_embed(Embed::titled(format!("Result {page}")))
        })
        .collect()
}

/// Creates an activation interaction on the session's live output.
///
/// # Errors
///
/// Returns an error if the session has no live output or the transport
/// cannot create the interaction.
pub fn activation(
    transport: &InMemoryTransport,
    session: &PaginatedSession,
) -> Result<InMemoryInteraction> {
    let output = session
        .output()
        .ok_or_else(|| eyre!("session has no live output"))?;
    Ok(transport.component_interaction(output.id())?)
}

/// Returns the stored state of the session's live output.
///
/// # Errors
///
/// Returns an error if the session has no live output or the output no
/// longer exists.
pub fn shown(transport: &InMemoryTransport, session: &PaginatedSession) -> Result<StoredOutput> {
    let output = session
        .output()
        .ok_or_else(|| eyre!("session has no live output"))?;
    transport
        .output(output.id())?
        .ok_or_else(|| eyre!("output {} no longer exists", output.id()))
}
