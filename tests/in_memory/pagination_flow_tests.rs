//! End-to-end pagination flows over the in-memory transport.

use crate::in_memory::helpers::{CHANNEL, activation, numbered_pages, shown, transport};
use eyre::{Result, ensure, eyre};
use rstest::rstest;
use vitrine::render::{
    adapters::memory::{DeliveryEvent, InMemoryTransport},
    domain::{Emoji, PromptSubmission, RenderDescriptor},
    services::{Deliverable, NavigationControl, PaginatedSession, Runner, SessionError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn browsing_edits_one_output_in_place(transport: InMemoryTransport) -> Result<()> {
    let mut session = PaginatedSession::new(numbered_pages(4), 0)?;
    let first = session.run(&transport.interaction(CHANNEL)?).await?;
    let next = NavigationControl::Next.control_id(session.id());

    for _ in 0..3 {
        session
            .handle_activation(&next, &activation(&transport, &session)?)
            .await?;
    }

    let stored = shown(&transport, &session)?;
    ensure!(stored.content.as_deref() == Some("entry 4"), "last page should be shown");
    ensure!(transport.edit_count()? == 3, "each click should edit once");
    ensure!(
        session.output().map(|live| live.id()) == Some(first.id()),
        "navigation must not create new outputs"
    );
    let indicator = stored
        .controls
        .and_then(|surface| {
            surface
                .find(&NavigationControl::PageIndicator.control_id(session.id()))
                .map(|control| control.label.clone())
        })
        .ok_or_else(|| eyre!("page indicator should be present"))?;
    ensure!(indicator == "4/4", "indicator should read 4/4, got {indicator}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_prompt_round_trip_jumps_to_typed_page(transport: InMemoryTransport) -> Result<()> {
    let mut session = PaginatedSession::new(numbered_pages(5), 0)?;
    session.run(&transport.interaction(CHANNEL)?).await?;
    let indicator = NavigationControl::PageIndicator.control_id(session.id());

    session
        .handle_activation(&indicator, &activation(&transport, &session)?)
        .await?;
    let prompt = transport
        .events()?
        .into_iter()
        .find_map(|event| match event {
            DeliveryEvent::Prompted { prompt, .. } => Some(prompt),
            _ => None,
        })
        .ok_or_else(|| eyre!("page indicator should send a prompt"))?;
    ensure!(session.owns_control(&prompt.custom_id), "prompt should route back");
    let field = prompt
        .fields
        .first()
        .ok_or_else(|| eyre!("prompt should carry a page field"))?;
    let submission =
        PromptSubmission::new(prompt.custom_id.clone()).with_value(field.custom_id.clone(), "4");

    session
        .handle_submission(&submission, &activation(&transport, &session)?)
        .await?;

    ensure!(session.current_index() == 3, "page 4 is index 3");
    ensure!(
        shown(&transport, &session)?.content.as_deref() == Some("entry 4"),
        "typed page should be shown"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn out_of_range_submission_leaves_page_unchanged(
    transport: InMemoryTransport,
) -> Result<()> {
    let mut session = PaginatedSession::new(numbered_pages(2), 1)?;
    session.run(&transport.interaction(CHANNEL)?).await?;

    let result = session
        .submit_page_number("9", &activation(&transport, &session)?)
        .await;

    ensure!(
        matches!(result, Err(SessionError::PageOutOfRange { requested: 9, page_count: 2 })),
        "expected page out of range, got {result:?}"
    );
    ensure!(session.current_index() == 1, "index should be unchanged");
    ensure!(
        shown(&transport, &session)?.content.as_deref() == Some("entry 2"),
        "shown page should be unchanged"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn page_reactions_are_added_on_every_edit(transport: InMemoryTransport) -> Result<()> {
    let pages = vec![
        RenderDescriptor::text("one").with_emojis([Emoji::unicode("1️⃣")]),
        RenderDescriptor::text("two").with_emojis([Emoji::unicode("2️⃣")]),
    ];
    let mut session = PaginatedSession::new(pages, 0)?;
    session.run(&transport.interaction(CHANNEL)?).await?;

    session
        .jump_to_page(2, &activation(&transport, &session)?)
        .await?;

    let reactions = shown(&transport, &session)?.reactions;
    ensure!(
        reactions == vec![Emoji::unicode("1️⃣"), Emoji::unicode("2️⃣")],
        "unexpected reactions {reactions:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn destroyed_session_removes_its_output(transport: InMemoryTransport) -> Result<()> {
    let mut session = PaginatedSession::new(numbered_pages(3), 0)?;
    let output = session.run(&transport.interaction(CHANNEL)?).await?;

    session.destroy().await?;

    ensure!(session.output().is_none(), "session should forget its output");
    ensure!(transport.output(output.id())?.is_none(), "output should be deleted");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reply_then_edit_uses_distinct_mechanisms(transport: InMemoryTransport) -> Result<()> {
    let question = RenderDescriptor::text("which page?")
        .deliver(&transport.channel(CHANNEL))
        .await?;
    let answer = RenderDescriptor::text("page 1")
        .deliver_as_reply(question.as_ref())
        .await?;

    RenderDescriptor::text("page 2")
        .edit_existing(answer.as_ref())
        .await?;

    let events = transport.events()?;
    ensure!(
        matches!(
            events.as_slice(),
            [
                DeliveryEvent::Sent { .. },
                DeliveryEvent::Replied { .. },
                DeliveryEvent::Edited { .. }
            ]
        ),
        "unexpected delivery sequence {events:?}"
    );
    Ok(())
}
