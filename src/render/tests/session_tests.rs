//! Tests for single-response render sessions.

use crate::render::{
    adapters::memory::{DeliveryEvent, InMemoryTransport, Operation},
    domain::{ChannelId, RenderDescriptor},
    ports::DeliveryError,
    services::{RenderSession, Runner, SessionError},
};
use eyre::Result;
use rstest::{fixture, rstest};

const CHANNEL: ChannelId = ChannelId::new(200);

#[fixture]
fn transport() -> InMemoryTransport {
    InMemoryTransport::new()
}

#[fixture]
fn session() -> RenderSession {
    RenderSession::new(RenderDescriptor::text("status"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_acknowledges_and_records_output(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    let interaction = transport.interaction(CHANNEL)?;

    let output = session.run(&interaction).await?;

    assert!(session.is_live());
    assert_eq!(session.output().map(|live| live.id()), Some(output.id()));
    assert!(transport.output(output.id())?.is_some());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_run_is_rejected_without_delivery(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    let first = session.run(&transport.interaction(CHANNEL)?).await?;

    let second = session.run(&transport.interaction(CHANNEL)?).await;

    assert!(matches!(second, Err(SessionError::DuplicateDispatch(id)) if id == session.id()));
    assert_eq!(session.output().map(|live| live.id()), Some(first.id()));
    assert_eq!(transport.events()?.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_run_leaves_session_undispatched(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    transport.fail(Operation::InteractionSend)?;

    let result = session.run(&transport.interaction(CHANNEL)?).await;

    assert!(matches!(
        result,
        Err(SessionError::Delivery(DeliveryError::Rejected(_)))
    ));
    assert!(!session.is_live());

    transport.recover(Operation::InteractionSend)?;
    session.run(&transport.interaction(CHANNEL)?).await?;
    assert!(session.is_live());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn destroy_deletes_output_once(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    let output = session.run(&transport.interaction(CHANNEL)?).await?;

    session.destroy().await?;
    session.destroy().await?;

    assert!(!session.is_live());
    assert!(transport.output(output.id())?.is_none());
    let deletions = transport
        .events()?
        .iter()
        .filter(|event| matches!(event, DeliveryEvent::Deleted { .. }))
        .count();
    assert_eq!(deletions, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn destroy_before_run_is_a_no_op(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    session.destroy().await?;

    assert!(!session.is_live());
    assert!(transport.events()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_destroy_keeps_output_reference(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    let output = session.run(&transport.interaction(CHANNEL)?).await?;
    transport.fail(Operation::Delete)?;

    let result = session.destroy().await;

    assert!(matches!(result, Err(SessionError::Delivery(_))));
    assert_eq!(session.output().map(|live| live.id()), Some(output.id()));

    transport.recover(Operation::Delete)?;
    session.destroy().await?;
    assert!(!session.is_live());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn run_after_destroy_is_rejected(
    transport: InMemoryTransport,
    mut session: RenderSession,
) -> Result<()> {
    session.run(&transport.interaction(CHANNEL)?).await?;
    session.destroy().await?;
    let events_after_destroy = transport.events()?.len();

    let again = session.run(&transport.interaction(CHANNEL)?).await;

    assert!(matches!(again, Err(SessionError::DuplicateDispatch(id)) if id == session.id()));
    assert!(session.is_dispatched());
    assert!(!session.is_live());
    assert_eq!(transport.events()?.len(), events_after_destroy);
    Ok(())
}
