//! End-to-end expiry of sessions registered as background handles.

use crate::in_memory::helpers::{CHANNEL, numbered_pages, transport};
use eyre::{Result, ensure};
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;
use std::time::Duration;
use vitrine::background::{
    domain::Countdown,
    services::{BackgroundHandle, HandleRegistry, RegistryConfig},
};
use vitrine::render::{
    adapters::memory::{DeliveryEvent, InMemoryTransport},
    domain::{ChannelId, RenderDescriptor},
    ports::Messageable,
    services::{PaginatedSession, RenderSession},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn lapsed_session_output_is_deleted_by_sweep(transport: InMemoryTransport) -> Result<()> {
    let mut registry = HandleRegistry::new(RegistryConfig::default(), Arc::new(DefaultClock));
    let channel: Arc<dyn Messageable> = Arc::new(transport.channel(CHANNEL));
    let mut handle = BackgroundHandle::new(
        channel,
        Box::new(PaginatedSession::new(numbered_pages(3), 0)?),
        Countdown::finite(Duration::from_secs(5 * 60)),
    );
    let output = handle
        .runner_mut()
        .run(&transport.interaction(CHANNEL)?)
        .await?;
    let id = registry.register(handle)?;

    let first = registry.sweep().await;
    ensure!(first.retained == 1, "handle should survive the first sweep");
    ensure!(transport.output(output.id())?.is_some(), "output should still exist");

    let second = registry.sweep().await;
    ensure!(second.expired == vec![id], "handle should expire on the second sweep");
    ensure!(transport.output(output.id())?.is_none(), "output should be deleted");
    ensure!(
        transport
            .events()?
            .iter()
            .any(|event| matches!(event, DeliveryEvent::Deleted { output_id } if *output_id == output.id())),
        "deletion should be recorded"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sessions_in_separate_channels_expire_independently(
    transport: InMemoryTransport,
) -> Result<()> {
    let mut registry = HandleRegistry::new(RegistryConfig::default(), Arc::new(DefaultClock));
    let mut outputs = Vec::new();
    for (channel_id, ttl) in [(1_u64, 60_u64), (2, 600)] {
        let channel = ChannelId::new(channel_id);
        let mut handle = BackgroundHandle::new(
            Arc::new(transport.channel(channel)),
            Box::new(RenderSession::new(RenderDescriptor::text("status"))),
            Countdown::finite(Duration::from_secs(ttl)),
        );
        let output = handle
            .runner_mut()
            .run(&transport.interaction(channel)?)
            .await?;
        registry.register(handle)?;
        outputs.push(output.id());
    }

    let report = registry.sweep().await;

    ensure!(report.expired.len() == 1, "only the short-lived handle expires");
    ensure!(report.retained == 1, "the long-lived handle is retained");
    let remaining: Vec<bool> = outputs
        .iter()
        .map(|output_id| transport.output(*output_id).map(|stored| stored.is_some()))
        .collect::<Result<_, _>>()?;
    ensure!(remaining == vec![false, true], "unexpected outputs {remaining:?}");
    let summary = registry.summaries();
    ensure!(
        summary.first().map(|handle| handle.channel_id) == Some(ChannelId::new(2)),
        "the retained handle is bound to channel 2"
    );
    Ok(())
}
