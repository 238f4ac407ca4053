//! Shared fixtures and helpers for background tests.

use crate::render::{
    adapters::memory::InMemoryTransport,
    domain::{ChannelId, RenderDescriptor},
    ports::{DeliveryError, Interaction, Messageable, OutputHandle},
    services::{RenderSession, Runner, SessionError, SessionResult},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[fixture]
pub fn transport() -> InMemoryTransport {
    InMemoryTransport::new()
}

#[fixture]
pub fn clock() -> Arc<DefaultClock> {
    Arc::new(DefaultClock)
}

/// Runner wrapping a render session that counts destroy calls.
#[derive(Debug)]
pub struct CountingRunner {
    inner: RenderSession,
    destroys: Arc<AtomicUsize>,
    fail_destroy: bool,
    destroy_delay: Duration,
}

impl CountingRunner {
    pub fn new() -> Self {
        Self {
            inner: RenderSession::new(RenderDescriptor::text("background")),
            destroys: Arc::new(AtomicUsize::new(0)),
            fail_destroy: false,
            destroy_delay: Duration::ZERO,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_destroy: true,
            ..Self::new()
        }
    }

    /// Runner whose destroy waits `delay` before deleting its output.
    pub fn stalling(delay: Duration) -> Self {
        Self {
            destroy_delay: delay,
            ..Self::new()
        }
    }

    /// Shared counter that outlives the runner once it is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.destroys)
    }
}

#[async_trait]
impl Runner for CountingRunner {
    async fn run(&mut self, interaction: &dyn Interaction) -> SessionResult<OutputHandle> {
        self.inner.run(interaction).await
    }

    async fn destroy(&mut self) -> SessionResult<()> {
        self.destroys.fetch_add(1, Ordering::SeqCst);
        if !self.destroy_delay.is_zero() {
            tokio::time::sleep(self.destroy_delay).await;
        }
        if self.fail_destroy {
            return Err(SessionError::Delivery(DeliveryError::Rejected(
                "destroy refused".to_owned(),
            )));
        }
        self.inner.destroy().await
    }
}

pub fn channel(transport: &InMemoryTransport, id: u64) -> Arc<dyn Messageable> {
    Arc::new(transport.channel(ChannelId::new(id)))
}

pub fn destroy_count(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
