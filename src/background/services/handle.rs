//! A long-lived runner bound to a channel and a countdown.

use crate::background::domain::{Countdown, CountdownState, HandleId};
use crate::render::{
    ports::Messageable,
    services::{Runner, SessionError},
};
use std::sync::Arc;
use std::time::Duration;

/// Result of ticking a [`BackgroundHandle`].
#[derive(Debug)]
pub enum TickOutcome {
    /// The handle has time left and stays registered.
    Active,
    /// The countdown lapsed and the runner was destroyed.
    Expired {
        /// Set when destroying the runner failed.
        destroy_error: Option<SessionError>,
    },
}

impl TickOutcome {
    /// Returns `true` when the handle stays registered.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// A runner that is torn down once its countdown lapses.
#[derive(Debug)]
pub struct BackgroundHandle {
    id: HandleId,
    channel: Arc<dyn Messageable>,
    countdown: Countdown,
    runner: Box<dyn Runner>,
    destroyed: bool,
}

impl BackgroundHandle {
    /// Binds `runner` to `channel` with the given countdown.
    #[must_use]
    pub fn new(
        channel: Arc<dyn Messageable>,
        runner: Box<dyn Runner>,
        countdown: Countdown,
    ) -> Self {
        Self {
            id: HandleId::new(),
            channel,
            countdown,
            runner,
            destroyed: false,
        }
    }

    /// Returns the handle identifier.
    #[must_use]
    pub const fn id(&self) -> HandleId {
        self.id
    }

    /// Returns the channel the handle is bound to.
    #[must_use]
    pub fn channel(&self) -> &dyn Messageable {
        self.channel.as_ref()
    }

    /// Returns the countdown.
    #[must_use]
    pub const fn countdown(&self) -> Countdown {
        self.countdown
    }

    /// Returns the bound runner.
    #[must_use]
    pub fn runner(&self) -> &dyn Runner {
        self.runner.as_ref()
    }

    /// Returns the bound runner mutably, e.g. to route interactions to it.
    pub fn runner_mut(&mut self) -> &mut dyn Runner {
        self.runner.as_mut()
    }

    /// Advances the countdown by `elapsed`.
    ///
    /// When the countdown lapses the runner is destroyed. The runner is
    /// destroyed at most once; later ticks report `Expired` without touching
    /// it again. A destroy failure is reported in the outcome, never retried.
    /// A tick dropped while the runner is being destroyed leaves the handle
    /// undestroyed, and the next tick destroys it.
    pub async fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.destroyed {
            return TickOutcome::Expired {
                destroy_error: None,
            };
        }
        match self.countdown.tick(elapsed) {
            CountdownState::Running => TickOutcome::Active,
            CountdownState::Lapsed => {
                let destroy_error = self.runner.destroy().await.err();
                self.destroyed = true;
                TickOutcome::Expired { destroy_error }
            }
        }
    }
}
