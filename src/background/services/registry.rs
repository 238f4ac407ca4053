//! Registry of live background handles and its periodic sweep.

use super::{BackgroundHandle, TickOutcome};
use crate::background::domain::HandleId;
use crate::render::domain::ChannelId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Registry configuration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use vitrine::background::services::RegistryConfig;
///
/// let config = RegistryConfig::default();
/// assert_eq!(config.sweep_interval, Duration::from_secs(180));
/// assert!(!config.allow_duplicates);
///
/// let permissive = RegistryConfig::permissive();
/// assert!(permissive.allow_duplicates);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Elapsed time applied to every handle on each sweep.
    pub sweep_interval: Duration,
    /// Whether one channel may hold several live handles.
    pub allow_duplicates: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(3 * 60),
            allow_duplicates: false,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that allows several handles per channel.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            allow_duplicates: true,
            ..Self::default()
        }
    }

    /// Sets the sweep interval.
    #[must_use]
    pub const fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = sweep_interval;
        self
    }
}

/// Errors returned by registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The channel already has a live handle and duplicates are disallowed.
    #[error("channel {0} already has a live background handle")]
    DuplicateChannel(ChannelId),

    /// A periodic sweeper cannot run with a zero interval.
    #[error("sweep interval must be greater than zero")]
    ZeroSweepInterval,
}

/// Outcome of one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// When the sweep ran, per the registry clock.
    pub swept_at: DateTime<Utc>,
    /// Elapsed time applied to every handle.
    pub elapsed: Duration,
    /// Handles still registered after the sweep.
    pub retained: usize,
    /// Handles removed by the sweep.
    pub expired: Vec<HandleId>,
    /// Removed handles whose runner failed to destroy.
    pub failed_destroys: Vec<HandleId>,
}

/// Read-only view of a registered handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleSummary {
    /// Handle identifier.
    pub id: HandleId,
    /// Bound channel.
    pub channel_id: ChannelId,
    /// Time left, or `None` when the handle never expires.
    pub remaining: Option<Duration>,
    /// Registration time, per the registry clock.
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug)]
struct RegisteredHandle {
    handle: BackgroundHandle,
    registered_at: DateTime<Utc>,
}

/// Owns live background handles and expires them on a fixed cadence.
///
/// The sweep is the only way a handle leaves the registry. An external
/// scheduler (or [`super::spawn_sweeper`]) calls [`HandleRegistry::sweep`]
/// once per [`RegistryConfig::sweep_interval`].
#[derive(Debug)]
pub struct HandleRegistry<C>
where
    C: Clock + Send + Sync,
{
    config: RegistryConfig,
    clock: Arc<C>,
    entries: Vec<RegisteredHandle>,
}

impl<C> HandleRegistry<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty registry.
    #[must_use]
    pub const fn new(config: RegistryConfig, clock: Arc<C>) -> Self {
        Self {
            config,
            clock,
            entries: Vec::new(),
        }
    }

    /// Returns the registry configuration.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the number of live handles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no handles are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` while the handle is registered.
    #[must_use]
    pub fn contains(&self, handle_id: HandleId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.handle.id() == handle_id)
    }

    /// Returns a summary of every live handle in registration order.
    #[must_use]
    pub fn summaries(&self) -> Vec<HandleSummary> {
        self.entries
            .iter()
            .map(|entry| HandleSummary {
                id: entry.handle.id(),
                channel_id: entry.handle.channel().channel_id(),
                remaining: entry.handle.countdown().remaining(),
                registered_at: entry.registered_at,
            })
            .collect()
    }

    /// Returns a registered handle mutably.
    pub fn get_mut(&mut self, handle_id: HandleId) -> Option<&mut BackgroundHandle> {
        self.entries
            .iter_mut()
            .find(|entry| entry.handle.id() == handle_id)
            .map(|entry| &mut entry.handle)
    }

    /// Registers a handle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateChannel`] when duplicates are
    /// disallowed and the handle's channel already has a live handle.
    pub fn register(&mut self, handle: BackgroundHandle) -> Result<HandleId, RegistryError> {
        let channel_id = handle.channel().channel_id();
        if !self.config.allow_duplicates
            && self
                .entries
                .iter()
                .any(|entry| entry.handle.channel().channel_id() == channel_id)
        {
            return Err(RegistryError::DuplicateChannel(channel_id));
        }

        let handle_id = handle.id();
        self.entries.push(RegisteredHandle {
            handle,
            registered_at: self.clock.utc(),
        });
        Ok(handle_id)
    }

    /// Ticks every handle by the configured sweep interval and removes the
    /// expired ones.
    pub async fn sweep(&mut self) -> SweepReport {
        let elapsed = self.config.sweep_interval;
        self.sweep_elapsed(elapsed).await
    }

    /// Ticks every handle by `elapsed` and removes the expired ones.
    ///
    /// Handles are ticked in registration order. A runner that fails to
    /// destroy is logged and its handle is still removed. Handles stay in
    /// the registry until their tick completes, so dropping a sweep midway
    /// leaves every unfinished handle registered for the next one.
    pub async fn sweep_elapsed(&mut self, elapsed: Duration) -> SweepReport {
        let mut expired = Vec::new();
        let mut failed_destroys = Vec::new();

        let mut index = 0;
        while let Some(entry) = self.entries.get_mut(index) {
            match entry.handle.tick(elapsed).await {
                TickOutcome::Active => index += 1,
                TickOutcome::Expired { destroy_error } => {
                    let handle_id = self.entries.remove(index).handle.id();
                    if let Some(err) = destroy_error {
                        warn!(
                            handle_id = %handle_id,
                            error = %err,
                            "failed to destroy expired background handle; removing it anyway"
                        );
                        failed_destroys.push(handle_id);
                    }
                    expired.push(handle_id);
                }
            }
        }

        if !expired.is_empty() {
            info!(
                expired = expired.len(),
                retained = self.entries.len(),
                "expired background handles"
            );
        }

        SweepReport {
            swept_at: self.clock.utc(),
            elapsed,
            retained: self.entries.len(),
            expired,
            failed_destroys,
        }
    }
}
