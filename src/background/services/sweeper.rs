//! Tokio driver that sweeps a registry on its configured interval.

use super::{HandleRegistry, RegistryError};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawns a task that calls [`HandleRegistry::sweep`] once per
/// `sweep_interval`, starting one interval from now.
///
/// The task runs until aborted through the returned handle.
///
/// # Errors
///
/// Returns [`RegistryError::ZeroSweepInterval`] when the configured interval
/// is zero.
pub async fn spawn_sweeper<C>(
    registry: Arc<Mutex<HandleRegistry<C>>>,
) -> Result<JoinHandle<()>, RegistryError>
where
    C: Clock + Send + Sync + 'static,
{
    let period = registry.lock().await.config().sweep_interval;
    if period.is_zero() {
        return Err(RegistryError::ZeroSweepInterval);
    }

    Ok(tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // Skip the first immediate tick
        loop {
            interval.tick().await;
            let report = registry.lock().await.sweep().await;
            debug!(
                retained = report.retained,
                expired = report.expired.len(),
                "background sweep finished"
            );
        }
    }))
}
