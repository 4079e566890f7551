//! Janitor Task
//!
//! Background task that periodically removes stale entries from an
//! [`ExpiringStore`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{CacheConfig, ExpiringStore, SweepMode};

/// Shortest period the janitor will tick at. `tokio::time::interval` rejects
/// a zero period.
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

// == Janitor ==
/// Handle to a running janitor task.
///
/// The task is stopped by [`Janitor::shutdown`], or aborted when the handle
/// is dropped, so it never outlives the cache that owns it.
#[derive(Debug)]
pub struct Janitor {
    handle: Option<JoinHandle<()>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl Janitor {
    /// Spawns a janitor sweeping `store` according to `config`.
    ///
    /// The first sweep happens one full `sweep_interval` after spawning.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(store: Arc<ExpiringStore>, config: &CacheConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(run(store, config.clone(), shutdown_rx));

        Self {
            handle: Some(handle),
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Returns true while the background task is still alive.
    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Shutdown ==
    /// Signals the task to stop and waits for it to exit.
    ///
    /// A sweep already in progress completes first.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // The task may already have exited (single-sweep mode).
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Janitor {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

// == Sweep Loop ==
async fn run(
    store: Arc<ExpiringStore>,
    config: CacheConfig,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let period = config.sweep_interval.max(MIN_SWEEP_INTERVAL);
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Starting cache janitor: ttl={:?}, sweep_interval={:?}, mode={:?}",
        config.ttl, period, config.mode
    );

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => {
                debug!("Cache janitor received shutdown signal");
                break;
            }
            _ = ticker.tick() => {
                let removed = store.sweep(config.ttl);
                if removed > 0 {
                    info!("Cache sweep: removed {} stale entries", removed);
                } else {
                    debug!("Cache sweep: no stale entries found");
                }

                if config.mode == SweepMode::Once {
                    debug!("Cache janitor finished its single sweep");
                    break;
                }
            }
        }
    }
}
