//! Simulated live vote feed.
//!
//! Every period, each `Active` proposal receives a random number of extra
//! votes on one side. The step itself ([`apply_tick`]) is a pure function
//! over the collection and an RNG so it can be driven directly in tests;
//! [`UpdateLoop`] owns the background task that calls it on a timer.

use super::types::{Proposal, VoteChoice};
use rand::Rng;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Upper bound (exclusive) of the per-tick vote increment.
pub const MAX_TICK_INCREMENT: u64 = 50;

/// Probability that a tick's increment goes to the yes side.
pub const YES_PROBABILITY: f64 = 0.6;

/// Default period between ticks.
pub const DEFAULT_UPDATE_PERIOD: Duration = Duration::from_secs(30);

/// Apply one simulated update step.
///
/// For each active proposal, in order, draws the increment (`0..50`) and
/// then the side (`yes` with probability 0.6). Non-active proposals draw
/// nothing. Returns the number of proposals touched.
pub fn apply_tick<R: Rng + ?Sized>(proposals: &mut [Proposal], rng: &mut R) -> usize {
    let mut touched = 0;

    for proposal in proposals.iter_mut().filter(|p| p.is_active()) {
        let increment = rng.gen_range(0..MAX_TICK_INCREMENT);
        let choice = if rng.gen_bool(YES_PROBABILITY) {
            VoteChoice::Yes
        } else {
            VoteChoice::No
        };
        proposal.votes.add(choice, increment);
        touched += 1;
    }

    touched
}

/// Handle to a running update loop.
///
/// The first tick fires one full period after spawn. Dropping the handle
/// cancels the task.
pub struct UpdateLoop {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
    period: Duration,
}

impl UpdateLoop {
    /// Spawn the loop on the current tokio runtime.
    ///
    /// `on_tick` is invoked once per period until [`UpdateLoop::stop`] is
    /// called or the handle is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn spawn<F, Fut>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        assert!(!period.is_zero(), "update period must be non-zero");

        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => on_tick().await,
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            tracing::debug!("update loop stopped");
        });

        Self {
            shutdown,
            handle,
            period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Signal shutdown and cancel the task.
    pub fn stop(&self) {
        let _ = self.shutdown.send(true);
        self.handle.abort();
    }
}

impl Drop for UpdateLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
