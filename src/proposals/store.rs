//! Proposal State Store.
//!
//! Owns the authoritative in-memory proposal collection and every mutation
//! to it: explicit votes and the simulated live update loop.
//!
//! The store is a cheap `Clone` handle. The update loop only holds a weak
//! reference, so dropping the last handle tears the loop down with it.

use super::metrics::ProposalMetrics;
use super::search::{search, SearchFilters};
use super::seed::initial_proposals;
use super::types::{Proposal, ProposalStatus, VoteChoice};
use super::updater::{apply_tick, UpdateLoop, DEFAULT_UPDATE_PERIOD};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info, warn};

/// Weight applied by a vote when the caller does not supply one.
pub const DEFAULT_VOTE_WEIGHT: u64 = 100;

/// Default simulated chain latency for a vote.
pub const DEFAULT_VOTE_DELAY: Duration = Duration::from_secs(2);

/// Simulated delays used by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProposalTiming {
    /// Latency before a vote is applied.
    pub vote_delay: Duration,
    /// Period of the live update loop.
    pub update_period: Duration,
}

impl Default for ProposalTiming {
    fn default() -> Self {
        Self {
            vote_delay: DEFAULT_VOTE_DELAY,
            update_period: DEFAULT_UPDATE_PERIOD,
        }
    }
}

/// In-memory proposal store.
#[derive(Clone)]
pub struct ProposalStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    proposals: RwLock<Vec<Proposal>>,
    rng: Mutex<Box<dyn RngCore + Send>>,
    /// Votes currently suspended in their delay.
    in_flight_votes: AtomicUsize,
    timing: ProposalTiming,
    updater: Mutex<Option<UpdateLoop>>,
    /// Count of ticks applied so far.
    ticks: watch::Sender<u64>,
}

impl StoreInner {
    async fn tick(&self) -> usize {
        let touched = {
            let mut proposals = self.proposals.write().await;
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            apply_tick(&mut proposals, &mut *rng)
        };
        self.ticks.send_modify(|count| *count += 1);
        debug!(touched, "applied simulated vote update");
        touched
    }
}

/// Keeps the loading counter raised while a vote is pending.
struct LoadingGuard<'a>(&'a AtomicUsize);

impl<'a> LoadingGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl ProposalStore {
    /// Store seeded with the dashboard proposals and an entropy-seeded RNG.
    pub fn new(timing: ProposalTiming) -> Self {
        Self::with_proposals(initial_proposals(), StdRng::from_entropy(), timing)
    }

    /// Store seeded with the dashboard proposals and a reproducible RNG.
    pub fn seeded(seed: u64, timing: ProposalTiming) -> Self {
        Self::with_proposals(initial_proposals(), StdRng::seed_from_u64(seed), timing)
    }

    /// Store over an explicit collection and random source.
    pub fn with_proposals(
        proposals: Vec<Proposal>,
        rng: impl RngCore + Send + 'static,
        timing: ProposalTiming,
    ) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                proposals: RwLock::new(proposals),
                rng: Mutex::new(Box::new(rng)),
                in_flight_votes: AtomicUsize::new(0),
                timing,
                updater: Mutex::new(None),
                ticks: watch::channel(0).0,
            }),
        }
    }

    pub fn timing(&self) -> ProposalTiming {
        self.inner.timing
    }

    /// Snapshot of every proposal, in insertion order.
    pub async fn list_proposals(&self) -> Vec<Proposal> {
        self.inner.proposals.read().await.clone()
    }

    pub async fn get_proposal_by_id(&self, id: &str) -> Option<Proposal> {
        let proposals = self.inner.proposals.read().await;
        proposals.iter().find(|p| p.id == id).cloned()
    }

    pub async fn get_proposals_by_status(&self, status: ProposalStatus) -> Vec<Proposal> {
        let proposals = self.inner.proposals.read().await;
        proposals
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    pub async fn get_proposals_by_dao(&self, dao: &str) -> Vec<Proposal> {
        let proposals = self.inner.proposals.read().await;
        proposals.iter().filter(|p| p.dao == dao).cloned().collect()
    }

    /// Filtered and sorted view of the current collection.
    pub async fn search(&self, filters: &SearchFilters) -> Vec<Proposal> {
        let proposals = self.inner.proposals.read().await;
        search(&proposals, filters)
    }

    /// Aggregates over the current collection.
    pub async fn metrics(&self) -> ProposalMetrics {
        let proposals = self.inner.proposals.read().await;
        ProposalMetrics::from_proposals(&proposals)
    }

    /// Cast a vote after the simulated chain latency.
    ///
    /// Returns `false` and leaves the collection untouched when `id` is
    /// unknown. Status is not checked: any proposal can receive votes.
    pub async fn vote_on_proposal(&self, id: &str, choice: VoteChoice, weight: u64) -> bool {
        let _loading = LoadingGuard::enter(&self.inner.in_flight_votes);

        tokio::time::sleep(self.inner.timing.vote_delay).await;

        let mut proposals = self.inner.proposals.write().await;
        match proposals.iter_mut().find(|p| p.id == id) {
            Some(proposal) => {
                proposal.votes.add(choice, weight);
                info!(proposal = %id, %choice, weight, "vote applied");
                true
            }
            None => {
                debug!(proposal = %id, "vote ignored: unknown proposal");
                false
            }
        }
    }

    /// True while at least one vote is waiting out its delay.
    pub fn is_loading(&self) -> bool {
        self.inner.in_flight_votes.load(Ordering::SeqCst) > 0
    }

    /// Apply one update-loop step immediately. Returns proposals touched.
    pub async fn tick(&self) -> usize {
        self.inner.tick().await
    }

    /// Receiver that changes after every tick, carrying the tick count.
    pub fn subscribe_ticks(&self) -> watch::Receiver<u64> {
        self.inner.ticks.subscribe()
    }

    /// Start the live update loop. Returns `false` if already running or
    /// if the configured update period is zero.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_updates(&self) -> bool {
        let period = self.inner.timing.update_period;
        if period.is_zero() {
            warn!("live vote updates not started: update period is zero");
            return false;
        }

        let mut updater = self
            .inner
            .updater
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if updater.as_ref().is_some_and(UpdateLoop::is_running) {
            return false;
        }

        let weak: Weak<StoreInner> = Arc::downgrade(&self.inner);
        *updater = Some(UpdateLoop::spawn(period, move || {
            let weak = weak.clone();
            async move {
                if let Some(inner) = weak.upgrade() {
                    inner.tick().await;
                }
            }
        }));

        info!(period = ?period, "live vote updates started");
        true
    }

    /// Stop the live update loop. No-op if it is not running.
    pub fn stop_updates(&self) {
        let stopped = self
            .inner
            .updater
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(update_loop) = stopped {
            update_loop.stop();
            info!("live vote updates stopped");
        }
    }

    pub fn is_updating(&self) -> bool {
        self.inner
            .updater
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(UpdateLoop::is_running)
    }

    /// Tear the store down. Stops the update loop; data stays readable.
    pub fn dispose(&self) {
        self.stop_updates();
    }
}
