//! Proposal State Store.
//!
//! - Fixed seed set, no persistence
//! - Read accessors preserve insertion order
//! - Votes apply after a simulated chain delay
//! - Live update loop perturbs `Active` tallies only

pub mod metrics;
pub mod search;
pub mod seed;
pub mod store;
pub mod types;
pub mod updater;

#[cfg(test)]
mod proptests;

pub use metrics::ProposalMetrics;
pub use search::{search, SearchFilters, SortKey, SortOrder};
pub use seed::initial_proposals;
pub use store::{ProposalStore, ProposalTiming, DEFAULT_VOTE_WEIGHT};
pub use types::{Proposal, ProposalStatus, VoteChoice, Votes};
pub use updater::{apply_tick, UpdateLoop};
