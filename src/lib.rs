//! daoscope - DAO Governance Dashboard State
//!
//! In-memory state layer behind a DAO governance dashboard:
//! - Proposal store seeded from a fixed set, with a simulated live vote feed
//! - Mock wallet session persisted to local key-value storage
//! - Side-by-side DAO comparison over a fixed registry
//! - No chain, no network, no real AI (scores are display values)

pub mod daos;
pub mod notify;
pub mod proposals;
pub mod wallet;
