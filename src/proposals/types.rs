//! Proposal data model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a proposal.
///
/// Only `Active` proposals receive simulated votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProposalStatus {
    Active,
    Pending,
    Completed,
    Failed,
}

impl ProposalStatus {
    pub const ALL: [ProposalStatus; 4] = [
        ProposalStatus::Active,
        ProposalStatus::Pending,
        ProposalStatus::Completed,
        ProposalStatus::Failed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProposalStatus::Active => "Active",
            ProposalStatus::Pending => "Pending",
            ProposalStatus::Completed => "Completed",
            ProposalStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProposalStatus::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown proposal status '{}'", s))
    }
}

/// Side of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteChoice::Yes => f.write_str("yes"),
            VoteChoice::No => f.write_str("no"),
        }
    }
}

impl FromStr for VoteChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yes" => Ok(VoteChoice::Yes),
            "no" => Ok(VoteChoice::No),
            _ => Err(format!("Invalid vote '{}': expected 'yes' or 'no'", s)),
        }
    }
}

/// Yes/no tallies. Unsigned, so never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Votes {
    pub yes: u64,
    pub no: u64,
}

impl Votes {
    pub fn new(yes: u64, no: u64) -> Self {
        Self { yes, no }
    }

    pub fn total(&self) -> u64 {
        self.yes.saturating_add(self.no)
    }

    /// Share of yes votes in percent, `0.0` when nobody has voted.
    pub fn yes_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.yes as f64 / total as f64 * 100.0
    }

    /// Add `weight` to one side. Saturates at `u64::MAX`.
    pub fn add(&mut self, choice: VoteChoice, weight: u64) {
        match choice {
            VoteChoice::Yes => self.yes = self.yes.saturating_add(weight),
            VoteChoice::No => self.no = self.no.saturating_add(weight),
        }
    }
}

/// A votable governance item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub dao: String,
    pub status: ProposalStatus,
    pub votes: Votes,
    /// Display string ("2 days", "Ended"), not a countdown.
    pub time_left: String,
    pub description: String,
    /// Decorative 0..=100 score.
    pub ai_score: u8,
    pub category: String,
    /// ISO date (YYYY-MM-DD).
    pub created_at: String,
}

impl Proposal {
    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }
}
