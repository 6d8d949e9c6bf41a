//! Aggregate figures for the dashboard overview.

use super::types::{Proposal, ProposalStatus};
use serde::Serialize;

/// Summary over a proposal collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalMetrics {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub completed: usize,
    pub failed: usize,
    /// Sum of yes and no votes across all proposals.
    pub total_votes: u64,
    /// Mean yes share over proposals that have at least one vote.
    pub average_yes_percentage: f64,
    pub average_ai_score: f64,
}

impl ProposalMetrics {
    pub fn from_proposals(proposals: &[Proposal]) -> Self {
        let count = |status: ProposalStatus| proposals.iter().filter(|p| p.status == status).count();

        let total_votes = proposals
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(p.votes.total()));

        let voted: Vec<f64> = proposals
            .iter()
            .filter(|p| p.votes.total() > 0)
            .map(|p| p.votes.yes_percentage())
            .collect();

        let average_ai_score = if proposals.is_empty() {
            0.0
        } else {
            proposals.iter().map(|p| f64::from(p.ai_score)).sum::<f64>() / proposals.len() as f64
        };

        Self {
            total: proposals.len(),
            active: count(ProposalStatus::Active),
            pending: count(ProposalStatus::Pending),
            completed: count(ProposalStatus::Completed),
            failed: count(ProposalStatus::Failed),
            total_votes,
            average_yes_percentage: mean(&voted),
            average_ai_score,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
