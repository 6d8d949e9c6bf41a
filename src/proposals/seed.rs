//! Fixed proposal set every store starts from.

use super::types::{Proposal, ProposalStatus, Votes};

struct SeedRow {
    id: &'static str,
    title: &'static str,
    dao: &'static str,
    status: ProposalStatus,
    votes: (u64, u64),
    time_left: &'static str,
    description: &'static str,
    ai_score: u8,
    category: &'static str,
    created_at: &'static str,
}

const SEED: &[SeedRow] = &[
    SeedRow {
        id: "1",
        title: "Increase Validator Commission Cap to 15%",
        dao: "Solana Foundation",
        status: ProposalStatus::Active,
        votes: (12500, 3200),
        time_left: "2 days",
        description: "Proposal to increase the validator commission cap from 10% to 15% to \
                      improve network security and validator participation. This change will \
                      help maintain a healthy validator ecosystem by ensuring sustainable \
                      operations.",
        ai_score: 85,
        category: "Protocol",
        created_at: "2024-01-15",
    },
    SeedRow {
        id: "2",
        title: "Grant Funding for DeFi Innovation Hub",
        dao: "Solana DeFi Collective",
        status: ProposalStatus::Active,
        votes: (8900, 1100),
        time_left: "5 days",
        description: "Allocate 500,000 SOL for establishing a DeFi innovation hub to accelerate \
                      protocol development and foster ecosystem growth. The hub will provide \
                      resources and mentorship for emerging DeFi projects.",
        ai_score: 92,
        category: "Treasury",
        created_at: "2024-01-12",
    },
    SeedRow {
        id: "3",
        title: "Upgrade Governance Token Economics",
        dao: "MetaDAO",
        status: ProposalStatus::Pending,
        votes: (0, 0),
        time_left: "7 days",
        description: "Implement new tokenomics model with increased staking rewards and \
                      governance participation incentives. This proposal aims to increase voter \
                      turnout and long-term token holder engagement.",
        ai_score: 78,
        category: "Governance",
        created_at: "2024-01-10",
    },
    SeedRow {
        id: "4",
        title: "Mango Markets Recovery Plan",
        dao: "Mango DAO",
        status: ProposalStatus::Active,
        votes: (15600, 2400),
        time_left: "1 day",
        description: "Comprehensive recovery plan for Mango Markets including fund allocation, \
                      security upgrades, and user compensation strategy. This proposal outlines \
                      the path forward after recent market volatility.",
        ai_score: 67,
        category: "Recovery",
        created_at: "2024-01-08",
    },
    SeedRow {
        id: "5",
        title: "Cross-Chain Bridge Security Audit",
        dao: "Wormhole Contributors",
        status: ProposalStatus::Active,
        votes: (7800, 1200),
        time_left: "3 days",
        description: "Fund comprehensive security audit of cross-chain bridge infrastructure \
                      with leading blockchain security firms. The audit will cover smart \
                      contracts, validator networks, and guardian systems.",
        ai_score: 88,
        category: "Security",
        created_at: "2024-01-05",
    },
    SeedRow {
        id: "6",
        title: "NFT Marketplace Fee Restructure",
        dao: "Magic Eden DAO",
        status: ProposalStatus::Completed,
        votes: (18900, 4100),
        time_left: "Ended",
        description: "Restructure marketplace fees to better support creators and reduce trading \
                      costs. The new fee structure will implement a tiered system based on \
                      trading volume and creator royalties.",
        ai_score: 91,
        category: "Marketplace",
        created_at: "2024-01-01",
    },
];

/// The six dashboard proposals, in display order.
pub fn initial_proposals() -> Vec<Proposal> {
    SEED.iter()
        .map(|row| Proposal {
            id: row.id.to_string(),
            title: row.title.to_string(),
            dao: row.dao.to_string(),
            status: row.status,
            votes: Votes::new(row.votes.0, row.votes.1),
            time_left: row.time_left.to_string(),
            description: row.description.to_string(),
            ai_score: row.ai_score,
            category: row.category.to_string(),
            created_at: row.created_at.to_string(),
        })
        .collect()
}
