//! Voting power estimate for a token holding.
//!
//! Multipliers:
//! - staked 12+ months: 2.0x, 6+ months: 1.5x, 3+ months: 1.2x, else 1.0x
//! - delegating: +5% of tokens
//! - participation: up to +20% of tokens, scaled by participation rate

use super::WalletError;
use serde::Serialize;

/// Participation rate assumed when none is given.
pub const DEFAULT_PARTICIPATION_RATE: f64 = 75.0;

const DELEGATION_BONUS_RATE: f64 = 0.05;
const PARTICIPATION_BONUS_RATE: f64 = 0.2;

/// Calculator inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VotingPowerInput {
    pub tokens: f64,
    pub staking_months: u32,
    pub delegating: bool,
    /// Percent, clamped to 0..=100.
    pub participation_rate: f64,
}

impl VotingPowerInput {
    pub fn new(tokens: f64) -> Self {
        Self {
            tokens,
            staking_months: 0,
            delegating: false,
            participation_rate: DEFAULT_PARTICIPATION_RATE,
        }
    }
}

/// Calculator output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingPowerBreakdown {
    pub base_tokens: f64,
    pub staking_multiplier: f64,
    pub delegation_bonus: f64,
    pub participation_bonus: f64,
    pub total_voting_power: f64,
}

pub fn staking_multiplier(months: u32) -> f64 {
    match months {
        12.. => 2.0,
        6..=11 => 1.5,
        3..=5 => 1.2,
        _ => 1.0,
    }
}

/// Compute the voting power breakdown.
pub fn calculate_voting_power(
    input: VotingPowerInput,
) -> Result<VotingPowerBreakdown, WalletError> {
    if !input.tokens.is_finite() || input.tokens < 0.0 {
        return Err(WalletError::InvalidInput(format!(
            "token amount must be a non-negative number, got {}",
            input.tokens
        )));
    }
    if input.participation_rate.is_nan() {
        return Err(WalletError::InvalidInput(
            "participation rate must be a number".to_string(),
        ));
    }

    let base = input.tokens;
    let multiplier = staking_multiplier(input.staking_months);
    let delegation_bonus = if input.delegating {
        base * DELEGATION_BONUS_RATE
    } else {
        0.0
    };
    let rate = input.participation_rate.clamp(0.0, 100.0);
    let participation_bonus = base * (rate / 100.0) * PARTICIPATION_BONUS_RATE;

    Ok(VotingPowerBreakdown {
        base_tokens: base,
        staking_multiplier: multiplier,
        delegation_bonus,
        participation_bonus,
        total_voting_power: base * multiplier + delegation_bonus + participation_bonus,
    })
}
