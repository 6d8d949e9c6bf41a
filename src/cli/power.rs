use daoscope::wallet::{calculate_voting_power, VotingPowerInput};

/// Estimate voting power for a token holding
pub fn execute(
    tokens: f64,
    staking_months: u32,
    delegating: bool,
    participation_rate: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let breakdown = calculate_voting_power(VotingPowerInput {
        tokens,
        staking_months,
        delegating,
        participation_rate,
    })?;

    println!("🗳️  Voting Power Estimate");
    println!();
    println!("  Base tokens:          {:.2}", breakdown.base_tokens);
    println!("  Staking multiplier:   {:.1}x", breakdown.staking_multiplier);
    println!("  Delegation bonus:     {:.2}", breakdown.delegation_bonus);
    println!("  Participation bonus:  {:.2}", breakdown.participation_bonus);
    println!("  Total voting power:   {:.2}", breakdown.total_voting_power);

    Ok(())
}
