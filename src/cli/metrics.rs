use super::config::DaoscopeConfig;

/// Print aggregate proposal metrics
pub async fn execute(config: &DaoscopeConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = config
        .proposal_store(config.proposal_timing())
        .metrics()
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("📊 Governance Overview");
    println!();
    println!("  Proposals:       {}", metrics.total);
    println!(
        "  Active/Pending:  {}/{}",
        metrics.active, metrics.pending
    );
    println!(
        "  Completed/Failed: {}/{}",
        metrics.completed, metrics.failed
    );
    println!("  Votes cast:      {}", metrics.total_votes);
    println!(
        "  Avg. approval:   {:.1}%",
        metrics.average_yes_percentage
    );
    println!("  Avg. AI score:   {:.1}", metrics.average_ai_score);

    Ok(())
}
