use super::config::DaoscopeConfig;
use daoscope::proposals::{ProposalStatus, ProposalStore};

/// Watch live vote updates
///
/// Starts the store's update loop and prints the active tallies after
/// every tick. Runs until `ticks` updates have been seen or Ctrl-C.
pub async fn execute(
    config: &DaoscopeConfig,
    ticks: Option<u64>,
    period: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut timing = config.proposal_timing();
    if let Some(period) = period {
        timing.update_period = humantime::parse_duration(&period)
            .map_err(|e| format!("Invalid period '{}': {}", period, e))?;
    }
    if timing.update_period.is_zero() {
        return Err("Update period must be greater than zero".into());
    }

    let store = config.proposal_store(timing);
    let mut updates = store.subscribe_ticks();

    println!(
        "👀 Watching live votes (update every {})",
        humantime::format_duration(timing.update_period)
    );
    print_active(&store).await;

    store.start_updates();

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let seen = *updates.borrow_and_update();
                println!();
                println!("── update {} ──", seen);
                print_active(&store).await;

                if ticks.is_some_and(|limit| seen >= limit) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                println!("Stopping");
                break;
            }
        }
    }

    store.dispose();
    Ok(())
}

async fn print_active(store: &ProposalStore) {
    for p in store.get_proposals_by_status(ProposalStatus::Active).await {
        println!(
            "  #{:<3} {:>8} yes {:>8} no  {:>5.1}%  {}",
            p.id,
            p.votes.yes,
            p.votes.no,
            p.votes.yes_percentage(),
            p.title
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test(start_paused = true)]
    async fn test_watch_stops_after_ticks() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = DaoscopeConfig::new(temp_dir.path().to_path_buf());
        config.simulation.seed = Some(1);

        let result = execute(&config, Some(2), Some("5s".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_watch_rejects_bad_period() {
        let temp_dir = TempDir::new().unwrap();
        let config = DaoscopeConfig::new(temp_dir.path().to_path_buf());

        assert!(execute(&config, Some(1), Some("soon".to_string())).await.is_err());
        assert!(execute(&config, Some(1), Some("0s".to_string())).await.is_err());
    }
}
