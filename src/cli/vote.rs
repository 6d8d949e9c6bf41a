use super::config::DaoscopeConfig;
use super::wallet::open_wallet_store;
use daoscope::proposals::{VoteChoice, DEFAULT_VOTE_WEIGHT};

/// Cast a vote on a proposal
///
/// Weight comes from `--power` if given, otherwise from the connected
/// wallet's voting power, otherwise the default of 100.
pub async fn execute(
    config: &DaoscopeConfig,
    id: &str,
    choice: VoteChoice,
    power: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let weight = match power {
        Some(power) => power,
        None => wallet_voting_power(config).await.unwrap_or(DEFAULT_VOTE_WEIGHT),
    };

    let store = config.proposal_store(config.proposal_timing());

    println!("⏳ Submitting {} vote on #{} with weight {}...", choice, id, weight);
    if !store.vote_on_proposal(id, choice, weight).await {
        return Err(format!("Proposal '{}' not found", id).into());
    }

    if let Some(proposal) = store.get_proposal_by_id(id).await {
        println!("✅ Vote recorded on \"{}\"", proposal.title);
        println!(
            "   Yes: {}  No: {}  ({:.1}% in favor)",
            proposal.votes.yes,
            proposal.votes.no,
            proposal.votes.yes_percentage()
        );
    }

    Ok(())
}

async fn wallet_voting_power(config: &DaoscopeConfig) -> Option<u64> {
    let session = open_wallet_store(config).session().await;
    session.is_connected.then_some(session.voting_power)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daoscope::wallet::{SessionStorage, WALLET_STATE_KEY};
    use tempfile::TempDir;

    fn instant_config(dir: &TempDir) -> DaoscopeConfig {
        let mut config = DaoscopeConfig::new(dir.path().join("state"));
        config.simulation.vote_delay_ms = 0;
        config.simulation.connect_delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn test_vote_execute() {
        let temp_dir = TempDir::new().unwrap();
        let config = instant_config(&temp_dir);

        assert!(execute(&config, "1", VoteChoice::Yes, Some(10)).await.is_ok());
        assert!(execute(&config, "missing", VoteChoice::No, None).await.is_err());
    }

    #[tokio::test]
    async fn test_wallet_power_used_when_connected() {
        let temp_dir = TempDir::new().unwrap();
        let config = instant_config(&temp_dir);

        assert_eq!(wallet_voting_power(&config).await, None);

        config
            .storage()
            .set(
                WALLET_STATE_KEY,
                r#"{"isConnected":true,"address":"abc","balance":1.0,"votingPower":1250}"#,
            )
            .unwrap();
        assert_eq!(wallet_voting_power(&config).await, Some(1250));
    }
}
