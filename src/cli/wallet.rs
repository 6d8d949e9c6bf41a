//! Wallet session commands: connect, disconnect, status.

use super::config::DaoscopeConfig;
use daoscope::notify::TracingNotifier;
use daoscope::wallet::{format_address, MockWalletConnector, WalletSession, WalletStore};
use std::sync::Arc;

/// Open the wallet store over the configured file storage
pub fn open_wallet_store(config: &DaoscopeConfig) -> WalletStore {
    WalletStore::open(
        Arc::new(config.storage()),
        Arc::new(MockWalletConnector::new(config.connect_delay())),
        Arc::new(TracingNotifier),
    )
}

/// Connect the mock wallet and persist the session
pub async fn connect(config: &DaoscopeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_wallet_store(config);

    if store.session().await.is_connected {
        println!("Wallet already connected");
        print!("{}", render(&store.session().await));
        return Ok(());
    }

    println!("🔌 Connecting wallet...");
    store.connect().await?;

    println!("✅ Wallet connected");
    print!("{}", render(&store.session().await));
    Ok(())
}

/// Disconnect the wallet and remove the saved session
pub async fn disconnect(config: &DaoscopeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_wallet_store(config);
    store.disconnect().await?;

    println!("👋 Wallet disconnected");
    Ok(())
}

/// Show the saved wallet session
pub async fn status(config: &DaoscopeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_wallet_store(config);
    print!("{}", render(&store.session().await));
    Ok(())
}

fn render(session: &WalletSession) -> String {
    if !session.is_connected {
        return "Wallet: not connected\n".to_string();
    }

    format!(
        "Wallet:        {}\nBalance:       {:.2} SOL\nVoting power:  {}\n",
        format_address(session.address.as_deref()),
        session.balance,
        session.voting_power
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use daoscope::wallet::{SessionStorage, WALLET_STATE_KEY};
    use tempfile::TempDir;

    fn instant_config(dir: &TempDir) -> DaoscopeConfig {
        let mut config = DaoscopeConfig::new(dir.path().join("state"));
        config.simulation.connect_delay_ms = 0;
        config
    }

    #[test]
    fn test_render_session() {
        assert_eq!(render(&WalletSession::default()), "Wallet: not connected\n");

        let session = WalletSession {
            is_connected: true,
            address: Some("7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU".to_string()),
            balance: 245.67,
            voting_power: 1250,
            is_connecting: false,
        };
        let text = render(&session);
        assert!(text.contains("7xKX...gAsU"));
        assert!(text.contains("245.67 SOL"));
        assert!(text.contains("1250"));
    }

    #[tokio::test]
    async fn test_connect_then_disconnect_via_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = instant_config(&temp_dir);
        let record = temp_dir.path().join("state").join("wallet_state.json");

        connect(&config).await.unwrap();
        assert!(record.exists());
        assert!(open_wallet_store(&config).session().await.is_connected);

        // Second connect is a no-op
        connect(&config).await.unwrap();

        status(&config).await.unwrap();

        disconnect(&config).await.unwrap();
        assert!(!record.exists());
        assert!(config.storage().get(WALLET_STATE_KEY).unwrap().is_none());
    }
}
