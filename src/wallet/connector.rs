//! Wallet connection backends.
//!
//! There is no real wallet: [`MockWalletConnector`] waits out a simulated
//! handshake and hands back a fixed account. The trait exists so the
//! failure path of `connect` can be exercised.

use async_trait::async_trait;
use std::time::Duration;

/// Address of the mock account.
pub const MOCK_ADDRESS: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// Balance of the mock account.
pub const MOCK_BALANCE: f64 = 245.67;

/// Voting power of the mock account.
pub const MOCK_VOTING_POWER: u64 = 1250;

/// Default simulated handshake time.
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_millis(1500);

/// Account details returned by a successful connection.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectedAccount {
    pub address: String,
    pub balance: f64,
    pub voting_power: u64,
}

/// Connection errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Wallet rejected the connection request")]
    Rejected,

    #[error("Wallet unavailable: {0}")]
    Unavailable(String),
}

/// Something that can establish a wallet connection.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    async fn connect(&self) -> Result<ConnectedAccount, ConnectorError>;
}

/// Connector returning the fixed mock account after a delay.
#[derive(Debug, Clone)]
pub struct MockWalletConnector {
    delay: Duration,
}

impl MockWalletConnector {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockWalletConnector {
    fn default() -> Self {
        Self::new(DEFAULT_CONNECT_DELAY)
    }
}

#[async_trait]
impl WalletConnector for MockWalletConnector {
    async fn connect(&self) -> Result<ConnectedAccount, ConnectorError> {
        tokio::time::sleep(self.delay).await;
        Ok(ConnectedAccount {
            address: MOCK_ADDRESS.to_string(),
            balance: MOCK_BALANCE,
            voting_power: MOCK_VOTING_POWER,
        })
    }
}
