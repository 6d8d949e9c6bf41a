//! Wallet session state and its persisted form.

use serde::{Deserialize, Serialize};

/// Storage key the session is persisted under.
pub const WALLET_STATE_KEY: &str = "wallet_state";

/// Mock wallet session. Holds no keys or signatures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WalletSession {
    pub is_connected: bool,
    pub address: Option<String>,
    pub balance: f64,
    pub voting_power: u64,
    /// Transient; never persisted.
    pub is_connecting: bool,
}

impl WalletSession {
    /// Session rebuilt from a persisted record. Never resumes connecting.
    pub fn from_persisted(record: PersistedWallet) -> Self {
        Self {
            is_connected: record.is_connected,
            address: record.address,
            balance: record.balance,
            voting_power: record.voting_power,
            is_connecting: false,
        }
    }

    pub fn to_persisted(&self) -> PersistedWallet {
        PersistedWallet {
            is_connected: self.is_connected,
            address: self.address.clone(),
            balance: self.balance,
            voting_power: self.voting_power,
        }
    }
}

/// JSON record stored under [`WALLET_STATE_KEY`].
///
/// Unknown fields are ignored so older records that also carried
/// `isConnecting` still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedWallet {
    pub is_connected: bool,
    pub address: Option<String>,
    pub balance: f64,
    pub voting_power: u64,
}

impl PersistedWallet {
    /// Parse a stored record. Returns `None` for anything malformed,
    /// including negative or non-finite balances.
    pub fn parse(raw: &str) -> Option<Self> {
        let record: PersistedWallet = serde_json::from_str(raw).ok()?;
        if !record.balance.is_finite() || record.balance < 0.0 {
            return None;
        }
        Some(record)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
