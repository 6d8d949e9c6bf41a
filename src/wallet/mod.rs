//! Wallet Session Store.
//!
//! Mock wallet connection persisted to local key-value storage under
//! `wallet_state`. No keys, no signatures, no chain.

pub mod connector;
pub mod format;
pub mod power;
pub mod session;
pub mod storage;
pub mod store;

pub use connector::{ConnectedAccount, ConnectorError, MockWalletConnector, WalletConnector};
pub use format::format_address;
pub use power::{calculate_voting_power, VotingPowerBreakdown, VotingPowerInput};
pub use session::{PersistedWallet, WalletSession, WALLET_STATE_KEY};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::WalletStore;

/// Result type for wallet operations.
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet errors
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(#[from] ConnectorError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
