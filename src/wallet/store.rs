//! Wallet Session Store.
//!
//! Owns the mock wallet session and keeps the persisted `wallet_state`
//! record in step with it:
//! - restored on open (malformed records fall back to defaults)
//! - overwritten on every successful connect
//! - removed on disconnect

use super::connector::WalletConnector;
use super::format::format_address;
use super::session::{PersistedWallet, WalletSession, WALLET_STATE_KEY};
use super::storage::SessionStorage;
use super::{WalletError, WalletResult};
use crate::notify::{Notification, Notifier};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Mock wallet session store.
#[derive(Clone)]
pub struct WalletStore {
    session: Arc<RwLock<WalletSession>>,
    storage: Arc<dyn SessionStorage>,
    connector: Arc<dyn WalletConnector>,
    notifier: Arc<dyn Notifier>,
}

impl WalletStore {
    /// Open the store, restoring any previously saved session.
    pub fn open(
        storage: Arc<dyn SessionStorage>,
        connector: Arc<dyn WalletConnector>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = restore(storage.as_ref());
        Self {
            session: Arc::new(RwLock::new(session)),
            storage,
            connector,
            notifier,
        }
    }

    pub async fn session(&self) -> WalletSession {
        self.session.read().await.clone()
    }

    pub async fn is_connecting(&self) -> bool {
        self.session.read().await.is_connecting
    }

    /// Connect the mock wallet.
    ///
    /// On success the session is persisted; a persistence failure is
    /// reported as [`WalletError::Storage`] but leaves the in-memory
    /// session connected. On connector failure the session stays
    /// disconnected and a failure notification is raised. No retry.
    pub async fn connect(&self) -> WalletResult<()> {
        self.session.write().await.is_connecting = true;

        let account = match self.connector.connect().await {
            Ok(account) => account,
            Err(e) => {
                self.session.write().await.is_connecting = false;
                warn!(error = %e, "wallet connection failed");
                self.notifier.notify(Notification::destructive(
                    "Connection Failed",
                    "Please try again or check your wallet.",
                ));
                return Err(WalletError::ConnectionFailed(e));
            }
        };

        let record = {
            let mut session = self.session.write().await;
            session.is_connected = true;
            session.address = Some(account.address.clone());
            session.balance = account.balance;
            session.voting_power = account.voting_power;
            session.is_connecting = false;
            session.to_persisted()
        };

        let short = format_address(Some(&account.address));
        info!(address = %short, voting_power = account.voting_power, "wallet connected");
        self.notifier.notify(Notification::info(
            "Wallet Connected!",
            format!("Connected to {}", short),
        ));

        self.persist(&record).map_err(|e| {
            warn!(error = %e, "failed to persist wallet session");
            e
        })
    }

    /// Disconnect and forget the session, in memory and on storage.
    pub async fn disconnect(&self) -> WalletResult<()> {
        *self.session.write().await = WalletSession::default();

        let removed = self.storage.remove(WALLET_STATE_KEY);

        info!("wallet disconnected");
        self.notifier.notify(Notification::info(
            "Wallet Disconnected",
            "Your wallet has been safely disconnected.",
        ));

        removed.map_err(|e| {
            warn!(error = %e, "failed to remove persisted wallet session");
            WalletError::from(e)
        })
    }

    fn persist(&self, record: &PersistedWallet) -> WalletResult<()> {
        let json = record.to_json()?;
        self.storage.set(WALLET_STATE_KEY, &json)?;
        Ok(())
    }
}

/// Load the saved session, or defaults when absent, unreadable or malformed.
fn restore(storage: &dyn SessionStorage) -> WalletSession {
    let raw = match storage.get(WALLET_STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return WalletSession::default(),
        Err(e) => {
            warn!(error = %e, "could not read saved wallet session, starting fresh");
            return WalletSession::default();
        }
    };

    match PersistedWallet::parse(&raw) {
        Some(record) => {
            debug!(connected = record.is_connected, "restored wallet session");
            WalletSession::from_persisted(record)
        }
        None => {
            warn!("ignoring malformed saved wallet session");
            WalletSession::default()
        }
    }
}
