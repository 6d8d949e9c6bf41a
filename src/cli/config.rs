//! daoscope configuration file handling
//!
//! Configuration is TOML, stored at `<data_dir>/daoscope/config.toml` unless
//! `--config` points elsewhere. A commented default file is generated on
//! first run.

use daoscope::proposals::{ProposalStore, ProposalTiming};
use daoscope::wallet::FileStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default log level
const DEFAULT_LOG_LEVEL: &str = "info";

const DEFAULT_VOTE_DELAY_MS: u64 = 2000;
const DEFAULT_CONNECT_DELAY_MS: u64 = 1500;
const DEFAULT_UPDATE_PERIOD_SECS: u64 = 30;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// daoscope configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaoscopeConfig {
    /// Where persisted records (the wallet session) live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Simulated latencies and update loop settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Local storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Simulated chain latency for a vote, in milliseconds
    #[serde(default = "default_vote_delay_ms")]
    pub vote_delay_ms: u64,

    /// Simulated wallet handshake, in milliseconds
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Period of the live vote update loop, in seconds
    #[serde(default = "default_update_period_secs")]
    pub update_period_secs: u64,

    /// Fixed RNG seed for reproducible vote updates (optional)
    pub seed: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_storage_dir() -> PathBuf {
    default_data_dir().join("state")
}

fn default_vote_delay_ms() -> u64 {
    DEFAULT_VOTE_DELAY_MS
}

fn default_connect_delay_ms() -> u64 {
    DEFAULT_CONNECT_DELAY_MS
}

fn default_update_period_secs() -> u64 {
    DEFAULT_UPDATE_PERIOD_SECS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            vote_delay_ms: DEFAULT_VOTE_DELAY_MS,
            connect_delay_ms: DEFAULT_CONNECT_DELAY_MS,
            update_period_secs: DEFAULT_UPDATE_PERIOD_SECS,
            seed: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DaoscopeConfig {
    /// Configuration with defaults and the given storage directory
    #[cfg(test)]
    pub fn new(storage_dir: PathBuf) -> Self {
        Self {
            storage: StorageConfig { dir: storage_dir },
            simulation: SimulationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, generating a default file there first if it is missing
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let storage_dir = path
                .parent()
                .map(|dir| dir.join("state"))
                .unwrap_or_else(default_storage_dir);
            Self::create_default(path, &storage_dir)?;
        }
        Self::load(path)
    }

    /// Generate default configuration content as a string with comments
    pub fn generate_default_toml(storage_dir: &Path) -> String {
        format!(
            r#"# daoscope configuration
#
# Everything daoscope shows is simulated: proposals come from a fixed seed
# set, vote tallies drift on a timer, and the wallet is a mock account.
# Only the wallet session survives restarts.

[storage]
# Directory for persisted records (wallet_state.json)
dir = {storage_dir}

[simulation]
# Simulated chain latency before a vote lands
vote_delay_ms = {vote_delay}

# Simulated wallet handshake
connect_delay_ms = {connect_delay}

# Seconds between live vote updates
update_period_secs = {update_period}

# Fix the RNG seed to make live updates reproducible
# seed = 42

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#,
            storage_dir = toml::Value::String(storage_dir.display().to_string()),
            vote_delay = DEFAULT_VOTE_DELAY_MS,
            connect_delay = DEFAULT_CONNECT_DELAY_MS,
            update_period = DEFAULT_UPDATE_PERIOD_SECS,
        )
    }

    /// Create and save a default configuration file
    pub fn create_default(config_path: &Path, storage_dir: &Path) -> Result<(), ConfigError> {
        write_file(config_path, &Self::generate_default_toml(storage_dir))
    }

    pub fn proposal_timing(&self) -> ProposalTiming {
        ProposalTiming {
            vote_delay: Duration::from_millis(self.simulation.vote_delay_ms),
            update_period: Duration::from_secs(self.simulation.update_period_secs),
        }
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.simulation.connect_delay_ms)
    }

    /// Proposal store with this configuration's timing and seed
    pub fn proposal_store(&self, timing: ProposalTiming) -> ProposalStore {
        match self.simulation.seed {
            Some(seed) => ProposalStore::seeded(seed, timing),
            None => ProposalStore::new(timing),
        }
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.storage.dir)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}

/// Get the daoscope data directory (`<data_dir>/daoscope`)
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daoscope")
}

/// Get the default config file path
pub fn default_config_path() -> PathBuf {
    default_data_dir().join("config.toml")
}
