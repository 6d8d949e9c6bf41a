use clap::{Parser, Subcommand};
use daoscope::daos::DaoSortField;
use daoscope::proposals::{ProposalStatus, SearchFilters, SortKey, SortOrder, VoteChoice};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod daos;
pub mod list;
pub mod metrics;
pub mod power;
pub mod show;
pub mod version;
pub mod vote;
pub mod wallet;
pub mod watch;

use config::{default_config_path, DaoscopeConfig};

#[derive(Parser)]
#[command(name = "daoscope")]
#[command(author = "daoscope contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "DAO governance dashboard state, simulated", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.local/share/daoscope/config.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List proposals
    List {
        /// Only proposals with this status (active, pending, completed, failed)
        #[arg(long)]
        status: Option<ProposalStatus>,

        /// Only proposals of this DAO (case-insensitive)
        #[arg(long)]
        dao: Option<String>,

        /// Only proposals in this category (case-insensitive)
        #[arg(long)]
        category: Option<String>,

        /// Free-text search over title, description and DAO
        #[arg(long, short)]
        query: Option<String>,

        /// Sort by created, votes or ai-score
        #[arg(long, default_value = "created")]
        sort: SortKey,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show one proposal in full
    Show {
        /// Proposal ID
        id: String,
    },

    /// Vote on a proposal
    Vote {
        /// Proposal ID
        id: String,

        /// yes or no
        choice: VoteChoice,

        /// Vote weight (default: connected wallet's voting power, else 100)
        #[arg(long)]
        power: Option<u64>,
    },

    /// Watch simulated live vote updates
    Watch {
        /// Stop after this many updates
        #[arg(long)]
        ticks: Option<u64>,

        /// Update period, e.g. "30s" or "1m" (default from config)
        #[arg(long)]
        period: Option<String>,
    },

    /// Show aggregate proposal metrics
    Metrics {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Connect the mock wallet
    Connect,

    /// Disconnect the wallet and forget the saved session
    Disconnect,

    /// Show wallet session status
    Wallet,

    /// Estimate voting power for a token holding
    Power {
        /// Token amount
        #[arg(long)]
        tokens: f64,

        /// Months staked
        #[arg(long, default_value_t = 0)]
        months: u32,

        /// Tokens are delegated
        #[arg(long)]
        delegate: bool,

        /// Historical participation rate in percent
        #[arg(long, default_value_t = 75.0)]
        participation: f64,
    },

    /// List registered DAOs with comparison scores
    Daos {
        /// Only DAOs in this category (Protocol, DeFi, NFT, or all)
        #[arg(long)]
        category: Option<String>,

        /// Sort by name, members, success-rate, treasury or participation
        #[arg(long, default_value = "members")]
        sort: DaoSortField,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare up to four DAOs side by side
    Compare {
        /// DAO IDs (default: 1 2)
        ids: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Display version information
    Version,
}

pub async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Commands::Version = cli.command {
        version::execute();
        return Ok(());
    }

    let config_path = cli
        .config
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    let config = DaoscopeConfig::load_or_create(&config_path)?;
    init_logging(&config.logging.level);

    match cli.command {
        Commands::List {
            status,
            dao,
            category,
            query,
            sort,
            asc,
            json,
        } => {
            let filters = SearchFilters {
                query,
                dao,
                status,
                category,
                sort_by: sort,
                order: if asc { SortOrder::Asc } else { SortOrder::Desc },
            };
            list::execute(&config, filters, json).await
        }
        Commands::Show { id } => show::execute(&config, &id).await,
        Commands::Vote { id, choice, power } => vote::execute(&config, &id, choice, power).await,
        Commands::Watch { ticks, period } => watch::execute(&config, ticks, period).await,
        Commands::Metrics { json } => metrics::execute(&config, json).await,
        Commands::Connect => wallet::connect(&config).await,
        Commands::Disconnect => wallet::disconnect(&config).await,
        Commands::Wallet => wallet::status(&config).await,
        Commands::Power {
            tokens,
            months,
            delegate,
            participation,
        } => power::execute(tokens, months, delegate, participation),
        Commands::Daos {
            category,
            sort,
            asc,
            json,
        } => {
            let order = if asc { SortOrder::Asc } else { SortOrder::Desc };
            daos::list(category.as_deref(), sort, order, json)
        }
        Commands::Compare { ids, json } => daos::compare(&ids, json),
        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

/// Install the log subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
