//! Rulebook CLI - evaluate business rules from the command line
//!
//! Usage:
//! ```bash
//! rulebook ledger 10000 deposit=5000 withdraw=8000
//! rulebook late-fee 15 --title "Show your work"
//! rulebook calc div 8 2
//! rulebook student rank 9.8
//! rulebook search "Samsung S21" --deadline-ms 5000
//! rulebook --config rulebook.toml --json student eligible 40 55
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rulebook_config::{ConfigLoader, RulebookConfig};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::ledger::LedgerOp;
use commands::{calc, catalog, fees, ledger, student};

/// Rulebook - validated business-rule engines
#[derive(Parser)]
#[command(name = "rulebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a ledger and apply deposits/withdrawals in order
    Ledger {
        /// Opening balance
        #[arg(allow_negative_numbers = true)]
        initial: Decimal,
        /// Operations, e.g. deposit=500 withdraw=200
        ops: Vec<LedgerOp>,
    },

    /// Compute the late fee for an overdue item
    LateFee {
        /// Days overdue
        #[arg(allow_negative_numbers = true)]
        days: i32,
        /// Item title
        #[arg(long, default_value = "untitled")]
        title: String,
    },

    /// Protected integer arithmetic
    Calc {
        #[command(subcommand)]
        action: CalcAction,
    },

    /// Student eligibility, pass and rank rules
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Run the simulated product search
    Search {
        /// Product name
        name: String,
        /// Override the configured search latency
        #[arg(long)]
        latency_ms: Option<u64>,
        /// Interrupt the search if it has not finished by then
        #[arg(long)]
        deadline_ms: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum CalcAction {
    /// a + b
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// a - b, only when a >= b
    Sub {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// a / b, truncated toward zero
    Div {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
}

#[derive(Subcommand)]
pub enum StudentAction {
    /// Exam eligibility from attendance and lectures attended
    Eligible {
        #[arg(allow_negative_numbers = true)]
        attendance: i32,
        #[arg(allow_negative_numbers = true)]
        lectures: i32,
    },
    /// Pass/fail from marks
    Passed {
        #[arg(allow_negative_numbers = true)]
        marks: i32,
    },
    /// Rank from CGPA
    Rank {
        #[arg(allow_negative_numbers = true)]
        cgpa: f64,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<RulebookConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load_file(path)
            .with_context(|| format!("Failed to load config {:?}", path))?
            .into_config()),
        None => Ok(RulebookConfig::default()),
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    init_tracing(&config.logging.level);
    tracing::debug!(config = ?cli.config, "configuration ready");

    match cli.command {
        Commands::Ledger { initial, ops } => {
            ledger::run(initial, &ops, cli.json)?;
        }

        Commands::LateFee { days, title } => {
            fees::run(&config.late_fees, &title, days, cli.json)?;
        }

        Commands::Calc { action } => {
            calc::run(action, cli.json)?;
        }

        Commands::Student { action } => {
            student::run(&config.eligibility, action, cli.json)?;
        }

        Commands::Search {
            name,
            latency_ms,
            deadline_ms,
        } => {
            let latency = latency_ms
                .map(std::time::Duration::from_millis)
                .unwrap_or_else(|| config.catalog.search_latency());
            let deadline = deadline_ms.map(std::time::Duration::from_millis);
            catalog::search(&name, latency, deadline, cli.json)?;
        }
    }

    Ok(())
}
