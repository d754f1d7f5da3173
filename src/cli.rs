use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use common::Frequency;

pub mod commands;

use crate::config::load_settings;
use commands::{health, snapshot};

#[derive(Parser)]
#[command(name = "gymops")]
#[command(about = "Gym operations dashboard for the terminal")]
#[command(version)]
pub struct Cli {
    /// Scheme and host of the analytics API
    ///
    /// Overrides GYMOPS_API_BASE (default: http://127.0.0.1:8000).
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Path prefix in front of every endpoint
    ///
    /// Overrides GYMOPS_API_PREFIX. Leave empty when talking to the API
    /// directly, use /api behind the development proxy.
    #[arg(long, global = true)]
    pub api_prefix: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the dashboard once and print it
    ///
    /// Examples:
    ///   gymops snapshot
    ///   gymops snapshot --start 2024-06-01 --end 2024-06-30 --freq week
    Snapshot(SnapshotArgs),
    /// Check that the analytics API is reachable
    Health,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SnapshotArgs {
    /// First day of the range (YYYY-MM-DD), defaults to 30 days ago
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Trend bucket size: day or week
    #[arg(long, default_value_t = Frequency::Day)]
    pub freq: Frequency,

    /// Rows requested from the ranking endpoints
    #[arg(long)]
    pub limit: Option<u32>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let settings = load_settings()?.with_overrides(self.api_base, self.api_prefix);

        match self.command {
            Commands::Snapshot(args) => {
                snapshot(&settings, &args).await?;
            }
            Commands::Health => {
                health(&settings).await?;
            }
        }
        Ok(())
    }
}
