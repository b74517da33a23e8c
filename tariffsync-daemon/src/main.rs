//! Tariff synchronization service
//!
//! Synchronizes the signed tariff distribution into a local SQLite store: one
//! run at startup, then one every night at the configured time.
//!
//! Usage:
//!   tariffsync --config /etc/tariffsync.toml
//!   DATABASE_URL=sqlite:///var/lib/tariffsync/tulltaxan.db tariffsync --once

mod settings;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tariffsync_store::TariffStore;
use tariffsync_sync::{MaintenanceScheduler, TariffMaintenance};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "tariffsync")]
#[command(about = "Nightly synchronization of the customs tariff file distribution")]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "TARIFFSYNC_CONFIG")]
    config: Option<PathBuf>,

    /// Store connection string (SQLite path), overrides the config file
    #[arg(long, env = "DATABASE_URL")]
    database: Option<String>,

    /// Run once and exit instead of scheduling nightly runs
    #[arg(long)]
    once: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let builder = FmtSubscriber::builder().with_target(false).compact();
    if std::env::var_os("RUST_LOG").is_some() {
        builder.with_env_filter(EnvFilter::from_default_env()).init();
    } else {
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        builder.with_max_level(level).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = settings::load(args.config.as_deref())?;
    if let Some(database) = &args.database {
        config.database_path = settings::database_path(database).to_string();
    }
    config.validate().context("invalid configuration")?;

    info!(
        database = %config.database_path,
        categories = config.categories.len(),
        run_time = %config.daily_run_time.format("%H:%M"),
        "tariffsync starting"
    );

    let store = TariffStore::open(&config.database_path)
        .with_context(|| format!("failed to open store at {}", config.database_path))?;
    let run_time = config.daily_run_time;
    let job = TariffMaintenance::new(config, store).context("failed to set up maintenance job")?;
    let scheduler = MaintenanceScheduler::new(Arc::new(job), run_time);

    if args.once {
        let report = scheduler
            .run_once()
            .await
            .context("maintenance run failed")?;
        let failed = report.failed_categories().count();
        if failed > 0 {
            bail!("{failed} distribution categories failed");
        }
        return Ok(());
    }

    tokio::select! {
        _ = scheduler.run() => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for shutdown signal")?;
            info!("shutdown requested");
        }
    }
    Ok(())
}
