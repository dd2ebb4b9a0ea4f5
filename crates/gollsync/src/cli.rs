//! Command line interface
//!
//! Thin operator tool over one adapter built from configuration:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `keys <tenant>` | print lock and status keys, no I/O |
//! | `lock <tenant> [--hold-ms N]` | lock, hold, unlock |
//! | `fetch <tenant>` | print the status value |
//! | `write <tenant> <status>` | lock, write, unlock |

use anyhow::Context;
use clap::{Parser, Subcommand};
use gollsync_domain::ports::SyncAdapter;
use gollsync_domain::value_objects::{NamespaceKeys, SyncContext};
use gollsync_infrastructure::config::{AppConfig, ConfigLoader};
use gollsync_infrastructure::{create_sync_adapter, logging};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Command line interface for gollsync
#[derive(Parser, Debug)]
#[command(name = "gollsync")]
#[command(about = "Tenant locks and sync status in a shared store")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Give up on the whole command after this many milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// gollsync commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the lock key and status key for a tenant
    Keys {
        /// Tenant key
        tenant: String,
    },
    /// Take the tenant lock, hold it, then release it
    Lock {
        /// Tenant key
        tenant: String,
        /// How long to hold the lock
        #[arg(long, default_value_t = 0)]
        hold_ms: u64,
    },
    /// Print the current status value
    Fetch {
        /// Tenant key
        tenant: String,
    },
    /// Write a status value under the tenant lock
    Write {
        /// Tenant key
        tenant: String,
        /// Status value to store
        status: String,
    },
}

impl Cli {
    /// Context bounding the command
    pub fn context(&self) -> SyncContext {
        match self.timeout_ms {
            Some(ms) => SyncContext::with_timeout(Duration::from_millis(ms)),
            None => SyncContext::background(),
        }
    }

    /// Load configuration from `--config` or the default locations
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        };
        loader.load().context("Failed to load configuration")
    }
}

/// Run the parsed command line, writing results to stdout
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    logging::init_logging(&config.logging).context("Failed to initialize logging")?;

    let stdout = std::io::stdout();
    execute(&cli, &config, &mut stdout.lock()).await
}

/// Execute `cli.command` against an adapter built from `config`
pub async fn execute<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    if let Command::Keys { tenant } = &cli.command {
        let keys = NamespaceKeys::new(config.sync.namespace.as_str());
        writeln!(out, "lock   {}", keys.lock_key(tenant))?;
        writeln!(out, "status {}", keys.status_key())?;
        return Ok(());
    }

    let adapter = create_sync_adapter(config).context("Failed to create sync adapter")?;
    let ctx = cli.context();

    match &cli.command {
        Command::Keys { .. } => {}
        Command::Lock { tenant, hold_ms } => {
            adapter.lock(&ctx, tenant).await.context("Lock failed")?;
            writeln!(out, "locked {tenant}")?;
            tokio::time::sleep(Duration::from_millis(*hold_ms)).await;
            adapter.unlock(&ctx, tenant).await.context("Unlock failed")?;
            writeln!(out, "unlocked {tenant}")?;
        }
        Command::Fetch { tenant } => {
            let status = adapter.fetch(&ctx, tenant).await.context("Fetch failed")?;
            writeln!(out, "{status}")?;
        }
        Command::Write { tenant, status } => {
            write_locked(adapter.as_ref(), &ctx, tenant, status).await?;
            writeln!(out, "written")?;
        }
    }
    Ok(())
}

/// Lock, write, unlock; the unlock runs even when the write fails
async fn write_locked(
    adapter: &dyn SyncAdapter,
    ctx: &SyncContext,
    tenant: &str,
    status: &str,
) -> anyhow::Result<()> {
    adapter.lock(ctx, tenant).await.context("Lock failed")?;
    let written = adapter.write(ctx, tenant, status).await;
    let unlocked = adapter.unlock(ctx, tenant).await;

    written.context("Write failed")?;
    unlocked.context("Unlock failed")?;
    Ok(())
}
