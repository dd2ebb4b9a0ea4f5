//! gollsync - Entry Point

use clap::Parser;
use gollsync::cli::{Cli, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run(Cli::parse()).await
}
