//! hosting Server Binary
//!
//! Serves the game over an HTTP JSON API.

use clap::Parser;
use pseudoqui::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = cli::Args::parse();
    let manager = session::Manager::open(&args.data);
    hosting::Server::run(manager, &args.bind).await?;
    Ok(())
}
