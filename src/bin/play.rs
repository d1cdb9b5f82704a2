//! Terminal Game Binary
//!
//! Plays twenty questions on the command line, learning from every miss.

use clap::Parser;
use pseudoqui::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let args = cli::Args::parse();
    let manager = session::Manager::open(&args.data);
    tokio::task::block_in_place(|| cli::Terminal::from(manager).run())
}
