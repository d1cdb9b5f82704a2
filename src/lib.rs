//! A twenty-questions guessing game that learns.
//!
//! The engine is a binary decision tree: questions at the internal
//! vertices, items (animals) at the leaves. Playing a game walks the
//! tree from the root; a wrong guess teaches the tree a new item by
//! splitting the guessed leaf with a discriminating question.
//!
//! * [`tree`] - arena-backed tree, records, statistics, rendering
//! * [`game`] - [`DecisionTree`](game::DecisionTree), the traversal cursor and learning
//! * [`session`] - rounds, history, persistence and the game manager
//! * [`hosting`] - HTTP API over a shared manager
//! * [`cli`] - interactive terminal play
pub mod dto;
pub mod error;
pub mod game;
pub mod session;
pub mod tree;

#[cfg(feature = "server")]
pub mod cli;
#[cfg(feature = "server")]
pub mod hosting;

pub use error::Error;
pub use error::Result;

// ============================================================================
// CONFIGURATION
// ============================================================================
/// Directory holding the saved tree and game history.
pub const DATA_DIR: &str = "data";
/// File name of the saved tree inside [`DATA_DIR`].
pub const TREE_FILE: &str = "tree_data.json";
/// File name of the saved game history inside [`DATA_DIR`].
pub const HISTORY_FILE: &str = "game_history.json";
/// Address the HTTP API binds to unless overridden.
pub const BIND_ADDR: &str = "127.0.0.1:5000";
/// HTTP worker threads.
pub const WORKERS: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// Whatever was learned has already been saved by the time a game ends.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Seconds since the unix epoch; the clock used for round timestamps.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
