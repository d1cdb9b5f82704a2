use clap::Parser;
use std::path::PathBuf;

/// Settings shared by both binaries.
#[derive(Debug, Parser)]
#[command(version, about = "A twenty-questions game that learns new animals")]
pub struct Args {
    /// directory holding the saved tree and game history
    #[arg(long, env = "PSEUDOQUI_DATA", default_value = crate::DATA_DIR)]
    pub data: PathBuf,
    /// address for the HTTP API
    #[arg(long, env = "BIND_ADDR", default_value = crate::BIND_ADDR)]
    pub bind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// flags override the built-in defaults
    #[test]
    fn flags() {
        let args = Args::try_parse_from(["play", "--data", "/tmp/zoo", "--bind", "0.0.0.0:80"])
            .expect("valid flags");
        assert_eq!(args.data, PathBuf::from("/tmp/zoo"));
        assert_eq!(args.bind, "0.0.0.0:80");
    }
}
