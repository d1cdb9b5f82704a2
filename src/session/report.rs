use super::Summary;
use crate::tree::Statistics;
use serde::Serialize;

/// Tree shape and game performance side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub tree: Statistics,
    pub games: Summary,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.tree)?;
        write!(f, "{}", self.games)
    }
}
