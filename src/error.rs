use crate::tree::Branch;

/// Errors raised by the decision-tree engine.
///
/// Every variant is recoverable: an operation that fails leaves the
/// tree and its cursor exactly as they were before the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// an answer was given while the cursor already rests on a guess
    AlreadyGuessing,
    /// a guess was requested (or taught) while a question is still pending
    StillAsking,
    /// the item to learn is blank
    EmptyItem,
    /// the discriminating question is blank
    EmptyQuestion,
    /// a question node without one (or both) of its branches
    MissingBranch { content: String, branch: Branch },
    /// a leaf carrying a subtree
    LeafWithChild { content: String },
}

impl Error {
    /// precondition and input errors are the caller's fault,
    /// malformed records are the data's fault.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MissingBranch { .. } | Self::LeafWithChild { .. })
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyGuessing => write!(f, "already guessing, no question to answer"),
            Self::StillAsking => write!(f, "still asking, no guess has been reached"),
            Self::EmptyItem => write!(f, "item name must not be empty"),
            Self::EmptyQuestion => write!(f, "discriminating question must not be empty"),
            Self::MissingBranch { content, branch } => {
                write!(f, "question {:?} is missing its {} branch", content, branch)
            }
            Self::LeafWithChild { content } => {
                write!(f, "leaf {:?} must not have children", content)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
