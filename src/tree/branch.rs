use serde::Deserialize;
use serde::Serialize;

/// The edge between a question and one of its children.
///
/// Yes always leads to the left child and No to the right child.
/// This is a structural convention of the whole tree and is never
/// inferred from the content of a question.
#[derive(Debug, Clone, Copy, Hash, Ord, PartialOrd, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    pub const ALL: [Branch; 2] = [Branch::Yes, Branch::No];

    pub fn is_yes(&self) -> bool {
        matches!(self, Branch::Yes)
    }
    pub fn flip(&self) -> Self {
        match self {
            Branch::Yes => Branch::No,
            Branch::No => Branch::Yes,
        }
    }
    /// words a player may type for each branch
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            Branch::Yes => &["yes", "y", "oui", "o", "true", "1"],
            Branch::No => &["no", "n", "non", "false", "0"],
        }
    }
}

impl From<bool> for Branch {
    fn from(answer: bool) -> Self {
        if answer { Branch::Yes } else { Branch::No }
    }
}
impl From<Branch> for bool {
    fn from(branch: Branch) -> Self {
        branch.is_yes()
    }
}

/// case-insensitive parse of a typed answer
impl TryFrom<&str> for Branch {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let ref word = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|branch| branch.words().contains(&word.as_str()))
            .ok_or_else(|| format!("{:?} is neither yes nor no", s.trim()))
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Yes => f.pad("YES"),
            Branch::No => f.pad("NO"),
        }
    }
}
