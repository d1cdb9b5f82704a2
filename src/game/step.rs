use crate::tree::Branch;
use serde::Deserialize;
use serde::Serialize;

/// One answered question in the log of the active game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub question: String,
    pub answer: bool,
}

impl Step {
    pub fn branch(&self) -> Branch {
        Branch::from(self.answer)
    }
}

impl From<(String, bool)> for Step {
    fn from((question, answer): (String, bool)) -> Self {
        Self { question, answer }
    }
}
impl From<Step> for (String, bool) {
    fn from(step: Step) -> Self {
        (step.question, step.answer)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.question, self.branch())
    }
}
