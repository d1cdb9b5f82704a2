use serde::Serialize;

/// What the player is looking at right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Prompt {
    Question(String),
    Guess(String),
}

impl Prompt {
    pub fn text(&self) -> &str {
        match self {
            Self::Question(text) | Self::Guess(text) => text,
        }
    }
    pub fn is_guess(&self) -> bool {
        matches!(self, Self::Guess(_))
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question(question) => write!(f, "{}", question),
            Self::Guess(item) => write!(f, "Is it a {}?", item),
        }
    }
}

/// The prompt plus how many questions the current round has asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub prompt: Prompt,
    pub questions: usize,
}

/// One line of the path taken through the tree this round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub question: String,
    pub answer: String,
}

impl std::fmt::Display for Waypoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.question, self.answer)
    }
}
