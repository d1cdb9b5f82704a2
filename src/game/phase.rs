/// Where a game stands: a question is pending, or a guess has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Asking,
    Guessing,
}

impl Phase {
    pub fn is_guessing(&self) -> bool {
        matches!(self, Phase::Guessing)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Asking => write!(f, "asking"),
            Phase::Guessing => write!(f, "guessing"),
        }
    }
}
