/// Top-level choices between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Play,
    Tree,
    Stats,
    Animals,
    Quit,
}

impl Menu {
    pub const ALL: [Self; 5] = [Self::Play, Self::Tree, Self::Stats, Self::Animals, Self::Quit];
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Play => write!(f, "Play a round"),
            Self::Tree => write!(f, "Show the tree"),
            Self::Stats => write!(f, "Show statistics"),
            Self::Animals => write!(f, "List known animals"),
            Self::Quit => write!(f, "Quit"),
        }
    }
}
