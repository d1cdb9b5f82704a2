use super::Round;
use serde::Deserialize;
use serde::Serialize;

/// Every finished round, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Round>);

impl History {
    pub fn push(&mut self, round: Round) {
        self.0.push(round);
    }
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn summary(&self) -> Summary {
        Summary::from(self)
    }
}

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self(rounds)
    }
}

/// Aggregate performance over a [`History`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub correct_guesses: usize,
    pub incorrect_guesses: usize,
    /// percent
    pub success_rate: f64,
    pub average_questions_per_game: f64,
}

impl From<&History> for Summary {
    fn from(history: &History) -> Self {
        let total = history.len();
        let correct = history.rounds().iter().filter(|r| r.correct).count();
        let questions = history.rounds().iter().map(|r| r.questions).sum::<usize>();
        let (success_rate, average) = match total {
            0 => (0.0, 0.0),
            n => (
                correct as f64 / n as f64 * 100.0,
                questions as f64 / n as f64,
            ),
        };
        Self {
            total,
            correct_guesses: correct,
            incorrect_guesses: total - correct,
            success_rate,
            average_questions_per_game: (average * 100.0).round() / 100.0,
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games            {}", self.total)?;
        writeln!(f, "correct          {}", self.correct_guesses)?;
        writeln!(f, "incorrect        {}", self.incorrect_guesses)?;
        writeln!(f, "success rate     {:.1}%", self.success_rate)?;
        write!(f, "questions/game   {:.2}", self.average_questions_per_game)
    }
}
