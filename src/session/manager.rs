use super::*;
use crate::game::DecisionTree;
use crate::game::Phase;
use crate::tree::Branch;
use crate::tree::Record;
use std::path::Path;
use std::path::PathBuf;

/// Owns the learning tree, the round in progress and the history of
/// finished rounds, and keeps the data directory in sync with them.
///
/// One manager serves one player at a time. Shared access goes through
/// a lock held by whoever hosts it.
#[derive(Debug)]
pub struct Manager {
    dir: PathBuf,
    game: DecisionTree,
    round: Round,
    history: History,
}

impl Manager {
    /// Loads the tree and history from `dir`, falling back to the seed
    /// tree and an empty history. A missing tree file is created; an
    /// unusable tree or history file is moved aside for the operator to
    /// inspect before anything new is written in its place.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let game = Self::tree(&dir);
        let history = Self::history(&dir);
        log::info!(
            "opened {} with {} items and {} past games",
            dir.display(),
            game.statistics().leaf_count,
            history.len()
        );
        Self {
            dir,
            game,
            round: Round::default(),
            history,
        }
    }

    fn tree(dir: &Path) -> DecisionTree {
        if !Record::done(dir) {
            let game = DecisionTree::default();
            match Record::from(&game).save(dir) {
                Ok(()) => log::info!("seeded new tree in {}", dir.display()),
                Err(e) => log::warn!("could not save seed tree: {:#}", e),
            }
            return game;
        }
        match Record::load(dir).map(DecisionTree::try_from) {
            Ok(Ok(game)) => game,
            Ok(Err(e)) => {
                log::warn!("saved tree is malformed ({}), starting from seed", e);
                Self::aside::<Record>(dir);
                DecisionTree::default()
            }
            Err(e) => {
                log::warn!("saved tree is unreadable ({:#}), starting from seed", e);
                Self::aside::<Record>(dir);
                DecisionTree::default()
            }
        }
    }

    fn history(dir: &Path) -> History {
        if !History::done(dir) {
            return History::default();
        }
        History::load(dir)
            .inspect_err(|e| log::warn!("game history is unreadable ({:#}), starting empty", e))
            .inspect_err(|_| Self::aside::<History>(dir))
            .unwrap_or_default()
    }

    fn aside<T: Disk>(dir: &Path) {
        match T::quarantine(dir) {
            Ok(path) => log::warn!("moved {} to {}", T::name(), path.display()),
            Err(e) => log::error!("could not move {} aside: {:#}", T::name(), e),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
    pub fn game(&self) -> &DecisionTree {
        &self.game
    }
    pub fn round(&self) -> &Round {
        &self.round
    }
    pub fn records(&self) -> &History {
        &self.history
    }

    pub fn prompt(&self) -> Prompt {
        match self.game.phase() {
            Phase::Asking => Prompt::Question(self.game.current_question().to_string()),
            Phase::Guessing => Prompt::Guess(self.game.current_question().to_string()),
        }
    }
    pub fn progress(&self) -> Progress {
        Progress {
            prompt: self.prompt(),
            questions: self.round.questions,
        }
    }

    /// Abandons whatever was in progress and starts a fresh round at the root.
    pub fn start(&mut self) -> Progress {
        if !self.round.is_finished() && self.round.questions > 0 {
            log::debug!("abandoning round after {} questions", self.round.questions);
        }
        self.game.reset();
        self.round = Round::default();
        log::info!("started a new round");
        self.progress()
    }

    /// Answers the pending question.
    pub fn answer(&mut self, branch: Branch) -> anyhow::Result<Progress> {
        self.game.answer(branch.is_yes())?;
        self.round.questions += 1;
        log::debug!("answered {} to question {}", branch, self.round.questions);
        Ok(self.progress())
    }

    /// Records whether the guess was right and, if not, what the item really was.
    pub fn verdict(&mut self, correct: bool, actual: &str) -> anyhow::Result<()> {
        let guess = self.game.current_guess().ok_or(crate::Error::StillAsking)?;
        self.round.guessed = guess.to_string();
        self.round.correct = correct;
        self.round.actual = match correct {
            true => guess.to_string(),
            false => actual.trim().to_string(),
        };
        log::info!("{}", self.round);
        Ok(())
    }

    /// Teaches the tree a new item against the current guess, saves it,
    /// and finishes the round.
    pub fn teach(&mut self, item: &str, question: &str, answer: Branch) -> anyhow::Result<Round> {
        let guess = self.game.current_guess().map(String::from);
        self.game.learn(item, question, answer.is_yes())?;
        self.round.guessed = guess.unwrap_or_default();
        self.round.correct = false;
        self.round.learned = true;
        self.round.actual = item.trim().to_string();
        log::info!(
            "learned {} via {:?} ({})",
            item.trim(),
            question.trim(),
            answer
        );
        self.save()?;
        self.finish()
    }

    /// Stamps the round's end, appends it to the history and saves the
    /// history. Finishing twice records the round once.
    pub fn finish(&mut self) -> anyhow::Result<Round> {
        if self.round.is_finished() {
            return Ok(self.round.clone());
        }
        self.round.finish();
        self.history.push(self.round.clone());
        self.history.save(&self.dir)?;
        log::info!("finished round, {} games on record", self.history.len());
        Ok(self.round.clone())
    }

    /// Writes the tree to the data directory.
    pub fn save(&self) -> anyhow::Result<()> {
        Record::from(&self.game).save(&self.dir)
    }

    /// The questions answered this round, then the pending guess if any.
    pub fn path(&self) -> Vec<Waypoint> {
        self.game
            .log()
            .iter()
            .map(|step| Waypoint {
                question: step.question.clone(),
                answer: String::from(match step.answer {
                    true => "Yes",
                    false => "No",
                }),
            })
            .chain(self.game.current_guess().map(|item| Waypoint {
                question: Prompt::Guess(item.to_string()).to_string(),
                answer: String::from("Guess"),
            }))
            .collect()
    }

    pub fn report(&self) -> Report {
        Report {
            tree: self.game.statistics(),
            games: self.history.summary(),
        }
    }

    pub fn items(&self) -> Vec<String> {
        self.game.all_items().map(String::from).collect()
    }
}
