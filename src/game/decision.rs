use super::Phase;
use super::Step;
use crate::Error;
use crate::tree::Branch;
use crate::tree::Handle;
use crate::tree::Items;
use crate::tree::Record;
use crate::tree::Statistics;
use crate::tree::Tree;
use petgraph::graph::NodeIndex;

/// A [`Tree`] plus the state of the one game being played on it.
///
/// The cursor is always the vertex reached by replaying `log` from the
/// root (Yes to the left, No to the right). The structure survives
/// [`DecisionTree::reset`] and only ever changes through
/// [`DecisionTree::learn`].
///
/// There is exactly one cursor and one mutator; callers sharing a tree
/// between games must serialize access themselves.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    tree: Tree,
    cursor: NodeIndex,
    log: Vec<Step>,
}

impl DecisionTree {
    pub fn new(tree: Tree) -> Self {
        Self {
            cursor: tree.root(),
            log: Vec::new(),
            tree,
        }
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn cursor(&self) -> Handle<'_> {
        self.tree.at(self.cursor)
    }
    /// questions answered since the last reset, in order
    pub fn log(&self) -> &[Step] {
        &self.log
    }
    pub fn phase(&self) -> Phase {
        match self.cursor().is_leaf() {
            true => Phase::Guessing,
            false => Phase::Asking,
        }
    }

    /// back to the root with an empty log
    pub fn reset(&mut self) {
        self.cursor = self.tree.root();
        self.log.clear();
    }

    /// the cursor's content, whichever phase we are in
    pub fn current_question(&self) -> &str {
        self.cursor().content()
    }

    /// Records the answer to the pending question and descends.
    /// Returns whether the game has reached a guess.
    pub fn answer(&mut self, answer: bool) -> crate::Result<bool> {
        if self.phase().is_guessing() {
            return Err(Error::AlreadyGuessing);
        }
        let branch = Branch::from(answer);
        let next = self
            .tree
            .child(self.cursor, branch)
            .ok_or_else(|| Error::MissingBranch {
                content: self.current_question().to_string(),
                branch,
            })?;
        let step = Step::from((self.current_question().to_string(), answer));
        self.log.push(step);
        self.cursor = next;
        Ok(self.phase().is_guessing())
    }

    /// the item guessed, once a leaf is reached
    pub fn current_guess(&self) -> Option<&str> {
        match self.phase() {
            Phase::Guessing => Some(self.current_question()),
            Phase::Asking => None,
        }
    }

    /// Teaches the tree `item`, told apart from the current (wrong) guess
    /// by `question`, whose answer for `item` is `answer_for_new`.
    ///
    /// The question takes the guess's place and the cursor stays on it,
    /// so the game is back to asking, one level above the old guess.
    pub fn learn(&mut self, item: &str, question: &str, answer_for_new: bool) -> crate::Result<()> {
        if !self.phase().is_guessing() {
            return Err(Error::StillAsking);
        }
        self.tree
            .split(self.cursor, item, question, Branch::from(answer_for_new))
    }

    pub fn statistics(&self) -> Statistics {
        self.tree.statistics()
    }
    pub fn all_items(&self) -> Items<'_> {
        self.tree.items()
    }
    pub fn display(&self) -> String {
        self.tree.to_string()
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new(Tree::default())
    }
}

impl From<Tree> for DecisionTree {
    fn from(tree: Tree) -> Self {
        Self::new(tree)
    }
}

impl TryFrom<Record> for DecisionTree {
    type Error = Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        Tree::try_from(record).map(Self::new)
    }
}

impl From<&DecisionTree> for Record {
    fn from(game: &DecisionTree) -> Self {
        Record::from(game.tree())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mammal() -> DecisionTree {
        DecisionTree::try_from(Record::branch(
            "mammal?",
            Record::leaf("cat"),
            Record::leaf("dog"),
        ))
        .expect("well formed")
    }

    /// Yes reaches the left leaf, No the right one
    #[test]
    fn cat_or_dog() {
        let mut game = mammal();
        assert_eq!(game.phase(), Phase::Asking);
        assert_eq!(game.current_question(), "mammal?");
        assert_eq!(game.current_guess(), None);
        assert_eq!(game.answer(true), Ok(true));
        assert_eq!(game.current_guess(), Some("cat"));
        game.reset();
        assert_eq!(game.answer(false), Ok(true));
        assert_eq!(game.current_guess(), Some("dog"));
    }

    /// learning under a live cursor, then replaying both sides
    #[test]
    fn lion_roars() {
        let mut game = mammal();
        game.answer(true).expect("asking");
        game.learn("lion", "roars?", true).expect("guessing");
        assert_eq!(game.phase(), Phase::Asking);
        assert_eq!(game.current_question(), "roars?");

        game.reset();
        game.answer(true).expect("asking");
        assert_eq!(game.answer(true), Ok(true));
        assert_eq!(game.current_guess(), Some("lion"));

        game.reset();
        game.answer(true).expect("asking");
        game.answer(false).expect("asking");
        assert_eq!(game.current_guess(), Some("cat"));
    }

    /// learning with a No answer puts the new item on the right
    #[test]
    fn learn_on_no_branch() {
        let mut game = mammal();
        game.answer(false).expect("asking");
        game.learn("wolf", "is it a pet?", false).expect("guessing");
        let tree = game.tree();
        let content = |path: [Branch; 2]| tree.follow(path).map(|i| tree.node(i).content());
        assert_eq!(content([Branch::No, Branch::Yes]), Some("dog"));
        assert_eq!(content([Branch::No, Branch::No]), Some("wolf"));
    }

    /// +1 leaf, +2 nodes, invariants intact
    #[test]
    fn learning_counts() {
        let mut game = DecisionTree::default();
        let before = game.statistics();
        while !game.answer(false).expect("asking") {}
        game.learn("Worm", "Is it slimy?", true).expect("guessing");
        let after = game.statistics();
        assert_eq!(after.leaf_count, before.leaf_count + 1);
        assert_eq!(after.node_count, before.node_count + 2);
        assert!(game.tree().is_valid());
    }

    /// answering past a guess reports it and changes nothing
    #[test]
    fn answer_while_guessing() {
        let mut game = mammal();
        game.answer(true).expect("asking");
        let log = game.log().to_vec();
        assert_eq!(game.answer(false), Err(Error::AlreadyGuessing));
        assert_eq!(game.log(), log.as_slice());
        assert_eq!(game.current_guess(), Some("cat"));
    }

    /// learning while still asking, or with blank input, is refused whole
    #[test]
    fn learn_preconditions() {
        let mut game = mammal();
        assert_eq!(game.learn("lion", "roars?", true), Err(Error::StillAsking));
        game.answer(true).expect("asking");
        assert_eq!(game.learn("", "roars?", true), Err(Error::EmptyItem));
        assert_eq!(game.learn("lion", "   ", true), Err(Error::EmptyQuestion));
        assert_eq!(game.statistics().node_count, 3);
        assert_eq!(game.current_guess(), Some("cat"));
    }

    /// a tree that is a single leaf starts out guessing
    #[test]
    fn single_leaf_game() {
        let mut game = DecisionTree::new(Tree::leaf("cat"));
        assert_eq!(game.phase(), Phase::Guessing);
        assert_eq!(game.current_guess(), Some("cat"));
        game.learn("fish", "does it swim?", true).expect("guessing");
        assert_eq!(game.tree().root(), game.cursor().index());
        assert_eq!(game.current_question(), "does it swim?");
        assert_eq!(game.answer(true), Ok(true));
        assert_eq!(game.current_guess(), Some("fish"));
    }

    /// the log replays to the cursor
    #[test]
    fn log_follows_cursor() {
        let mut game = DecisionTree::default();
        for answer in [true, false, true] {
            game.answer(answer).expect("asking");
        }
        let replay = game.log().iter().map(Step::branch);
        assert_eq!(game.tree().follow(replay), Some(game.cursor().index()));
        assert_eq!(game.log()[0].question, "Is it a mammal?");
        assert!(game.log()[0].answer);
        game.reset();
        assert!(game.log().is_empty());
        assert_eq!(game.cursor().index(), game.tree().root());
    }

    /// the same answers always reach the same item
    #[test]
    fn traversal_determinism() {
        let mut game = DecisionTree::default();
        let answers = [false, true, true, false];
        let mut guesses = Vec::new();
        for _ in 0..2 {
            game.reset();
            for answer in answers {
                if game.answer(answer).expect("asking") {
                    break;
                }
            }
            guesses.push(game.current_question().to_string());
        }
        assert_eq!(guesses[0], guesses[1]);
    }
}
