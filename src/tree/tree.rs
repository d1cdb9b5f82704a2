use super::Branch;
use super::Handle;
use super::Items;
use super::Node;
use super::Record;
use super::Statistics;
use crate::Error;
use petgraph::Direction::Incoming;
use petgraph::Direction::Outgoing;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use std::fmt::Formatter;

/// Binary decision tree stored as an arena.
///
/// Vertices live in a `petgraph::graph::DiGraph` and are addressed by
/// [`NodeIndex`]. Edges point from a question to its children and are
/// weighted by the [`Branch`] that selects them. Ownership therefore runs
/// strictly downwards, and the parent of a vertex is recovered from its
/// single incoming edge instead of being stored as a second reference.
///
/// Vertices are never removed, so indices are stable: a traversal cursor
/// held as a `NodeIndex` survives any number of [`Tree::split`]s.
#[derive(Debug, Clone)]
pub struct Tree {
    graph: DiGraph<Node, Branch>,
    root: NodeIndex,
}

impl Tree {
    /// a tree holding a single item and no questions
    pub fn leaf(item: impl Into<String>) -> Self {
        let mut graph = DiGraph::with_capacity(1, 0);
        let root = graph.add_node(Node::Leaf(item.into()));
        Self { graph, root }
    }
    pub fn root(&self) -> NodeIndex {
        self.root
    }
    pub fn at(&self, index: NodeIndex) -> Handle<'_> {
        Handle::from((index, self))
    }
    pub fn graph(&self) -> &DiGraph<Node, Branch> {
        &self.graph
    }
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.graph[index]
    }
    pub fn child(&self, index: NodeIndex, branch: Branch) -> Option<NodeIndex> {
        self.graph
            .edges_directed(index, Outgoing)
            .find(|edge| *edge.weight() == branch)
            .map(|edge| edge.target())
    }
    /// the question holding `index`, and the branch it is held under
    pub fn slot(&self, index: NodeIndex) -> Option<(NodeIndex, Branch)> {
        self.graph
            .edges_directed(index, Incoming)
            .next()
            .map(|edge| (edge.source(), *edge.weight()))
    }
    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.slot(index).map(|(parent, _)| parent)
    }
    /// walk from the root; `None` if the walk tries to step past a leaf
    pub fn follow<I>(&self, answers: I) -> Option<NodeIndex>
    where
        I: IntoIterator<Item = Branch>,
    {
        answers
            .into_iter()
            .try_fold(self.root, |index, branch| self.child(index, branch))
    }
    /// leaf contents, Yes branches first
    pub fn items(&self) -> Items<'_> {
        Items::from(self)
    }
    pub fn statistics(&self) -> Statistics {
        Statistics::from(self)
    }

    /// Replaces the leaf at `index` with a question discriminating `item`
    /// from the leaf's current content.
    ///
    /// The question takes over the leaf's slot (and index): whoever held
    /// the leaf now holds the question, the previous item moves one level
    /// down under `answer.flip()` and the new item sits under `answer`.
    /// Nothing is mutated unless every check passes.
    pub fn split(
        &mut self,
        index: NodeIndex,
        item: &str,
        question: &str,
        answer: Branch,
    ) -> crate::Result<()> {
        let item = item.trim();
        let question = question.trim();
        if item.is_empty() {
            return Err(Error::EmptyItem);
        }
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }
        let stale = match self.node(index) {
            Node::Leaf(old) => old.clone(),
            Node::Question(_) => return Err(Error::StillAsking),
        };
        let fresh = self.graph.add_node(Node::Leaf(item.to_string()));
        let stale = self.graph.add_node(Node::Leaf(stale));
        self.graph[index] = Node::Question(question.to_string());
        self.graph.add_edge(index, fresh, answer);
        self.graph.add_edge(index, stale, answer.flip());
        Ok(())
    }

    /// Full-binary shape and parent consistency, checked over the whole arena.
    pub fn is_valid(&self) -> bool {
        let shaped = self.graph.node_indices().all(|index| {
            let incoming = self.graph.edges_directed(index, Incoming).count();
            let outgoing = self.graph.edges_directed(index, Outgoing).count();
            let rooted = match index == self.root {
                true => incoming == 0,
                false => incoming == 1,
            };
            let full = match self.node(index) {
                Node::Leaf(_) => outgoing == 0,
                Node::Question(_) => {
                    outgoing == 2
                        && Branch::ALL
                            .iter()
                            .all(|branch| self.child(index, *branch).is_some())
                }
            };
            rooted && full
        });
        shaped && self.statistics().node_count == self.graph.node_count()
    }

    /// adds each record after the question holding it, wiring the edge as it goes
    fn grow(graph: &mut DiGraph<Node, Branch>, record: &Record) -> NodeIndex {
        let root = graph.add_node(Node::from(record));
        let mut stack = vec![(record, root)];
        while let Some((record, index)) = stack.pop() {
            for branch in Branch::ALL.into_iter().rev() {
                if let Some(child) = record.child(branch) {
                    let next = graph.add_node(Node::from(child));
                    graph.add_edge(index, next, branch);
                    stack.push((child, next));
                }
            }
        }
        root
    }

    /// assumes `record` is well formed
    fn plant(record: &Record) -> Self {
        let mut graph = DiGraph::default();
        let root = Self::grow(&mut graph, record);
        Self { graph, root }
    }

    /// children are assembled before their question by walking a pre-order backwards
    fn record(&self, index: NodeIndex) -> Record {
        let mut order = Vec::with_capacity(self.graph.node_count());
        let mut stack = vec![index];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(
                Branch::ALL
                    .into_iter()
                    .filter_map(|branch| self.child(index, branch)),
            );
        }
        let mut built = vec![None; self.graph.node_count()];
        for &below in order.iter().skip(1).rev() {
            let record = self.assemble(below, &mut built);
            built[below.index()] = Some(record);
        }
        self.assemble(index, &mut built)
    }

    /// the record at `index`, taking its children from `built`
    fn assemble(&self, index: NodeIndex, built: &mut [Option<Record>]) -> Record {
        match self.node(index) {
            Node::Leaf(item) => Record::leaf(item.clone()),
            Node::Question(text) => {
                let mut take = |branch| {
                    self.child(index, branch)
                        .and_then(|child| built[child.index()].take())
                        .map(Box::new)
                };
                Record {
                    content: text.clone(),
                    is_leaf: false,
                    left: take(Branch::Yes),
                    right: take(Branch::No),
                }
            }
        }
    }

    fn draw(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.node(self.root))?;
        let mut stack = self.below(self.root, String::new());
        while let Some((index, branch, prefix)) = stack.pop() {
            let last = branch == Branch::No;
            let stem = if last { "└" } else { "├" };
            let gaps = if last { "    " } else { "│   " };
            writeln!(f, "{}{}──{:<3} → {}", prefix, stem, branch, self.node(index))?;
            stack.extend(self.below(index, format!("{}{}", prefix, gaps)));
        }
        Ok(())
    }

    /// children of `index` in stack order, No first so Yes is drawn first
    fn below(&self, index: NodeIndex, prefix: String) -> Vec<(NodeIndex, Branch, String)> {
        Branch::ALL
            .into_iter()
            .rev()
            .filter_map(|branch| self.child(index, branch).map(|child| (child, branch)))
            .map(|(child, branch)| (child, branch, prefix.clone()))
            .collect()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::plant(&super::seed::menagerie())
    }
}

impl TryFrom<&Record> for Tree {
    type Error = Error;
    fn try_from(record: &Record) -> Result<Self, Self::Error> {
        record.validate().map(|_| Self::plant(record))
    }
}
impl TryFrom<Record> for Tree {
    type Error = Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        Self::try_from(&record)
    }
}
impl From<&Tree> for Record {
    fn from(tree: &Tree) -> Self {
        tree.record(tree.root())
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.draw(f)
    }
}
