use super::Branch;
use super::Node;
use super::Tree;
use petgraph::graph::NodeIndex;

/// Lazy depth-first walk over the leaves of a [`Tree`], Yes before No.
///
/// Finite because the arena is. Restart by asking the tree for a new
/// one, or clone a walk halfway through to fork it.
#[derive(Debug, Clone)]
pub struct Items<'tree> {
    tree: &'tree Tree,
    stack: Vec<NodeIndex>,
}

impl<'tree> From<&'tree Tree> for Items<'tree> {
    fn from(tree: &'tree Tree) -> Self {
        Self {
            tree,
            stack: vec![tree.root()],
        }
    }
}

impl<'tree> Iterator for Items<'tree> {
    type Item = &'tree str;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.stack.pop() {
            match self.tree.node(index) {
                Node::Leaf(item) => return Some(item.as_str()),
                Node::Question(_) => self.stack.extend(
                    Branch::ALL
                        .into_iter()
                        .rev()
                        .filter_map(|branch| self.tree.child(index, branch)),
                ),
            }
        }
        None
    }
}
