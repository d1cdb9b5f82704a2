use super::Branch;
use super::Node;
use super::Tree;
use serde::Serialize;

/// Structural summary of a [`Tree`], computed by walking every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// edges on the longest root-to-leaf path
    pub height: usize,
    pub node_count: usize,
    pub leaf_count: usize,
    /// mean number of questions needed to reach an item
    pub average_leaf_depth: f64,
    /// 0 when the tree is as shallow as its leaf count allows, towards 1 as it degenerates
    pub balance_factor: f64,
}

impl Statistics {
    /// `(height − ⌈log2 leaves⌉) / height`, clamped into [0, 1]
    pub fn balance(height: usize, leaves: usize) -> f64 {
        if height == 0 || leaves <= 1 {
            return 0.0;
        }
        let height = height as f64;
        let optimal = (leaves as f64).log2().ceil();
        ((height - optimal) / height).clamp(0.0, 1.0)
    }
}

impl From<&Tree> for Statistics {
    fn from(tree: &Tree) -> Self {
        let mut height = 0;
        let mut nodes = 0;
        let mut leaves = 0;
        let mut depths = 0;
        let mut stack = vec![(tree.root(), 0usize)];
        while let Some((index, depth)) = stack.pop() {
            nodes += 1;
            match tree.node(index) {
                Node::Leaf(_) => {
                    leaves += 1;
                    depths += depth;
                    height = height.max(depth);
                }
                Node::Question(_) => stack.extend(
                    Branch::ALL
                        .into_iter()
                        .filter_map(|branch| tree.child(index, branch))
                        .map(|child| (child, depth + 1)),
                ),
            }
        }
        Self {
            height,
            node_count: nodes,
            leaf_count: leaves,
            average_leaf_depth: match leaves {
                0 => 0.0,
                n => depths as f64 / n as f64,
            },
            balance_factor: Self::balance(height, leaves),
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "height           {}", self.height)?;
        writeln!(f, "nodes            {}", self.node_count)?;
        writeln!(f, "items            {}", self.leaf_count)?;
        writeln!(f, "average depth    {:.2}", self.average_leaf_depth)?;
        write!(f, "balance factor   {:.2}", self.balance_factor)
    }
}
