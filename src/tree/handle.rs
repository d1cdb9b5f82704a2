use super::Branch;
use super::Node;
use super::Tree;
use petgraph::graph::NodeIndex;

/// A Handle is a NodeIndex paired with the Tree it indexes.
/// Cheap to Copy; holding the tree reference is what makes
/// the navigational methods possible.
#[derive(Debug, Clone, Copy)]
pub struct Handle<'tree> {
    index: NodeIndex,
    tree: &'tree Tree,
}

impl<'tree> From<(NodeIndex, &'tree Tree)> for Handle<'tree> {
    fn from((index, tree): (NodeIndex, &'tree Tree)) -> Self {
        Self { index, tree }
    }
}

impl<'tree> Handle<'tree> {
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn node(&self) -> &'tree Node {
        self.tree.node(self.index)
    }
    pub fn content(&self) -> &'tree str {
        self.node().content()
    }
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    pub fn is_root(&self) -> bool {
        self.index == self.tree.root()
    }

    // navigation

    pub fn spawn(&self, index: NodeIndex) -> Handle<'tree> {
        Self::from((index, self.tree))
    }
    pub fn parent(&self) -> Option<Handle<'tree>> {
        self.tree.parent(self.index).map(|index| self.spawn(index))
    }
    pub fn incoming(&self) -> Option<Branch> {
        self.tree.slot(self.index).map(|(_, branch)| branch)
    }
    pub fn child(&self, branch: Branch) -> Option<Handle<'tree>> {
        self.tree
            .child(self.index, branch)
            .map(|index| self.spawn(index))
    }
    pub fn yes(&self) -> Option<Handle<'tree>> {
        self.child(Branch::Yes)
    }
    pub fn no(&self) -> Option<Handle<'tree>> {
        self.child(Branch::No)
    }
    /// answers leading from the root down to here
    pub fn path(&self) -> Vec<Branch> {
        let mut path = std::iter::successors(Some(*self), |handle| handle.parent())
            .filter_map(|handle| handle.incoming())
            .collect::<Vec<_>>();
        path.reverse();
        path
    }
    pub fn depth(&self) -> usize {
        std::iter::successors(self.parent(), |handle| handle.parent()).count()
    }
}

impl std::fmt::Display for Handle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "N{} {}", self.index.index(), self.node())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Record;

    /// path and depth agree with the walk that reached the vertex
    #[test]
    fn path_and_depth() {
        let tree = Tree::try_from(Record::branch(
            "Mammal?",
            Record::branch("Barks?", Record::leaf("Dog"), Record::leaf("Cat")),
            Record::leaf("Snake"),
        ))
        .expect("well formed");
        let cat = tree
            .follow([Branch::Yes, Branch::No])
            .map(|index| tree.at(index))
            .expect("reachable");
        assert_eq!(cat.content(), "Cat");
        assert_eq!(cat.path(), vec![Branch::Yes, Branch::No]);
        assert_eq!(cat.depth(), 2);
        assert_eq!(cat.incoming(), Some(Branch::No));
        assert_eq!(cat.parent().map(|h| h.content()), Some("Barks?"));
        let root = tree.at(tree.root());
        assert!(root.is_root());
        assert_eq!(root.depth(), 0);
        assert!(root.path().is_empty());
        assert_eq!(root.no().map(|h| h.content()), Some("Snake"));
    }
}
