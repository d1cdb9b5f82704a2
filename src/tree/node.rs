/// The weight stored at every vertex of the decision tree.
///
/// A question always has exactly two outgoing edges (one per [`Branch`](super::Branch)),
/// a leaf has none. The arena only ever grows, so a vertex index handed
/// out once stays valid for the lifetime of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    Question(String),
    Leaf(String),
}

impl Node {
    pub fn content(&self) -> &str {
        match self {
            Node::Question(text) => text,
            Node::Leaf(item) => item,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
    pub fn is_question(&self) -> bool {
        matches!(self, Node::Question(_))
    }
}

/// the vertex for a record, ignoring its children
impl From<&super::Record> for Node {
    fn from(record: &super::Record) -> Self {
        match record.is_leaf {
            true => Node::Leaf(record.content.clone()),
            false => Node::Question(record.content.clone()),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Question(text) => write!(f, "(?) {}", text),
            Node::Leaf(item) => write!(f, "(!) {}", item),
        }
    }
}
