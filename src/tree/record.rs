use super::Branch;
use crate::Error;
use serde::Deserialize;
use serde::Serialize;

/// Owned, recursive form of a (sub)tree: the shape that is written to
/// and read from disk or the wire.
///
/// ```json
/// { "content": "Is it a mammal?", "is_leaf": false,
///   "left":  { "content": "Cat", "is_leaf": true, "left": null, "right": null },
///   "right": { "content": "Dog", "is_leaf": true, "left": null, "right": null } }
/// ```
///
/// A record is only a candidate tree: nothing stops a hand-edited file
/// from describing a leaf with children or a question with one branch.
/// [`Record::validate`] and the conversion into a [`Tree`](super::Tree)
/// reject those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(alias = "data")]
    pub content: String,
    pub is_leaf: bool,
    #[serde(default)]
    pub left: Option<Box<Record>>,
    #[serde(default)]
    pub right: Option<Box<Record>>,
}

impl Record {
    pub fn leaf(item: impl Into<String>) -> Self {
        Self {
            content: item.into(),
            is_leaf: true,
            left: None,
            right: None,
        }
    }

    /// question with both branches known up front
    pub fn branch(question: impl Into<String>, yes: Record, no: Record) -> Self {
        Self {
            content: question.into(),
            is_leaf: false,
            left: Some(Box::new(yes)),
            right: Some(Box::new(no)),
        }
    }

    /// question from possibly-absent branches; both must be present
    pub fn question(
        question: impl Into<String>,
        yes: Option<Record>,
        no: Option<Record>,
    ) -> crate::Result<Self> {
        let content = question.into();
        match (yes, no) {
            (Some(yes), Some(no)) => Ok(Self::branch(content, yes, no)),
            (None, _) => Err(Error::MissingBranch {
                content,
                branch: Branch::Yes,
            }),
            (_, None) => Err(Error::MissingBranch {
                content,
                branch: Branch::No,
            }),
        }
    }

    pub fn child(&self, branch: Branch) -> Option<&Record> {
        match branch {
            Branch::Yes => self.left.as_deref(),
            Branch::No => self.right.as_deref(),
        }
    }

    /// checks the full-binary-tree shape of this record and everything below it
    pub fn validate(&self) -> crate::Result<()> {
        let mut stack = vec![self];
        while let Some(record) = stack.pop() {
            match (record.is_leaf, record.left.as_deref(), record.right.as_deref()) {
                (true, None, None) => continue,
                (true, _, _) => {
                    return Err(Error::LeafWithChild {
                        content: record.content.clone(),
                    });
                }
                (false, Some(yes), Some(no)) => {
                    stack.push(no);
                    stack.push(yes);
                }
                (false, None, _) => {
                    return Err(Error::MissingBranch {
                        content: record.content.clone(),
                        branch: Branch::Yes,
                    });
                }
                (false, _, None) => {
                    return Err(Error::MissingBranch {
                        content: record.content.clone(),
                        branch: Branch::No,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a question refuses to exist with a branch left out
    #[test]
    fn question_needs_both_branches() {
        let yes = Record::leaf("Cat");
        let no = Record::leaf("Dog");
        assert!(Record::question("Meows?", Some(yes.clone()), Some(no.clone())).is_ok());
        assert_eq!(
            Record::question("Meows?", None, Some(no)),
            Err(Error::MissingBranch {
                content: "Meows?".into(),
                branch: Branch::Yes
            })
        );
        assert_eq!(
            Record::question("Meows?", Some(yes), None),
            Err(Error::MissingBranch {
                content: "Meows?".into(),
                branch: Branch::No
            })
        );
    }

    /// leaves with children and half-built questions are found at any depth
    #[test]
    fn validate_rejects_malformed_shapes() {
        let mut bad = Record::leaf("Cat");
        bad.left = Some(Box::new(Record::leaf("Kitten")));
        let nested = Record::branch("Mammal?", bad, Record::leaf("Fish"));
        assert!(matches!(
            nested.validate(),
            Err(Error::LeafWithChild { content }) if content == "Cat"
        ));

        let mut half = Record::branch("Barks?", Record::leaf("Dog"), Record::leaf("Cat"));
        half.right = None;
        let nested = Record::branch("Mammal?", Record::leaf("Whale"), half);
        assert!(matches!(
            nested.validate(),
            Err(Error::MissingBranch { branch: Branch::No, .. })
        ));
    }

    /// field names are the structural record's, legacy `data` still loads
    #[test]
    fn json_shape() {
        let record = Record::branch("Mammal?", Record::leaf("Cat"), Record::leaf("Snake"));
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["content"], "Mammal?");
        assert_eq!(json["is_leaf"], false);
        assert_eq!(json["left"]["content"], "Cat");
        assert!(json["left"]["left"].is_null());

        let legacy = r#"{"data": "Cat", "is_leaf": true, "left": null, "right": null}"#;
        let record = serde_json::from_str::<Record>(legacy).expect("deserialize");
        assert_eq!(record, Record::leaf("Cat"));
    }
}
