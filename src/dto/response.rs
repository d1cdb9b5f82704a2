use crate::session::*;
use crate::tree::Record;
use crate::tree::Statistics;
use serde::{Deserialize, Serialize};

/// Plain acknowledgement, and the body of every refused or failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStart {
    pub success: bool,
    pub message: String,
    pub question: String,
    pub questions_asked: usize,
}

impl From<Progress> for ApiStart {
    fn from(progress: Progress) -> Self {
        Self {
            success: true,
            message: String::from("New game started"),
            question: progress.prompt.text().to_string(),
            questions_asked: progress.questions,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiProgress {
    pub success: bool,
    pub questions_asked: usize,
    pub reached_guess: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guess: Option<String>,
}

impl From<Progress> for ApiProgress {
    fn from(progress: Progress) -> Self {
        let (question, guess) = match progress.prompt {
            Prompt::Question(question) => (Some(question), None),
            Prompt::Guess(item) => (None, Some(item)),
        };
        Self {
            success: true,
            questions_asked: progress.questions,
            reached_guess: guess.is_some(),
            question,
            guess,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiLearned {
    pub success: bool,
    pub message: String,
    pub tree_updated: bool,
}

impl From<&Round> for ApiLearned {
    fn from(round: &Round) -> Self {
        Self {
            success: true,
            message: format!("Learned new animal: {}", round.actual),
            tree_updated: round.learned,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiRound {
    pub questions_asked: usize,
    pub correct: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnd {
    pub success: bool,
    pub message: String,
    pub session: ApiRound,
}

impl From<&Round> for ApiEnd {
    fn from(round: &Round) -> Self {
        Self {
            success: true,
            message: String::from("Game ended"),
            session: ApiRound {
                questions_asked: round.questions,
                correct: round.correct,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiTreeText {
    pub success: bool,
    pub tree: String,
}

#[derive(Debug, Serialize)]
pub struct ApiTreeData {
    pub success: bool,
    pub tree: Record,
}

#[derive(Debug, Serialize)]
pub struct ApiPath {
    pub success: bool,
    pub path: Vec<Waypoint>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiTreeStats {
    pub height: usize,
    pub total_nodes: usize,
    pub leaf_count: usize,
    /// rounded to 2 places
    pub average_depth: f64,
    pub balance_factor: f64,
}

impl From<Statistics> for ApiTreeStats {
    fn from(stats: Statistics) -> Self {
        Self {
            height: stats.height,
            total_nodes: stats.node_count,
            leaf_count: stats.leaf_count,
            average_depth: (stats.average_leaf_depth * 100.0).round() / 100.0,
            balance_factor: stats.balance_factor,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiReport {
    pub tree: ApiTreeStats,
    pub games: Summary,
}

#[derive(Debug, Serialize)]
pub struct ApiStats {
    pub success: bool,
    pub statistics: ApiReport,
}

impl From<Report> for ApiStats {
    fn from(report: Report) -> Self {
        Self {
            success: true,
            statistics: ApiReport {
                tree: ApiTreeStats::from(report.tree),
                games: report.games,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiAnimals {
    pub success: bool,
    pub count: usize,
    pub animals: Vec<String>,
}

impl From<Vec<String>> for ApiAnimals {
    fn from(animals: Vec<String>) -> Self {
        Self {
            success: true,
            count: animals.len(),
            animals,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiHealth {
    pub status: String,
    pub message: String,
}

impl Default for ApiHealth {
    fn default() -> Self {
        Self {
            status: String::from("healthy"),
            message: String::from("PseudoQui API is running"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// a pending question and a guess serialize to disjoint fields
    #[test]
    fn progress_fields() {
        let asking = ApiProgress::from(Progress {
            prompt: Prompt::Question("Is it a mammal?".into()),
            questions: 0,
        });
        let json = serde_json::to_value(&asking).expect("serialize");
        assert_eq!(json["question"], "Is it a mammal?");
        assert_eq!(json["reached_guess"], false);
        assert!(json.get("guess").is_none());

        let guessing = ApiProgress::from(Progress {
            prompt: Prompt::Guess("Cat".into()),
            questions: 2,
        });
        let json = serde_json::to_value(&guessing).expect("serialize");
        assert_eq!(json["guess"], "Cat");
        assert_eq!(json["reached_guess"], true);
        assert_eq!(json["questions_asked"], 2);
        assert!(json.get("question").is_none());
    }

    /// tree statistics go out under the legacy names, average rounded
    #[test]
    fn stats_fields() {
        let report = Report {
            tree: Statistics {
                height: 3,
                node_count: 7,
                leaf_count: 4,
                average_leaf_depth: 9.0 / 4.0 + 1.0 / 3.0,
                balance_factor: 1.0 / 3.0,
            },
            games: History::default().summary(),
        };
        let json = serde_json::to_value(ApiStats::from(report)).expect("serialize");
        let tree = &json["statistics"]["tree"];
        assert_eq!(tree["total_nodes"], 7);
        assert_eq!(tree["average_depth"], 2.58);
        assert_eq!(tree["leaf_count"], 4);
        assert_eq!(tree["height"], 3);
        assert!(tree.get("node_count").is_none());
        assert!(tree.get("average_leaf_depth").is_none());
        assert_eq!(json["statistics"]["games"]["total"], 0);
    }
}
