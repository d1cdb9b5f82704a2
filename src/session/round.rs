use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Bookkeeping for one game, from the first question to the verdict.
///
/// Also reads the older history layout (`questions_asked`, `start_time`
/// as an ISO-8601 string, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    #[serde(alias = "questions_asked")]
    pub questions: usize,
    /// unix seconds
    #[serde(alias = "start_time", deserialize_with = "instant")]
    pub started: u64,
    /// unix seconds, set once the round is finished
    #[serde(alias = "end_time", default, deserialize_with = "until")]
    pub ended: Option<u64>,
    #[serde(alias = "guessed_correctly", default)]
    pub correct: bool,
    #[serde(alias = "animal_guessed", default, deserialize_with = "text")]
    pub guessed: String,
    #[serde(alias = "animal_actual", default, deserialize_with = "text")]
    pub actual: String,
    #[serde(alias = "learned_new_animal", default)]
    pub learned: bool,
}

/// A timestamp as unix seconds or as an ISO-8601 string, with or without offset.
#[derive(Deserialize)]
#[serde(untagged)]
enum Stamp {
    Unix(u64),
    Iso(String),
}

impl TryFrom<Stamp> for u64 {
    type Error = String;
    fn try_from(stamp: Stamp) -> Result<Self, Self::Error> {
        match stamp {
            Stamp::Unix(seconds) => Ok(seconds),
            Stamp::Iso(ref text) => chrono::DateTime::parse_from_rfc3339(text)
                .map(|time| time.timestamp())
                .or_else(|_| {
                    text.parse::<chrono::NaiveDateTime>()
                        .map(|time| time.and_utc().timestamp())
                })
                .map(|seconds| seconds.max(0) as u64)
                .map_err(|e| format!("bad timestamp {:?}: {}", text, e)),
        }
    }
}

fn instant<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Stamp::deserialize(deserializer)
        .and_then(|stamp| u64::try_from(stamp).map_err(serde::de::Error::custom))
}

fn until<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<Stamp>::deserialize(deserializer)?
        .map(u64::try_from)
        .transpose()
        .map_err(serde::de::Error::custom)
}

/// null reads as empty
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Round {
    pub fn is_finished(&self) -> bool {
        self.ended.is_some()
    }
    pub fn finish(&mut self) {
        self.ended.get_or_insert_with(crate::now);
    }
}

impl Default for Round {
    fn default() -> Self {
        Self {
            questions: 0,
            started: crate::now(),
            ended: None,
            correct: false,
            guessed: String::new(),
            actual: String::new(),
            learned: false,
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.correct {
            true => write!(f, "guessed {} in {} questions", self.guessed, self.questions),
            false => write!(
                f,
                "missed {} (guessed {}) after {} questions",
                self.actual, self.guessed, self.questions
            ),
        }
    }
}
