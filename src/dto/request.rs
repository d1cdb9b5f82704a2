use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitAnswer {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitGuessResult {
    #[serde(default)]
    pub was_correct: bool,
    /// only read when the guess was wrong
    #[serde(default)]
    pub actual_animal: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeachAnimal {
    #[serde(default)]
    pub new_animal: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer_for_new: String,
}
