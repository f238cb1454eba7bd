use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TryviaQuestionType {
    #[serde(rename = "BOOLEAN")]
    Boolean,
    #[serde(rename = "MULTIPLE")]
    Multiple,
    #[serde(rename = "WRITEINCHAT")]
    WriteInChat,
}

impl TryviaQuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TryviaQuestionType::Boolean => "BOOLEAN",
            TryviaQuestionType::Multiple => "MULTIPLE",
            TryviaQuestionType::WriteInChat => "WRITEINCHAT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TryviaDifficulty {
    Easy,
    Medium,
    Hard,
}

impl TryviaDifficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            TryviaDifficulty::Easy => "EASY",
            TryviaDifficulty::Medium => "MEDIUM",
            TryviaDifficulty::Hard => "HARD",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryviaQuestion {
    pub id: i64,
    pub question: String,
    pub correct_answer: String,
    #[serde(default)]
    pub correct_answers_variation: Vec<String>,
    pub explanation: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` until the session reports an answer.
    pub correct: Option<bool>,
    #[serde(rename = "type")]
    pub kind: TryviaQuestionType,
    pub difficulty: TryviaDifficulty,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Session token for question retrieval; `expires_in` is in seconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
    pub expires_in: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TryviaResponse {
    #[serde(default)]
    pub warnings: Vec<String>,
    pub questions: Vec<TryviaQuestion>,
}

/// Filters for question retrieval; every field is optional.
#[derive(Clone, Debug, Default)]
pub struct TryviaFilter {
    pub session_token: Option<String>,
    pub tags: Vec<String>,
    pub difficulty: Option<TryviaDifficulty>,
    pub amount: Option<u32>,
    pub kind: Option<TryviaQuestionType>,
}
