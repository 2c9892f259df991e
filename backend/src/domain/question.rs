//! Trivia questions and creation drafts.

use serde::{Deserialize, Serialize};

use super::category::CategoryId;
use super::search::SearchTerm;

/// Storage-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question difficulty rating. Larger is harder; the range is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(i32);

impl Difficulty {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Validated input for creating a question.
///
/// Every field is required; the question and answer must contain
/// non-whitespace text.
///
/// # Examples
/// ```
/// use trivia_backend::domain::{CategoryId, Difficulty, NewQuestion};
///
/// let draft = NewQuestion::new(
///     "Which planet is largest?",
///     "Jupiter",
///     CategoryId::new(1),
///     Difficulty::new(2),
/// )
/// .expect("valid draft");
/// assert_eq!(draft.answer(), "Jupiter");
/// assert!(NewQuestion::new(" ", "x", CategoryId::new(1), Difficulty::new(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

/// Validation failures raised while building a [`NewQuestion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionValidationError {
    EmptyQuestion,
    EmptyAnswer,
}

impl QuestionValidationError {
    /// Name of the offending request field.
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyQuestion => "question",
            Self::EmptyAnswer => "answer",
        }
    }
}

impl std::fmt::Display for QuestionValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuestion => write!(f, "question text must not be empty"),
            Self::EmptyAnswer => write!(f, "answer text must not be empty"),
        }
    }
}

impl std::error::Error for QuestionValidationError {}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, QuestionValidationError> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(QuestionValidationError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }

    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Persisted trivia question.
///
/// Serialises to the client contract
/// `{"id", "question", "answer", "category", "difficulty"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    question: String,
    answer: String,
    category: Option<CategoryId>,
    difficulty: Difficulty,
}

impl Question {
    /// Assemble a question from stored columns.
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: Option<CategoryId>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Attach a storage identifier to a validated draft.
    pub fn from_draft(id: QuestionId, draft: NewQuestion) -> Self {
        Self {
            id,
            question: draft.question,
            answer: draft.answer,
            category: Some(draft.category),
            difficulty: draft.difficulty,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question(&self) -> &str {
        self.question.as_str()
    }

    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }

    /// Owning category. Rows orphaned by storage may carry none.
    pub fn category(&self) -> Option<CategoryId> {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Whether the question text contains `term`, ignoring case.
    ///
    /// Only the question text is searched; answers are not.
    pub fn matches(&self, term: &SearchTerm) -> bool {
        term.is_within(&self.question)
    }
}
