//! Quiz session parameters and random question selection.
//!
//! Selection is stateless: the client echoes back the identifiers it has
//! already seen and the server draws uniformly from whatever remains of the
//! candidate pool. Nothing is stored between calls.

use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::category::CategoryId;
use super::question::{Question, QuestionId};

/// Category filter for a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    /// Draw from every question.
    All,
    /// Draw only from one category.
    Only(CategoryId),
}

impl QuizCategory {
    /// Identifier the client sends to request every category.
    pub const ALL_ID: i64 = 0;

    /// Interpret a client-supplied category id.
    ///
    /// # Examples
    /// ```
    /// use trivia_backend::domain::{CategoryId, QuizCategory};
    ///
    /// assert_eq!(QuizCategory::from_id(0), QuizCategory::All);
    /// assert_eq!(QuizCategory::from_id(3), QuizCategory::Only(CategoryId::new(3)));
    /// ```
    pub const fn from_id(id: i64) -> Self {
        if id == Self::ALL_ID {
            Self::All
        } else {
            Self::Only(CategoryId::new(id))
        }
    }
}

/// Parameters for one selection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    category: QuizCategory,
    seen: BTreeSet<QuestionId>,
}

impl QuizSession {
    /// Start a session with nothing seen yet.
    pub fn new(category: QuizCategory) -> Self {
        Self {
            category,
            seen: BTreeSet::new(),
        }
    }

    /// Rebuild a session from the identifiers the client has already seen.
    pub fn resume(category: QuizCategory, seen: impl IntoIterator<Item = QuestionId>) -> Self {
        Self {
            category,
            seen: seen.into_iter().collect(),
        }
    }

    /// Return a copy of the session with `id` marked as seen.
    #[must_use]
    pub fn with_seen(&self, id: QuestionId) -> Self {
        let mut seen = self.seen.clone();
        seen.insert(id);
        Self {
            category: self.category,
            seen,
        }
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn seen(&self) -> &BTreeSet<QuestionId> {
        &self.seen
    }
}

/// Outcome of a selection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Next(&'a Question),
    /// Every pool member has been seen. This ends a quiz normally.
    Exhausted,
}

impl<'a> Selection<'a> {
    pub fn question(self) -> Option<&'a Question> {
        match self {
            Self::Next(question) => Some(question),
            Self::Exhausted => None,
        }
    }
}

/// Draw one question from `pool` that is not in `excluded`, using `rng`.
///
/// Each remaining question has the same probability of being chosen.
/// Identifiers in `excluded` that are absent from `pool` are ignored.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
///
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use trivia_backend::domain::{
///     CategoryId, Difficulty, Question, QuestionId, Selection, select_next_with,
/// };
///
/// let pool = vec![Question::new(
///     QuestionId::new(1),
///     "Q?",
///     "A",
///     Some(CategoryId::new(1)),
///     Difficulty::new(1),
/// )];
/// let mut rng = SmallRng::seed_from_u64(7);
///
/// let none_seen = BTreeSet::new();
/// assert!(matches!(select_next_with(&pool, &none_seen, &mut rng), Selection::Next(_)));
///
/// let all_seen = BTreeSet::from([QuestionId::new(1)]);
/// assert_eq!(select_next_with(&pool, &all_seen, &mut rng), Selection::Exhausted);
/// ```
pub fn select_next_with<'a, R>(
    pool: &'a [Question],
    excluded: &BTreeSet<QuestionId>,
    rng: &mut R,
) -> Selection<'a>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|question| !excluded.contains(&question.id()))
        .collect();
    remaining
        .choose(rng)
        .copied()
        .map_or(Selection::Exhausted, |question| Selection::Next(question))
}

/// [`select_next_with`] using the thread-local random number generator.
pub fn select_next<'a>(pool: &'a [Question], excluded: &BTreeSet<QuestionId>) -> Selection<'a> {
    select_next_with(pool, excluded, &mut rand::thread_rng())
}
