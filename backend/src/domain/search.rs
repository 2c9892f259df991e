//! Free-text search term.

/// Non-empty, case-folded search term.
///
/// An empty or whitespace-only term means "no search" and cannot be
/// represented, so callers must branch before filtering questions.
///
/// # Examples
/// ```
/// use trivia_backend::domain::SearchTerm;
///
/// assert!(SearchTerm::new("  ").is_none());
/// let term = SearchTerm::new(" Title ").expect("non-empty term");
/// assert_eq!(term.as_str(), "Title");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Build a term from user input, returning `None` when it is blank.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            raw: trimmed.to_owned(),
            folded: trimmed.to_lowercase(),
        })
    }

    /// The term as supplied, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        self.raw.as_str()
    }

    /// Case-insensitive substring test.
    pub fn is_within(&self, text: &str) -> bool {
        text.to_lowercase().contains(self.folded.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_terms_are_not_searches(#[case] raw: &str) {
        assert!(SearchTerm::new(raw).is_none());
    }

    #[rstest]
    #[case("title", "What is the title of the 1990 fantasy film?", true)]
    #[case("Title", "what is the title of the 1990 fantasy film?", true)]
    #[case("TITLE", "What Is The Title?", true)]
    #[case("boxer", "Whose autobiography is entitled...?", false)]
    fn matching_ignores_case(#[case] raw: &str, #[case] text: &str, #[case] expected: bool) {
        let term = SearchTerm::new(raw).expect("non-empty term");
        assert_eq!(term.is_within(text), expected);
    }
}
