//! Question categories.
//!
//! Categories are read-only reference data: the backend never creates,
//! renames, or deletes them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Stable category identifier assigned by storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    /// Wrap a raw storage identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Category with its display label.
///
/// Serialises as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    #[serde(rename = "type")]
    kind: String,
}

impl Category {
    /// Construct a category from its identifier and label.
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display label (the `type` column).
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }
}

/// Ordered mapping of category id to display label.
///
/// Serialises as a JSON object keyed by the decimal id, e.g.
/// `{"1": "Science", "2": "Art"}`.
///
/// # Examples
/// ```
/// use trivia_backend::domain::{Category, CategoryCatalogue, CategoryId};
///
/// let catalogue = CategoryCatalogue::from_categories(vec![
///     Category::new(CategoryId::new(2), "Art"),
///     Category::new(CategoryId::new(1), "Science"),
/// ]);
/// let json = serde_json::to_value(&catalogue).expect("serialisable");
/// assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCatalogue(BTreeMap<CategoryId, String>);

impl CategoryCatalogue {
    /// Build the catalogue from category entities.
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self(
            categories
                .into_iter()
                .map(|category| (category.id, category.kind))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
