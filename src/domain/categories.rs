//! Category catalog shared by the list filters and the post form.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::domain::error::DomainError;

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Technology",
    "Health",
    "Lifestyle",
    "Education",
    "Entertainment",
];

/// Immutable, ordered list of categories. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    names: Arc<[String]>,
}

impl CategoryCatalog {
    pub fn new<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for name in names {
            let name: String = name.into();
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err(DomainError::validation("category names must not be blank"));
            }
            if !seen.insert(trimmed.to_string()) {
                return Err(DomainError::validation(format!(
                    "category `{trimmed}` is listed more than once"
                )));
            }
            ordered.push(trimmed.to_string());
        }

        if ordered.is_empty() {
            return Err(DomainError::validation("at least one category is required"));
        }

        Ok(Self {
            names: ordered.into(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    /// Case-insensitive lookup returning the catalog spelling. Folding is
    /// Unicode-aware, so `ästhetik` finds `Ästhetik`.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        let needle = name.trim().to_lowercase();
        self.names
            .iter()
            .find(|candidate| candidate.to_lowercase() == needle)
            .map(String::as_str)
    }

    /// Selection map with every category present and unselected.
    pub fn unselected(&self) -> BTreeMap<String, bool> {
        self.names.iter().map(|name| (name.clone(), false)).collect()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_CATEGORIES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}
