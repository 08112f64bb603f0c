//! Search and category filtering over a post snapshot.
//!
//! A post is visible when it passes both the text predicate and the category
//! predicate. An empty search text admits every post, and so does a selection
//! in which no category is switched on. Filtering never reorders its input.

use std::collections::BTreeMap;

use crate::domain::entities::Post;

/// Filter criteria owned by the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    pub selected_categories: BTreeMap<String, bool>,
}

impl FilterState {
    pub fn new(selected_categories: BTreeMap<String, bool>) -> Self {
        Self {
            search_text: String::new(),
            selected_categories,
        }
    }

    pub fn apply(&self, posts: &[Post]) -> Vec<Post> {
        visible_posts(posts, &self.search_text, &self.selected_categories)
    }

    /// Names of the categories currently switched on, in map order.
    pub fn active_categories(&self) -> impl Iterator<Item = &str> {
        self.selected_categories
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
    }
}

pub fn visible_posts(
    posts: &[Post],
    search_text: &str,
    selected_categories: &BTreeMap<String, bool>,
) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| {
            matches_text(post, search_text) && matches_categories(post, selected_categories)
        })
        .cloned()
        .collect()
}

/// Search text is compared as given; surrounding whitespace is significant.
pub fn matches_text(post: &Post, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }

    let needle = search_text.to_lowercase();
    post.title.to_lowercase().contains(&needle) || post.content.to_lowercase().contains(&needle)
}

pub fn matches_categories(post: &Post, selected_categories: &BTreeMap<String, bool>) -> bool {
    let mut any_selected = false;
    for (category, selected) in selected_categories {
        if !selected {
            continue;
        }
        if *category == post.category {
            return true;
        }
        any_selected = true;
    }
    !any_selected
}
