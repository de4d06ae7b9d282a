use serde::{Deserialize, Serialize};

use crate::store::Document;

/// A catalog entry. Every field may be absent; books are never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: Option<String>,
    pub publication_year: Option<i64>,
    pub author_name: Option<String>,
    pub image_url: Option<String>,
}

impl Document for Book {
    const COLLECTION: &'static str = "books";
}

impl Book {
    /// Case-insensitive substring match on title or author.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .map(|value| value.to_lowercase().contains(needle))
                .unwrap_or(false)
        };
        contains(&self.title) || contains(&self.author_name)
    }
}
