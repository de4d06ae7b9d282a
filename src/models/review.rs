use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Document;

/// A reader's review.
///
/// `book_id` is a soft reference to a book's hex id and is never checked.
/// `rating` is stored exactly as submitted, numeric or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub book_id: Option<String>,
    pub reviewer_name: Option<String>,
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

impl Document for Review {
    const COLLECTION: &'static str = "reviews";
}

impl Review {
    pub fn is_for(&self, book_id: &str) -> bool {
        self.book_id.as_deref() == Some(book_id)
    }
}
