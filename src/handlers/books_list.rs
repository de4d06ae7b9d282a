//! Operation: get_all_books
//!
//! Lists books, optionally filtered by a case-insensitive search over title
//! and author, each with the average of its parseable review ratings.
//! Ratings that cannot be parsed are skipped and recorded as error rows.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::api::{ApiError, Context};
use crate::models::{rating, Book, Review};
use crate::store::{CollectionsExt, DocumentStore, Stored};

pub const OPERATION: &str = "get_all_books";

#[derive(Deserialize)]
pub struct Input {
    #[serde(default)]
    pub search: Option<String>,
}

/// A book as returned by the API, with its derived average rating.
#[derive(Debug, Serialize)]
pub struct BookView {
    #[serde(flatten)]
    pub book: Stored<Book>,
    pub average_rating: Option<f64>,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.is_object()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let input = ctx.input::<Input>()?;
    let needle = input
        .search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let books = ctx.store().collection::<Book>();
    let found = match &needle {
        Some(needle) => books.find(&|book: &Book| book.matches(needle))?,
        None => books.find_all()?,
    };

    let mut views = Vec::with_capacity(found.len());
    for book in found {
        let average_rating = average_for(ctx, &book.id.to_string())?;
        views.push(BookView {
            book,
            average_rating,
        });
    }

    Ok(json!({ "books": serde_json::to_value(views)? }))
}

fn average_for<S: DocumentStore>(ctx: &Context<S>, book_id: &str) -> Result<Option<f64>, ApiError> {
    let reviews = ctx
        .store()
        .collection::<Review>()
        .find(&|review: &Review| review.is_for(book_id))?;

    let mut ratings = Vec::with_capacity(reviews.len());
    for review in &reviews {
        match rating::parse(review.data.rating.as_ref()) {
            Ok(value) => ratings.push(value),
            Err(e) => {
                tracing::warn!(book_id, review_id = %review.id, error = %e, "skipping bad rating");
                ctx.record_error(format!("Bad rating data: {}", e));
            }
        }
    }

    Ok(rating::average(&ratings))
}
