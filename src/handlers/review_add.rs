//! Operation: add_review
//!
//! Stores the review verbatim. The book reference and the rating are not
//! validated; bad ratings only surface later, when averages are computed.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{ApiError, Context};
use crate::models::Review;
use crate::store::{CollectionsExt, DocumentStore};

pub const OPERATION: &str = "add_review";

#[derive(Deserialize)]
pub struct Input {
    pub book_id: Option<String>,
    pub reviewer_name: Option<String>,
    pub rating: Option<Value>,
    pub comment: Option<String>,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.is_object()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let input = ctx.input::<Input>()?;
    let review = Review {
        book_id: input.book_id,
        reviewer_name: input.reviewer_name,
        rating: input.rating,
        comment: input.comment,
    };

    let id = ctx.store().collection::<Review>().insert(&review)?;
    tracing::info!(review_id = %id, book_id = ?review.book_id, "review added");

    Ok(json!({ "message": "Review added successfully" }))
}
