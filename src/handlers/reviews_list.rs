//! Operation: get_all_reviews

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{ApiError, Context};
use crate::models::Review;
use crate::store::{CollectionsExt, DocumentStore};

pub const OPERATION: &str = "get_all_reviews";

#[derive(Deserialize)]
pub struct Input {
    /// Exact match on the review's `book_id`. Empty means no filter.
    #[serde(default)]
    pub book_id: Option<String>,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.is_object()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let input = ctx.input::<Input>()?;
    let reviews = ctx.store().collection::<Review>();

    let found = match input.book_id.filter(|id| !id.is_empty()) {
        Some(book_id) => reviews.find(&|review: &Review| review.is_for(&book_id))?,
        None => reviews.find_all()?,
    };

    Ok(json!({ "reviews": serde_json::to_value(found)? }))
}
