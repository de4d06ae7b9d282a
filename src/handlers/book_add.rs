//! Operation: add_book

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{ApiError, Context};
use crate::models::Book;
use crate::store::{CollectionsExt, DocumentStore};

pub const OPERATION: &str = "add_book";

/// Every field is optional; absent fields are stored as null.
#[derive(Deserialize)]
pub struct Input {
    pub title: Option<String>,
    pub publication_year: Option<i64>,
    pub author_name: Option<String>,
    pub image_url: Option<String>,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.is_object()
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let input = ctx.input::<Input>()?;
    let book = Book {
        title: input.title,
        publication_year: input.publication_year,
        author_name: input.author_name,
        image_url: input.image_url,
    };

    let id = ctx.store().collection::<Book>().insert(&book)?;
    tracing::info!(book_id = %id, title = ?book.title, "book added");

    Ok(json!({
        "message": "Book added successfully",
        "book_id": id.to_string(),
    }))
}
