//! Operation: delete_book

use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::{ApiError, Context};
use crate::models::Book;
use crate::store::{CollectionsExt, DocumentStore, ObjectId};

pub const OPERATION: &str = "delete_book";

#[derive(Deserialize)]
pub struct Input {
    pub book_id: String,
}

pub fn guard<S>(ctx: &Context<S>) -> bool {
    ctx.has_field("book_id")
}

pub fn handle<S: DocumentStore>(ctx: &Context<S>) -> Result<Value, ApiError> {
    let input = ctx.input::<Input>()?;
    let id: ObjectId = input.book_id.parse()?;

    if ctx.store().collection::<Book>().delete(&id)? == 0 {
        return Err(ApiError::NotFound("Book".into()));
    }
    tracing::info!(book_id = %id, "book deleted");

    Ok(json!({ "message": "Book deleted successfully" }))
}
