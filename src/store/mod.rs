//! Document store - schema-flexible storage for the catalog's collections.
//!
//! Documents are plain serde structs addressed by collection name and a
//! store-assigned `ObjectId`. The store never validates references between
//! collections; a review may point at a book that does not exist.
//!
//! ## Example
//!
//! ```ignore
//! use library_catalog::store::{CollectionsExt, Document, InMemoryDocumentStore};
//!
//! #[derive(Serialize, Deserialize, Clone)]
//! struct Shelf {
//!     pub label: Option<String>,
//! }
//!
//! impl Document for Shelf {
//!     const COLLECTION: &'static str = "shelves";
//! }
//!
//! let store = InMemoryDocumentStore::new();
//! let id = store.collection::<Shelf>().insert(&shelf)?;
//! let all = store.collection::<Shelf>().find_all()?;
//! ```

mod collection;
mod document_store;
mod in_memory;
mod object_id;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Trait for types that can be stored as documents.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this document type (e.g., "books", "reviews").
    const COLLECTION: &'static str;
}

/// A document together with the identifier the store assigned to it.
///
/// Serializes flat: `{ "_id": "<hex>", ...document fields }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stored<D> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub data: D,
}

/// Error type for document store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Serialization/deserialization error.
    #[error("document serialization error: {0}")]
    Serde(String),
    /// Storage-level error (lock poisoning, connectivity).
    #[error("document storage error: {0}")]
    Storage(String),
}

pub use collection::{Collection, CollectionsExt};
pub use document_store::DocumentStore;
pub use in_memory::InMemoryDocumentStore;
pub use object_id::{ObjectId, ObjectIdError};
