//! DocumentStore - Abstract find/insert/delete storage for documents.

use super::{Document, ObjectId, StoreError, Stored};

/// Abstract storage for documents, addressed by collection and `ObjectId`.
///
/// Documents are never updated in place; the contract is create, find, and
/// delete-by-id. The `Collection` wrapper provides typed short names.
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return the identifier assigned to it.
    fn insert_document<D: Document>(&self, document: &D) -> Result<ObjectId, StoreError>;

    /// Find documents matching a predicate, in insertion order.
    fn find_documents<D: Document>(
        &self,
        predicate: &dyn Fn(&D) -> bool,
    ) -> Result<Vec<Stored<D>>, StoreError>;

    /// Delete a document by ID. Returns the number of documents removed (0 or 1).
    fn delete_document<D: Document>(&self, id: &ObjectId) -> Result<u64, StoreError>;
}
