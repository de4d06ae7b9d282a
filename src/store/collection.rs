//! Collection - Typed accessor for one document collection.

use std::marker::PhantomData;

use super::{Document, DocumentStore, ObjectId, StoreError, Stored};

/// Typed wrapper for accessing documents of a specific type.
pub struct Collection<'a, S, D> {
    store: &'a S,
    _marker: PhantomData<D>,
}

impl<'a, S: DocumentStore, D: Document> Collection<'a, S, D> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Insert a document, returning its new identifier.
    pub fn insert(&self, document: &D) -> Result<ObjectId, StoreError> {
        self.store.insert_document(document)
    }

    /// Find documents matching a predicate.
    pub fn find(&self, predicate: &dyn Fn(&D) -> bool) -> Result<Vec<Stored<D>>, StoreError> {
        self.store.find_documents(predicate)
    }

    /// Every document in the collection.
    pub fn find_all(&self) -> Result<Vec<Stored<D>>, StoreError> {
        self.store.find_documents(&|_: &D| true)
    }

    /// Delete a document by ID. Returns the number removed.
    pub fn delete(&self, id: &ObjectId) -> Result<u64, StoreError> {
        self.store.delete_document::<D>(id)
    }
}

/// Extension trait for typed collection access on any DocumentStore.
pub trait CollectionsExt: DocumentStore + Sized {
    /// Get a typed collection accessor.
    fn collection<D: Document>(&self) -> Collection<'_, Self, D> {
        Collection::new(self)
    }
}

impl<S: DocumentStore> CollectionsExt for S {}
