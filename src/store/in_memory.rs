//! InMemoryDocumentStore - BTreeMap-backed document store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use super::{Document, DocumentStore, ObjectId, StoreError, Stored};

type CollectionMap = BTreeMap<ObjectId, Vec<u8>>;

/// In-memory document store, one ordered map per collection.
///
/// `ObjectId`s sort in creation order, so iteration is insertion order.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    storage: Arc<RwLock<HashMap<String, CollectionMap>>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(storage.get(collection).map(|c| c.len()).unwrap_or(0))
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert_document<D: Document>(&self, document: &D) -> Result<ObjectId, StoreError> {
        let bytes =
            serde_json::to_vec(document).map_err(|e| StoreError::Serde(e.to_string()))?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        let id = ObjectId::new();
        storage
            .entry(D::COLLECTION.to_string())
            .or_default()
            .insert(id, bytes);

        Ok(id)
    }

    fn find_documents<D: Document>(
        &self,
        predicate: &dyn Fn(&D) -> bool,
    ) -> Result<Vec<Stored<D>>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        let Some(collection) = storage.get(D::COLLECTION) else {
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for (id, bytes) in collection.iter() {
            match serde_json::from_slice::<D>(bytes) {
                Ok(data) => {
                    if predicate(&data) {
                        results.push(Stored { id: *id, data });
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        collection = D::COLLECTION,
                        id = %id,
                        error = %e,
                        "skipping undecodable document"
                    );
                }
            }
        }

        Ok(results)
    }

    fn delete_document<D: Document>(&self, id: &ObjectId) -> Result<u64, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        let removed = storage
            .get_mut(D::COLLECTION)
            .and_then(|collection| collection.remove(id))
            .is_some();

        Ok(removed as u64)
    }
}
