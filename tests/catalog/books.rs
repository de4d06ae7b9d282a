//! Book operations: listing, search, average ratings, add and delete.

use std::sync::Arc;

use serde_json::{json, Value};
use library_catalog::api::ApiError;
use library_catalog::audit::LogStatus;
use library_catalog::store::{Document, DocumentStore, ObjectId, StoreError, Stored};
use library_catalog::{catalog, AuditSink, SqliteAuditSink};

use crate::support::harness;

#[test]
fn dune_scenario() {
    let h = harness();
    let added = h
        .service
        .dispatch(
            "add_book",
            json!({ "title": "Dune", "publication_year": 1965, "author_name": "Frank Herbert" }),
        )
        .unwrap();
    assert_eq!(added["message"], "Book added successfully");
    let id = added["book_id"].as_str().unwrap().to_string();

    let books = h.list_books(Some("dune"));
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["_id"], json!(id));
    assert_eq!(books[0]["title"], "Dune");
    assert_eq!(books[0]["publication_year"], 1965);
    assert_eq!(books[0]["author_name"], "Frank Herbert");
    assert_eq!(books[0]["image_url"], Value::Null);
    assert_eq!(books[0]["average_rating"], Value::Null);

    h.service
        .dispatch("add_review", json!({ "book_id": id, "rating": 5 }))
        .unwrap();
    h.service
        .dispatch("add_review", json!({ "book_id": id, "rating": "bad" }))
        .unwrap();

    let books = h.list_books(None);
    assert_eq!(books[0]["average_rating"], json!(5.0));
}

#[test]
fn missing_fields_are_stored_as_null() {
    let h = harness();
    h.service
        .dispatch("add_book", json!({ "title": "Untitled draft" }))
        .unwrap();

    let books = h.list_books(None);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["publication_year"], Value::Null);
    assert_eq!(books[0]["author_name"], Value::Null);
}

#[test]
fn duplicates_are_allowed() {
    let h = harness();
    let a = h.add_book("Emma", "Jane Austen");
    let b = h.add_book("Emma", "Jane Austen");
    assert_ne!(a, b);
    assert_eq!(h.list_books(None).len(), 2);
}

#[test]
fn search_matches_title_or_author_case_insensitively() {
    let h = harness();
    h.add_book("Dune", "Frank Herbert");
    h.add_book("Foundation", "Isaac Asimov");
    h.add_book("The Left Hand of Darkness", "Ursula K. Le Guin");

    let titles = |search: &str| -> Vec<String> {
        h.list_books(Some(search))
            .iter()
            .map(|b| b["title"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(titles("DUNE"), vec!["Dune"]);
    assert_eq!(titles("asimov"), vec!["Foundation"]);
    assert_eq!(titles("  le guin "), vec!["The Left Hand of Darkness"]);
    assert_eq!(titles("a"), vec!["Dune", "Foundation", "The Left Hand of Darkness"]);
    assert!(titles("tolkien").is_empty());
}

#[test]
fn blank_search_is_no_search() {
    let h = harness();
    h.add_book("Dune", "Frank Herbert");
    h.add_book("Foundation", "Isaac Asimov");

    assert_eq!(h.list_books(None).len(), 2);
    assert_eq!(h.list_books(Some("")).len(), 2);
    assert_eq!(h.list_books(Some("   ")).len(), 2);
}

#[test]
fn average_is_mean_of_parseable_ratings() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    h.add_review(&id, json!(1));
    h.add_review(&id, json!("2"));
    h.add_review(&id, json!(2.0));

    assert_eq!(h.list_books(None)[0]["average_rating"], json!(1.7));
}

#[test]
fn averages_are_per_book() {
    let h = harness();
    let dune = h.add_book("Dune", "Frank Herbert");
    let emma = h.add_book("Emma", "Jane Austen");
    h.add_review(&dune, json!(4));
    h.add_review(&dune, json!(5));
    h.add_review(&emma, json!(2));
    h.add_review("65a1b2c3d4e5f60718293a4b", json!(1));

    let books = h.list_books(None);
    assert_eq!(books[0]["average_rating"], json!(4.5));
    assert_eq!(books[1]["average_rating"], json!(2.0));
}

#[test]
fn each_bad_rating_logs_one_data_quality_row() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    h.add_review(&id, json!("bad"));
    h.add_review(&id, json!(null));
    h.add_review(&id, json!(true));
    h.add_review(&id, json!(3));
    h.service
        .dispatch("add_review", json!({ "book_id": id }))
        .unwrap();
    h.clear_logs();

    let books = h.list_books(None);
    assert_eq!(books[0]["average_rating"], json!(3.0));

    let errors = h.rows_for("get_all_books", LogStatus::Error);
    assert_eq!(errors.len(), 4);
    for row in &errors {
        assert!(row.error_message.as_deref().unwrap().starts_with("Bad rating data: "));
        assert_eq!(row.execution_time, None);
    }
    assert_eq!(h.rows_for("get_all_books", LogStatus::Success).len(), 1);
}

#[test]
fn exact_tie_average_rounds_to_even() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    for rating in [4, 4, 4, 5] {
        h.add_review(&id, json!(rating));
    }

    assert_eq!(h.list_books(None)[0]["average_rating"], json!(4.2));
}

#[test]
fn average_rounds_the_stored_binary_value() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    h.add_review(&id, json!(4.35));

    assert_eq!(h.list_books(None)[0]["average_rating"], json!(4.3));
}

#[test]
fn only_bad_ratings_means_null_average() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    h.add_review(&id, json!("great"));
    assert_eq!(h.list_books(None)[0]["average_rating"], Value::Null);
}

#[test]
fn delete_removes_exactly_one_book() {
    let h = harness();
    let dune = h.add_book("Dune", "Frank Herbert");
    h.add_book("Emma", "Jane Austen");

    let result = h
        .service
        .dispatch("delete_book", json!({ "book_id": dune }))
        .unwrap();
    assert_eq!(result, json!({ "message": "Book deleted successfully" }));

    let books = h.list_books(None);
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["title"], "Emma");
}

#[test]
fn delete_missing_book_is_not_found() {
    let h = harness();
    let id = h.add_book("Dune", "Frank Herbert");
    h.service
        .dispatch("delete_book", json!({ "book_id": id }))
        .unwrap();

    let err = h
        .service
        .dispatch("delete_book", json!({ "book_id": id }))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.to_body(), json!({ "error": "Book not found" }));
}

#[test]
fn delete_with_malformed_id_is_rejected() {
    let h = harness();
    h.add_book("Dune", "Frank Herbert");
    let err = h
        .service
        .dispatch("delete_book", json!({ "book_id": "123" }))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidId(_)));
    assert_eq!(h.list_books(None).len(), 1);
}

/// Store whose reads always fail, as when the database is unreachable.
struct UnreachableStore;

impl DocumentStore for UnreachableStore {
    fn insert_document<D: Document>(&self, _document: &D) -> Result<ObjectId, StoreError> {
        Ok(ObjectId::new())
    }

    fn find_documents<D: Document>(
        &self,
        _predicate: &dyn Fn(&D) -> bool,
    ) -> Result<Vec<Stored<D>>, StoreError> {
        Err(StoreError::Storage("connection refused".into()))
    }

    fn delete_document<D: Document>(&self, _id: &ObjectId) -> Result<u64, StoreError> {
        Ok(0)
    }
}

#[test]
fn store_failure_is_500_with_one_error_row() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(SqliteAuditSink::open(dir.path().join("books.db")).unwrap());
    let service = catalog::service(UnreachableStore, sink.clone());

    let err = service.dispatch("get_all_books", json!({})).unwrap_err();
    assert!(matches!(err, ApiError::Store(_)));
    assert_eq!(err.status_code(), 500);
    assert!(err.to_body()["error"]
        .as_str()
        .unwrap()
        .contains("connection refused"));

    let rows = sink.list().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].function_name, "get_all_books");
    assert_eq!(rows[0].status, LogStatus::Error);
    assert_eq!(rows[0].execution_time, None);
    assert!(rows[0].error_message.is_some());
}
