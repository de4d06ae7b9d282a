//! Review operations.

use serde_json::{json, Value};

use crate::support::harness;

#[test]
fn add_review_stores_input_verbatim() {
    let h = harness();
    let result = h
        .service
        .dispatch(
            "add_review",
            json!({
                "book_id": "no-such-book",
                "reviewer_name": "Ada",
                "rating": "five stars",
                "comment": "Loved it"
            }),
        )
        .unwrap();
    assert_eq!(result, json!({ "message": "Review added successfully" }));

    let listed = h.service.dispatch("get_all_reviews", json!({})).unwrap();
    let reviews = listed["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["book_id"], "no-such-book");
    assert_eq!(reviews[0]["reviewer_name"], "Ada");
    assert_eq!(reviews[0]["rating"], "five stars");
    assert_eq!(reviews[0]["comment"], "Loved it");
    assert_eq!(reviews[0]["_id"].as_str().unwrap().len(), 24);
}

#[test]
fn list_filters_by_exact_book_id() {
    let h = harness();
    let dune = h.add_book("Dune", "Frank Herbert");
    let emma = h.add_book("Emma", "Jane Austen");
    h.add_review(&dune, json!(5));
    h.add_review(&dune, json!(4));
    h.add_review(&emma, json!(3));

    let count = |book_id: Value| {
        h.service
            .dispatch("get_all_reviews", json!({ "book_id": book_id }))
            .unwrap()["reviews"]
            .as_array()
            .unwrap()
            .len()
    };

    assert_eq!(count(json!(dune)), 2);
    assert_eq!(count(json!(emma)), 1);
    assert_eq!(count(json!(dune.to_uppercase())), 0);
    assert_eq!(count(json!(null)), 3);
    assert_eq!(count(json!("")), 3);
}

#[test]
fn reviews_survive_book_deletion() {
    let h = harness();
    let dune = h.add_book("Dune", "Frank Herbert");
    h.add_review(&dune, json!(5));
    h.service
        .dispatch("delete_book", json!({ "book_id": dune }))
        .unwrap();

    let listed = h
        .service
        .dispatch("get_all_reviews", json!({ "book_id": dune }))
        .unwrap();
    assert_eq!(listed["reviews"].as_array().unwrap().len(), 1);
}
