//! Log operations: listing and clearing the audit log.

use serde_json::json;
use library_catalog::audit::LogStatus;

use crate::support::harness;

#[test]
fn get_logs_returns_newest_first_and_is_not_audited() {
    let h = harness();
    h.add_book("Dune", "Frank Herbert");
    h.list_books(None);

    let result = h.service.dispatch("get_logs", json!({})).unwrap();
    let logs = result["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["function_name"], "get_all_books");
    assert_eq!(logs[1]["function_name"], "add_book");
    assert_eq!(logs[0]["status"], "success");
    assert!(logs[0]["log_id"].is_i64());
    assert!(logs[0]["timestamp"].is_string());
    assert!(logs[0]["execution_time"].is_f64());
    assert!(logs[0]["error_message"].is_null());

    h.service.dispatch("get_logs", json!({})).unwrap();
    assert_eq!(h.logs().len(), 2);
}

#[test]
fn clear_logs_empties_the_log() {
    let h = harness();
    h.add_book("Dune", "Frank Herbert");
    h.service
        .dispatch("delete_book", json!({ "book_id": "bogus" }))
        .unwrap_err();
    assert_eq!(h.logs().len(), 2);

    let result = h.service.dispatch("delete_logs", json!({})).unwrap();
    assert_eq!(result, json!({ "message": "All logs deleted successfully" }));

    let listed = h.service.dispatch("get_logs", json!({})).unwrap();
    assert_eq!(listed, json!({ "logs": [] }));
    assert!(h.rows_for("delete_logs", LogStatus::Success).is_empty());
}
