//! Catalog operations, one module per operation.
//!
//! Each module follows the same convention:
//! - `OPERATION`: the operation name, also the audit log's `function_name`
//! - `guard`: input shape check (audited operations only)
//! - `handle`: the operation itself

pub mod book_add;
pub mod book_delete;
pub mod books_list;
pub mod logs_clear;
pub mod logs_list;
pub mod review_add;
pub mod reviews_list;
