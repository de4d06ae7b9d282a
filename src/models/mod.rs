//! Catalog documents: books and their reviews.

mod book;
pub mod rating;
mod review;

pub use book::Book;
pub use review::Review;
