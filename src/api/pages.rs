//! Static HTML pages. Markup is embedded at compile time and carries no
//! server-side data; the pages talk to the JSON API from the browser.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX: &str = include_str!("../../templates/index.html");
const LIBRARY: &str = include_str!("../../templates/library.html");
const REVIEWS: &str = include_str!("../../templates/reviews.html");
const ABOUT: &str = include_str!("../../templates/about.html");

/// Routes for `/`, `/library`, `/reviews` and `/about`.
pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { Html(INDEX) }))
        .route("/library", get(|| async { Html(LIBRARY) }))
        .route("/reviews", get(|| async { Html(REVIEWS) }))
        .route("/about", get(|| async { Html(ABOUT) }))
}
