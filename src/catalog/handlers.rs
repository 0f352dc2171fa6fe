// HTTP handlers for catalog endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::catalog::Book;
use crate::error::ApiError;
use crate::AppState;

/// Query parameters for catalog search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

/// Handler for GET /api/books
/// Lists every book in the catalog
#[utoipa::path(
    get,
    path = "/api/books",
    responses(
        (status = 200, description = "List of all books", body = Vec<Book>)
    ),
    tag = "catalog"
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.books.all();
    tracing::debug!("Listing {} catalog books", books.len());
    Json(books)
}

/// Handler for GET /api/books/search?q=keyword
/// Case-insensitive substring search over title, author, and category
#[utoipa::path(
    get,
    path = "/api/books/search",
    params(
        ("q" = String, Query, description = "Search keyword")
    ),
    responses(
        (status = 200, description = "Matching books", body = Vec<Book>)
    ),
    tag = "catalog"
)]
pub async fn search_books(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Book>> {
    let matches = state.books.search(&query.q);
    tracing::debug!("Search for {:?} matched {} books", query.q, matches.len());
    Json(matches)
}

/// Handler for GET /api/books/:title
/// Retrieves a single book by its exact title
#[utoipa::path(
    get,
    path = "/api/books/{title}",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found")
    ),
    tag = "catalog"
)]
pub async fn get_book_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<Book>, ApiError> {
    state
        .books
        .find_by_title(&title)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound {
            resource: "Book".to_string(),
            id: title,
        })
}
