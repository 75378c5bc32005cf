//! Book record endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft, BookFilter, BookQuery, BookSummary},
};

/// Response envelope shared by every book endpoint
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Always "success" on this path
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    fn success(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }
}

/// Acknowledgement body for update and delete
#[derive(Serialize, ToSchema)]
pub struct Ack {
    pub status: String,
    pub message: String,
}

impl Ack {
    fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct CreatedBook {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
}

/// Coerce a boolean query flag. Accepts the numeric and textual forms
/// clients actually send; anything else is a validation error.
fn parse_flag(field: &str, value: &str) -> AppResult<bool> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{field} must be one of 1, 0, true, false (got {other:?})"
        ))),
    }
}

fn to_filter(query: BookQuery) -> AppResult<BookFilter> {
    Ok(BookFilter {
        name: query.name,
        reading: query
            .reading
            .as_deref()
            .map(|v| parse_flag("reading", v))
            .transpose()?,
        finished: query
            .finished
            .as_deref()
            .map(|v| parse_flag("finished", v))
            .transpose()?,
    })
}

/// Add a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookDraft,
    responses(
        (status = 201, description = "Book added", body = ApiResponse<CreatedBook>),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(draft): Json<BookDraft>,
) -> AppResult<(StatusCode, Json<ApiResponse<CreatedBook>>)> {
    let book_id = state.services.books.create_book(draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Book added successfully",
            CreatedBook { book_id },
        )),
    ))
}

/// List books with optional filters
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of book summaries", body = ApiResponse<BookList>),
        (status = 400, description = "Invalid filter value", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    let filter = to_filter(query)?;
    let books = state.services.books.list_books(filter).await?;

    Ok(Json(ApiResponse::success(
        "Books retrieved successfully",
        BookList { books },
    )))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Full book record", body = ApiResponse<BookDetail>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<BookDetail>>> {
    let book = state.services.books.get_book(&id).await?;

    Ok(Json(ApiResponse::success(
        "Book retrieved successfully",
        BookDetail { book },
    )))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookDraft,
    responses(
        (status = 200, description = "Book updated", body = Ack),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> AppResult<Json<Ack>> {
    state.services.books.update_book(&id, draft).await?;
    Ok(Json(Ack::success("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = Ack),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Ack>> {
    state.services.books.delete_book(&id).await?;
    Ok(Json(Ack::success("Book deleted successfully")))
}
