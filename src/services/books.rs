//! Book record management service

use tokio::sync::RwLock;

use crate::{
    catalog::BookCatalog,
    error::{AppError, AppResult},
    models::book::{Book, BookDraft, BookFilter, BookSummary},
};

/// Owns the process-wide catalog and serializes access to it on behalf of
/// the concurrent HTTP transport: writers take the lock exclusively, readers
/// share it. The catalog itself is synchronization-free.
pub struct BooksService {
    catalog: RwLock<BookCatalog>,
}

impl BooksService {
    pub fn new() -> Self {
        Self {
            catalog: RwLock::new(BookCatalog::new()),
        }
    }

    /// Add a new book and return its generated identifier
    pub async fn create_book(&self, draft: BookDraft) -> AppResult<String> {
        let mut catalog = self.catalog.write().await;
        let id = catalog
            .create(draft)
            .map_err(|e| AppError::catalog("Failed to add book", e))?;
        tracing::debug!(book_id = %id, total = catalog.len(), "book created");
        Ok(id)
    }

    /// List book summaries matching the filter
    pub async fn list_books(&self, filter: BookFilter) -> AppResult<Vec<BookSummary>> {
        Ok(self.catalog.read().await.list(&filter))
    }

    /// Get the full record for an identifier
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        let catalog = self.catalog.read().await;
        let book = catalog.get(id)?;
        Ok(book.clone())
    }

    /// Replace all mutable fields of an existing book
    pub async fn update_book(&self, id: &str, draft: BookDraft) -> AppResult<()> {
        self.catalog
            .write()
            .await
            .update(id, draft)
            .map_err(|e| AppError::catalog("Failed to update book", e))?;
        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }

    /// Number of records currently held, for the readiness probe
    pub async fn record_count(&self) -> usize {
        self.catalog.read().await.len()
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, id: &str) -> AppResult<()> {
        self.catalog
            .write()
            .await
            .delete(id)
            .map_err(|e| AppError::catalog("Failed to delete book", e))?;
        tracing::debug!(book_id = %id, "book deleted");
        Ok(())
    }
}

impl Default for BooksService {
    fn default() -> Self {
        Self::new()
    }
}
