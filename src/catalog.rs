//! In-memory book catalog: the record-management core.
//!
//! `BookCatalog` owns an ordered collection of book records and exposes the
//! five operations (create, list, get, update, delete). It performs no
//! synchronization of its own; a concurrent transport must serialize access
//! externally (see `services::books`). Multiple catalogs may coexist, which
//! keeps the core directly constructible in tests.

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};
use thiserror::Error;

use crate::models::book::{Book, BookDraft, BookFilter, BookSummary};

/// Length of generated book identifiers
const ID_LENGTH: usize = 16;

/// Errors produced by catalog operations.
///
/// All variants are expected, caller-recoverable conditions returned as
/// values; no operation leaves the catalog partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("please provide the book name")]
    MissingName,

    #[error("readPage ({read_page}) must not be greater than pageCount ({page_count})")]
    PageOverflow { read_page: u32, page_count: u32 },

    #[error("no book found with id {0}")]
    NotFound(String),
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// In-memory ordered collection of book records
#[derive(Debug, Default)]
pub struct BookCatalog {
    books: Vec<Book>,
}

impl BookCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate a draft and return its non-empty name.
    /// Name presence is checked before page consistency; the first failure wins.
    fn validate(draft: &BookDraft) -> CatalogResult<String> {
        let name = draft
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(CatalogError::MissingName)?;

        if draft.read_page > draft.page_count {
            return Err(CatalogError::PageOverflow {
                read_page: draft.read_page,
                page_count: draft.page_count,
            });
        }

        Ok(name.to_string())
    }

    /// Generate a fresh 16-character alphanumeric identifier.
    /// Uniqueness against live records is checked explicitly; on the rare
    /// collision the token is regenerated.
    fn generate_id(&self) -> String {
        loop {
            let id: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(ID_LENGTH)
                .map(char::from)
                .collect();

            if !self.books.iter().any(|book| book.id == id) {
                return id;
            }
        }
    }

    /// Add a new record to the end of the catalog and return its identifier.
    /// Immediately after success, `get` with the returned id succeeds.
    pub fn create(&mut self, draft: BookDraft) -> CatalogResult<String> {
        let name = Self::validate(&draft)?;
        let id = self.generate_id();
        let now = Utc::now();

        self.books.push(Book {
            id: id.clone(),
            name,
            year: draft.year,
            author: draft.author,
            summary: draft.summary,
            publisher: draft.publisher,
            page_count: draft.page_count,
            read_page: draft.read_page,
            finished: draft.read_page == draft.page_count,
            reading: draft.reading,
            inserted_at: now,
            updated_at: now,
        });

        Ok(id)
    }

    /// List summaries in insertion order, applying at most one filter.
    ///
    /// Each supplied filter replaces the working result with a scan of the
    /// full collection, in the order name, reading, finished, so when several
    /// are supplied the last one wins. This sequential-override precedence is
    /// part of the published contract and is pinned by tests; do not change
    /// it to an intersection.
    pub fn list(&self, filter: &BookFilter) -> Vec<BookSummary> {
        if self.books.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<&Book> = self.books.iter().collect();

        if let Some(ref name) = filter.name {
            let needle = name.to_lowercase();
            matches = self
                .books
                .iter()
                .filter(|book| book.name.to_lowercase().contains(&needle))
                .collect();
        }

        if let Some(reading) = filter.reading {
            matches = self
                .books
                .iter()
                .filter(|book| book.reading == reading)
                .collect();
        }

        if let Some(finished) = filter.finished {
            matches = self
                .books
                .iter()
                .filter(|book| book.finished == finished)
                .collect();
        }

        matches.into_iter().map(BookSummary::from).collect()
    }

    /// Get the full record for an identifier
    pub fn get(&self, id: &str) -> CatalogResult<&Book> {
        self.books
            .iter()
            .find(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Replace every mutable field of an existing record in place.
    ///
    /// Validation runs before the existence check, mirroring create.
    /// `id` and `inserted_at` are preserved; `finished` is recomputed and
    /// `updated_at` refreshed. On any error nothing is mutated.
    pub fn update(&mut self, id: &str, draft: BookDraft) -> CatalogResult<()> {
        let name = Self::validate(&draft)?;

        let book = self
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        book.name = name;
        book.year = draft.year;
        book.author = draft.author;
        book.summary = draft.summary;
        book.publisher = draft.publisher;
        book.page_count = draft.page_count;
        book.read_page = draft.read_page;
        book.finished = draft.read_page == draft.page_count;
        book.reading = draft.reading;
        book.updated_at = Utc::now();

        Ok(())
    }

    /// Remove a record, preserving the order of the remaining ones
    pub fn delete(&mut self, id: &str) -> CatalogResult<()> {
        let index = self
            .books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        self.books.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: Some(name.to_string()),
            year: 1965,
            author: "Frank Herbert".to_string(),
            summary: "Spice and sand".to_string(),
            publisher: "Chilton Books".to_string(),
            page_count: 412,
            read_page: 120,
            reading: true,
        }
    }

    #[test]
    fn create_returns_id_and_get_round_trips() {
        let mut catalog = BookCatalog::new();
        let input = draft("Dune");

        let id = catalog.create(input.clone()).unwrap();
        assert_eq!(id.len(), 16);

        let book = catalog.get(&id).unwrap();
        assert_eq!(book.id, id);
        assert_eq!(book.name, "Dune");
        assert_eq!(book.year, input.year);
        assert_eq!(book.author, input.author);
        assert_eq!(book.summary, input.summary);
        assert_eq!(book.publisher, input.publisher);
        assert_eq!(book.page_count, input.page_count);
        assert_eq!(book.read_page, input.read_page);
        assert_eq!(book.reading, input.reading);
        assert_eq!(book.inserted_at, book.updated_at);
    }

    #[test]
    fn create_issues_unique_ids() {
        let mut catalog = BookCatalog::new();
        let mut ids = std::collections::HashSet::new();

        for i in 0..200 {
            let id = catalog.create(draft(&format!("Book {i}"))).unwrap();
            assert!(ids.insert(id), "duplicate id issued");
        }
        assert_eq!(catalog.len(), 200);
    }

    #[test]
    fn finished_is_derived_from_pages() {
        let mut catalog = BookCatalog::new();

        let mut done = draft("Dune");
        done.read_page = done.page_count;
        let id = catalog.create(done).unwrap();
        assert!(catalog.get(&id).unwrap().finished);

        let id = catalog.create(draft("Dune Messiah")).unwrap();
        assert!(!catalog.get(&id).unwrap().finished);

        // Zero pages of a zero-page book counts as finished.
        let mut empty = draft("Pamphlet");
        empty.page_count = 0;
        empty.read_page = 0;
        let id = catalog.create(empty).unwrap();
        assert!(catalog.get(&id).unwrap().finished);
    }

    #[test]
    fn create_rejects_missing_name() {
        let mut catalog = BookCatalog::new();

        let mut input = draft("x");
        input.name = None;
        assert_eq!(catalog.create(input), Err(CatalogError::MissingName));

        let mut input = draft("x");
        input.name = Some(String::new());
        assert_eq!(catalog.create(input), Err(CatalogError::MissingName));

        assert!(catalog.is_empty());
    }

    #[test]
    fn create_rejects_read_page_overflow() {
        let mut catalog = BookCatalog::new();

        let mut input = draft("Dune");
        input.page_count = 100;
        input.read_page = 150;

        assert_eq!(
            catalog.create(input),
            Err(CatalogError::PageOverflow {
                read_page: 150,
                page_count: 100,
            })
        );
        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_name_wins_over_page_overflow() {
        let mut catalog = BookCatalog::new();

        let mut input = draft("x");
        input.name = None;
        input.page_count = 100;
        input.read_page = 150;

        assert_eq!(catalog.create(input), Err(CatalogError::MissingName));
    }

    #[test]
    fn list_empty_catalog_ignores_filters() {
        let catalog = BookCatalog::new();

        assert!(catalog.list(&BookFilter::default()).is_empty());
        assert!(catalog
            .list(&BookFilter {
                name: Some("dune".to_string()),
                reading: Some(true),
                finished: Some(false),
            })
            .is_empty());
    }

    #[test]
    fn list_returns_summaries_in_insertion_order() {
        let mut catalog = BookCatalog::new();
        let first = catalog.create(draft("Dune")).unwrap();
        let second = catalog.create(draft("Foundation")).unwrap();

        let listed = catalog.list(&BookFilter::default());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[0].name, "Dune");
        assert_eq!(listed[0].publisher, "Chilton Books");
        assert_eq!(listed[1].id, second);
    }

    #[test]
    fn list_name_filter_is_case_insensitive_substring() {
        let mut catalog = BookCatalog::new();
        catalog.create(draft("Dune")).unwrap();
        catalog.create(draft("Foundation")).unwrap();

        let filter = BookFilter {
            name: Some("dun".to_string()),
            ..Default::default()
        };
        let listed = catalog.list(&filter);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Dune");
    }

    #[test]
    fn list_reading_and_finished_filters_match_exactly() {
        let mut catalog = BookCatalog::new();

        let mut reading = draft("Dune");
        reading.reading = true;
        catalog.create(reading).unwrap();

        let mut finished = draft("Foundation");
        finished.reading = false;
        finished.read_page = finished.page_count;
        catalog.create(finished).unwrap();

        let listed = catalog.list(&BookFilter {
            reading: Some(true),
            ..Default::default()
        });
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Dune");

        let listed = catalog.list(&BookFilter {
            finished: Some(true),
            ..Default::default()
        });
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Foundation");
    }

    #[test]
    fn list_last_supplied_filter_wins() {
        let mut catalog = BookCatalog::new();

        let mut dune = draft("Dune");
        dune.read_page = dune.page_count; // finished
        catalog.create(dune).unwrap();
        catalog.create(draft("Foundation")).unwrap(); // unfinished

        // Name matches only "Dune", but the finished=false filter is applied
        // last against the full collection and overrides it.
        let listed = catalog.list(&BookFilter {
            name: Some("dune".to_string()),
            reading: None,
            finished: Some(false),
        });
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Foundation");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let catalog = BookCatalog::new();
        assert_eq!(
            catalog.get("missing"),
            Err(CatalogError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn update_replaces_fields_and_recomputes_finished() {
        let mut catalog = BookCatalog::new();
        let id = catalog.create(draft("Dune")).unwrap();
        let inserted_at = catalog.get(&id).unwrap().inserted_at;

        let mut input = draft("Dune (revised)");
        input.read_page = input.page_count;
        input.reading = false;
        catalog.update(&id, input).unwrap();

        let book = catalog.get(&id).unwrap();
        assert_eq!(book.name, "Dune (revised)");
        assert!(book.finished);
        assert!(!book.reading);
        assert_eq!(book.id, id);
        assert_eq!(book.inserted_at, inserted_at);
        assert!(book.updated_at >= inserted_at);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn update_validates_before_existence_check() {
        let mut catalog = BookCatalog::new();

        let mut input = draft("x");
        input.name = None;
        assert_eq!(
            catalog.update("missing", input),
            Err(CatalogError::MissingName)
        );
    }

    #[test]
    fn update_unknown_id_is_not_found_and_leaves_catalog_unchanged() {
        let mut catalog = BookCatalog::new();
        let id = catalog.create(draft("Dune")).unwrap();
        let before = catalog.get(&id).unwrap().clone();

        assert_eq!(
            catalog.update("missing", draft("Other")),
            Err(CatalogError::NotFound("missing".to_string()))
        );
        assert_eq!(catalog.get(&id).unwrap(), &before);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn update_rejects_invalid_draft_without_mutation() {
        let mut catalog = BookCatalog::new();
        let id = catalog.create(draft("Dune")).unwrap();
        let before = catalog.get(&id).unwrap().clone();

        let mut input = draft("Dune");
        input.page_count = 100;
        input.read_page = 150;
        assert!(matches!(
            catalog.update(&id, input),
            Err(CatalogError::PageOverflow { .. })
        ));
        assert_eq!(catalog.get(&id).unwrap(), &before);
    }

    #[test]
    fn delete_removes_record_and_preserves_order() {
        let mut catalog = BookCatalog::new();
        let first = catalog.create(draft("Dune")).unwrap();
        let second = catalog.create(draft("Foundation")).unwrap();
        let third = catalog.create(draft("Hyperion")).unwrap();

        catalog.delete(&second).unwrap();

        let listed = catalog.list(&BookFilter::default());
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first);
        assert_eq!(listed[1].id, third);

        assert_eq!(
            catalog.get(&second),
            Err(CatalogError::NotFound(second.clone()))
        );
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut catalog = BookCatalog::new();
        catalog.create(draft("Dune")).unwrap();

        assert_eq!(
            catalog.delete("missing"),
            Err(CatalogError::NotFound("missing".to_string()))
        );
        assert_eq!(catalog.len(), 1);
    }
}
