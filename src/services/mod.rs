//! Business logic services

pub mod books;

/// Container for all services
pub struct Services {
    pub books: books::BooksService,
}

impl Services {
    /// Create all services with an empty catalog
    pub fn new() -> Self {
        Self {
            books: books::BooksService::new(),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
