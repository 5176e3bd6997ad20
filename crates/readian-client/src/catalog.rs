//! Content catalog collaborator seam
//!
//! [`ContentCatalog`] abstracts the content repository that serves book
//! classification attributes. A fetch failure here means the evaluator is
//! never called for that book; presentation shows a loading/error state
//! instead.

use async_trait::async_trait;
use readian_core::{BookId, ContentItem, ReadianError, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Supplies a book's classification attributes
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// The classification attributes for one book
    ///
    /// Fails with [`ReadianError::NotFound`] when the book does not
    /// exist, or [`ReadianError::Network`] when the backend call fails.
    async fn content_descriptor(&self, id: &BookId) -> Result<ContentItem>;
}

/// An in-memory catalog, for tests and local tooling
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    books: RwLock<HashMap<BookId, ContentItem>>,
}

impl InMemoryCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a book's classification
    pub async fn insert(&self, id: BookId, item: ContentItem) {
        self.books.write().await.insert(id, item);
    }
}

#[async_trait]
impl ContentCatalog for InMemoryCatalog {
    async fn content_descriptor(&self, id: &BookId) -> Result<ContentItem> {
        self.books
            .read()
            .await
            .get(id)
            .copied()
            .ok_or_else(|| ReadianError::not_found(format!("no book {id}")))
    }
}
