//! In-memory metadata provider.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{BookMetadata, MetadataError, MetadataProvider};
use crate::simplify::Simplifier;

/// One entry of a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub book: BookMetadata,
}

/// Metadata provider backed by an in-memory map.
///
/// Books are run through the simplifier when added, so lookups return
/// metadata with search terms filled in, as a network provider would.
#[derive(Debug)]
pub struct StaticMetadataProvider {
    simplifier: Simplifier,
    books: Arc<RwLock<HashMap<String, BookMetadata>>>,
}

impl StaticMetadataProvider {
    pub fn new(simplifier: Simplifier) -> Self {
        Self {
            simplifier,
            books: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a provider from a JSON array of [`CatalogEntry`].
    pub fn from_json(json: &str, simplifier: Simplifier) -> Result<Self, MetadataError> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| MetadataError::ParseError(e.to_string()))?;

        let books = entries
            .into_iter()
            .map(|entry| (entry.id, entry.book.with_search_terms(&simplifier)))
            .collect::<HashMap<_, _>>();

        Ok(Self {
            simplifier,
            books: Arc::new(RwLock::new(books)),
        })
    }

    /// Load a catalog file.
    pub fn from_file(path: &Path, simplifier: Simplifier) -> Result<Self, MetadataError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            MetadataError::Unavailable(format!("cannot read {}: {}", path.display(), e))
        })?;
        let provider = Self::from_json(&json, simplifier)?;
        info!(path = %path.display(), "Loaded static metadata catalog");
        Ok(provider)
    }

    /// Add or replace a book.
    pub async fn insert(&self, catalog_id: impl Into<String>, book: BookMetadata) {
        let book = book.with_search_terms(&self.simplifier);
        self.books.write().await.insert(catalog_id.into(), book);
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl MetadataProvider for StaticMetadataProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn lookup(&self, catalog_id: &str) -> Result<BookMetadata, MetadataError> {
        let book = self.books.read().await.get(catalog_id).cloned();
        match book {
            Some(book) => {
                debug!(catalog_id, title = %book.title, "Metadata lookup hit");
                Ok(book)
            }
            None => Err(MetadataError::NotFound(catalog_id.to_string())),
        }
    }
}
