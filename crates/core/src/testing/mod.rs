//! Testing utilities and fixtures.
//!
//! Shared by unit tests, integration tests and the server test suite.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookseek_core::testing::{fixtures, seeded_provider};
//!
//! let provider = seeded_provider().await;
//! let book = provider.lookup(fixtures::MISTBORN_ID).await?;
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::metadata::{BookMetadata, MetadataError, MetadataProvider, StaticMetadataProvider};
use crate::simplify::default_simplifier;

/// A static provider holding every fixture book under its fixture id.
pub async fn seeded_provider() -> StaticMetadataProvider {
    let provider = StaticMetadataProvider::new(default_simplifier().clone());
    for (id, book) in fixtures::catalog() {
        provider.insert(id, book).await;
    }
    provider
}

/// Wraps a provider and records every catalog id looked up through it.
///
/// The log grows with each lookup; keep it to tests.
#[derive(Debug)]
pub struct RecordingMetadataProvider<P> {
    inner: P,
    lookups: Arc<RwLock<Vec<String>>>,
}

impl<P: MetadataProvider> RecordingMetadataProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            lookups: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Catalog ids looked up so far, in order.
    pub async fn recorded_lookups(&self) -> Vec<String> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl<P: MetadataProvider> MetadataProvider for RecordingMetadataProvider<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn lookup(&self, catalog_id: &str) -> Result<BookMetadata, MetadataError> {
        self.lookups.write().await.push(catalog_id.to_string());
        self.inner.lookup(catalog_id).await
    }
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::metadata::BookMetadata;

    pub const MISTBORN_ID: &str = "OL-MISTBORN";
    pub const CUCKOOS_EGG_ID: &str = "OL-CUCKOO";
    pub const DUNE_ID: &str = "OL-DUNE";

    /// Mistborn with an English and a Hungarian edition, search terms set.
    pub fn mistborn() -> BookMetadata {
        BookMetadata::new("Mistborn: The Final Empire")
            .with_subtitle("The Final Empire")
            .with_series_name("Mistborn")
            .with_authors(["Brandon Sanderson"])
            .with_title_in("en", "Mistborn: The Final Empire")
            .with_title_in("hu", "A végső birodalom")
            .with_search_title("The Final Empire")
            .with_search_author("Brandon Sanderson")
            .with_isbn_13("9780765311788")
    }

    /// A book whose subtitle is descriptive; search terms left for the simplifier.
    pub fn cuckoos_egg() -> BookMetadata {
        BookMetadata::new(
            "The Cuckoo's Egg: Tracking a Spy Through the Maze of Computer Espionage",
        )
        .with_subtitle("Tracking a Spy Through the Maze of Computer Espionage")
        .with_authors(["Stoll, Clifford"])
        .with_isbn_13("9781416507789")
        .with_isbn_10("1416507787")
    }

    /// A plain title in several languages that share the same text.
    pub fn dune() -> BookMetadata {
        BookMetadata::new("Dune")
            .with_authors(["Frank Herbert"])
            .with_title_in("de", "Der Wüstenplanet")
            .with_title_in("fr", "Dune")
            .with_title_in("it", "Dune")
    }

    /// Every fixture keyed by its catalog id.
    pub fn catalog() -> Vec<(&'static str, BookMetadata)> {
        vec![
            (MISTBORN_ID, mistborn()),
            (CUCKOOS_EGG_ID, cuckoos_egg()),
            (DUNE_ID, dune()),
        ]
    }
}
