//! Book metadata and the provider seam it arrives through.
//!
//! Metadata providers look books up by an external catalog id and hand back
//! a [`BookMetadata`] with search terms already simplified. Only the
//! in-memory [`StaticMetadataProvider`] lives here; network-backed providers
//! implement [`MetadataProvider`] elsewhere.

mod static_provider;
mod types;

pub use static_provider::{CatalogEntry, StaticMetadataProvider};
pub use types::*;
pub(crate) use types::normalize_language;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when looking up book metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// No book with this catalog id.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The provider could not be reached or failed to answer.
    #[error("Metadata provider unavailable: {0}")]
    Unavailable(String),

    /// Provider data could not be read.
    #[error("Failed to parse metadata: {0}")]
    ParseError(String),
}

/// Trait for metadata provider clients.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Name of this provider for logging.
    fn name(&self) -> &str;

    /// Look a book up by its catalog id.
    async fn lookup(&self, catalog_id: &str) -> Result<BookMetadata, MetadataError>;
}
