use std::sync::Arc;

use bookseek_core::{
    BookMetadata, Config, MetadataProvider, ReleaseSearchPlanner, SearchConfig, Simplifier,
    SimplifierConfig,
};

/// Shared application state
pub struct AppState {
    config: Config,
    simplifier: Simplifier,
    planner: ReleaseSearchPlanner,
    metadata: Arc<dyn MetadataProvider>,
}

impl AppState {
    pub fn new(
        config: Config,
        simplifier: Simplifier,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        let planner = ReleaseSearchPlanner::from_config(&config.search);
        Self {
            config,
            simplifier,
            planner,
            metadata,
        }
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.config.search
    }

    pub fn simplifier_config(&self) -> &SimplifierConfig {
        &self.config.simplifier
    }

    pub fn simplifier(&self) -> &Simplifier {
        &self.simplifier
    }

    pub fn planner(&self) -> &ReleaseSearchPlanner {
        &self.planner
    }

    pub fn metadata(&self) -> &dyn MetadataProvider {
        self.metadata.as_ref()
    }

    /// Fill in search terms the client did not precompute.
    pub fn prepare(&self, book: BookMetadata) -> BookMetadata {
        book.with_search_terms(&self.simplifier)
    }
}
