pub mod config;
pub mod metadata;
pub mod plan;
pub mod simplify;
pub mod testing;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SearchConfig,
    ServerConfig, SimplifierConfig,
};
pub use metadata::{
    normalize_isbn, BookMetadata, CatalogEntry, MetadataError, MetadataProvider,
    StaticMetadataProvider,
};
pub use plan::{
    LanguageSelection, PlannedQuery, ReleaseSearchPlan, ReleaseSearchPlanner, SearchStrategy,
    TitleGroup, TitleVariant,
};
pub use simplify::{
    default_simplifier, simplify_author, simplify_title, Simplification, Simplifier,
    SimplifierRules, SimplifyError,
};
