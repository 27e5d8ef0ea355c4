//! Release search planning.
//!
//! Given [`BookMetadata`](crate::metadata::BookMetadata) and a language
//! preference, the [`ReleaseSearchPlanner`] produces a [`ReleaseSearchPlan`]:
//!
//! - `isbn_candidates`: exact-identifier queries, tried first
//! - `title_variants`: one `"{title} {author}"` query per language with a
//!   distinct title, in preference order (expanded search)
//! - `grouped_title_variants`: the same titles collapsed by text, for
//!   release sources that want fewer indexer calls (reduced search)
//!
//! # Example
//!
//! ```
//! use bookseek_core::metadata::BookMetadata;
//! use bookseek_core::plan::{LanguageSelection, ReleaseSearchPlanner};
//!
//! let planner = ReleaseSearchPlanner::new(["en", "hu"], "en");
//! let book = BookMetadata::new("Mistborn: The Final Empire")
//!     .with_search_title("The Final Empire")
//!     .with_title_in("hu", "A végső birodalom")
//!     .with_authors(["Brandon Sanderson"]);
//!
//! let plan = planner.build_plan(&book, LanguageSelection::Default, None);
//! assert_eq!(plan.title_variants[0].query, "The Final Empire Brandon Sanderson");
//! assert_eq!(plan.title_variants[1].query, "A végső birodalom Brandon Sanderson");
//! ```

mod builder;
mod types;

pub use builder::ReleaseSearchPlanner;
pub use types::{
    LanguageSelection, PlannedQuery, ReleaseSearchPlan, SearchStrategy, TitleGroup, TitleVariant,
    ALL_LANGUAGES,
};
