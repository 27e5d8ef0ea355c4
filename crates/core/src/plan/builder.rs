//! Release search plan construction.

use std::collections::HashSet;

use tracing::debug;

use super::types::{
    normalize_codes, LanguageSelection, ReleaseSearchPlan, TitleGroup, TitleVariant,
};
use crate::config::SearchConfig;
use crate::metadata::{normalize_isbn, normalize_language, BookMetadata};

/// Turns book metadata into a [`ReleaseSearchPlan`].
///
/// The default language list and fallback primary language are injected at
/// construction; building a plan performs no I/O and cannot fail.
#[derive(Debug, Clone)]
pub struct ReleaseSearchPlanner {
    /// `None` when the defaults are unrestricted.
    default_languages: Option<Vec<String>>,
    primary_language: String,
}

impl ReleaseSearchPlanner {
    /// Create a planner.
    ///
    /// An empty default list, or one containing `"all"`, makes unrestricted
    /// search the default.
    pub fn new<I, S>(default_languages: I, primary_language: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default_languages =
            normalize_codes(default_languages).filter(|codes| !codes.is_empty());
        let primary_language: String = primary_language.into();
        Self {
            default_languages,
            primary_language: primary_language.trim().to_lowercase(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(&config.default_languages, config.primary_language.as_str())
    }

    pub fn default_languages(&self) -> Option<&[String]> {
        self.default_languages.as_deref()
    }

    pub fn primary_language(&self) -> &str {
        &self.primary_language
    }

    /// Resolve a selection to a preference order, `None` meaning unrestricted.
    pub fn resolve_languages(&self, selection: &LanguageSelection) -> Option<Vec<String>> {
        match selection {
            LanguageSelection::All => None,
            LanguageSelection::Default => self.default_languages.clone(),
            LanguageSelection::Explicit(codes) => match normalize_codes(codes) {
                None => None,
                Some(codes) if codes.is_empty() => self.default_languages.clone(),
                Some(codes) => Some(codes),
            },
        }
    }

    /// Build the search plan for `book`.
    ///
    /// A non-blank `manual_query` replaces every derived query and suppresses
    /// identifier searches; the languages are still resolved so callers can
    /// filter results by them.
    pub fn build_plan(
        &self,
        book: &BookMetadata,
        languages: LanguageSelection,
        manual_query: Option<&str>,
    ) -> ReleaseSearchPlan {
        let languages = self.resolve_languages(&languages);

        if let Some(query) = manual_query.filter(|q| !q.trim().is_empty()) {
            debug!(query, languages = ?languages, "Built manual release search plan");
            return ReleaseSearchPlan {
                languages,
                isbn_candidates: Vec::new(),
                manual_query: Some(query.to_string()),
                author: None,
                title_variants: vec![TitleVariant::new(query, None, None)],
                grouped_title_variants: vec![TitleGroup {
                    title: query.to_string(),
                    languages: None,
                }],
            };
        }

        let author = book.primary_search_author();
        let title_variants = match &languages {
            None => vec![TitleVariant::new(book.primary_search_title(), author, None)],
            Some(codes) => self.language_variants(book, codes, author),
        };
        let grouped_title_variants = group_variants(&title_variants);

        let plan = ReleaseSearchPlan {
            languages,
            isbn_candidates: isbn_candidates(book),
            manual_query: None,
            author: author.map(str::to_string),
            title_variants,
            grouped_title_variants,
        };

        debug!(
            title = %book.title,
            languages = ?plan.languages,
            isbns = plan.isbn_candidates.len(),
            variants = plan.title_variants.len(),
            groups = plan.grouped_title_variants.len(),
            "Built release search plan"
        );

        plan
    }

    /// One variant per language with a known title, skipping repeated queries.
    fn language_variants(
        &self,
        book: &BookMetadata,
        languages: &[String],
        author: Option<&str>,
    ) -> Vec<TitleVariant> {
        let primary = book
            .primary_language
            .as_deref()
            .map(normalize_language)
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| self.primary_language.clone());

        let mut seen = HashSet::new();
        let mut variants = Vec::new();

        for language in languages {
            let title = if *language == primary {
                book.primary_title_in(language)
            } else {
                match book.title_in(language) {
                    Some(title) => title,
                    None => {
                        debug!(language = %language, "No title for language, skipping");
                        continue;
                    }
                }
            };

            let variant = TitleVariant::new(title, author, Some(vec![language.clone()]));
            if seen.insert(variant.query.clone()) {
                variants.push(variant);
            }
        }

        if variants.is_empty() {
            debug!(
                primary = %primary,
                "No requested language has a title, falling back to primary title"
            );
            variants.push(TitleVariant::new(
                book.primary_title_in(&primary),
                author,
                Some(vec![primary]),
            ));
        }

        variants
    }
}

/// Identifier queries, ISBN-13 first, without blanks or repeats.
fn isbn_candidates(book: &BookMetadata) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    for isbn in [&book.isbn_13, &book.isbn_10].into_iter().flatten() {
        if let Some(isbn) = normalize_isbn(isbn) {
            if !candidates.contains(&isbn) {
                candidates.push(isbn);
            }
        }
    }
    candidates
}

/// Collapse variants sharing an identical title, keeping first-seen order.
fn group_variants(variants: &[TitleVariant]) -> Vec<TitleGroup> {
    let mut groups: Vec<TitleGroup> = Vec::new();

    for variant in variants {
        match groups.iter_mut().find(|group| group.title == variant.title) {
            Some(group) => {
                if let (Some(merged), Some(languages)) =
                    (group.languages.as_mut(), variant.languages.as_ref())
                {
                    for language in languages {
                        if !merged.contains(language) {
                            merged.push(language.clone());
                        }
                    }
                }
            }
            None => groups.push(TitleGroup {
                title: variant.title.clone(),
                languages: variant.languages.clone(),
            }),
        }
    }

    groups
}
