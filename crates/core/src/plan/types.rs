//! Types for release search plans.

use serde::{Deserialize, Serialize};

/// Language code that requests unrestricted search.
pub const ALL_LANGUAGES: &str = "all";

/// Which languages a search should cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSelection {
    /// Use the configured default preference list.
    #[default]
    Default,
    /// No language restriction.
    All,
    /// Explicit preference order.
    Explicit(Vec<String>),
}

impl LanguageSelection {
    /// Interpret a request's optional language list.
    ///
    /// `None` or an empty list selects the defaults, any `"all"` entry
    /// selects unrestricted search.
    pub fn from_request(languages: Option<Vec<String>>) -> Self {
        match languages {
            Some(codes) => Self::from_codes(codes),
            None => Self::Default,
        }
    }

    /// Interpret a comma-separated list such as `en,hu`.
    pub fn from_csv(list: &str) -> Self {
        Self::from_codes(list.split(','))
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match normalize_codes(codes) {
            None => Self::All,
            Some(codes) if codes.is_empty() => Self::Default,
            Some(codes) => Self::Explicit(codes),
        }
    }
}

/// Trim, lowercase and deduplicate language codes, keeping first-seen order.
///
/// Returns `None` when the list contains the `"all"` sentinel.
pub(crate) fn normalize_codes<I, S>(codes: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for code in codes {
        let code = code.as_ref().trim().to_lowercase();
        if code.is_empty() {
            continue;
        }
        if code == ALL_LANGUAGES {
            return None;
        }
        if !normalized.contains(&code) {
            normalized.push(code);
        }
    }
    Some(normalized)
}

/// One concrete free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleVariant {
    /// Full query string sent to the indexer.
    pub query: String,
    /// Title portion of the query.
    pub title: String,
    /// Language this variant stands for; `None` when unrestricted or manual.
    pub languages: Option<Vec<String>>,
}

impl TitleVariant {
    pub(crate) fn new(title: &str, author: Option<&str>, languages: Option<Vec<String>>) -> Self {
        Self {
            query: compose_query(title, author),
            title: title.to_string(),
            languages,
        }
    }
}

/// Variants that share an identical title, with the languages that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleGroup {
    pub title: String,
    pub languages: Option<Vec<String>>,
}

/// How a release source walks the free-text part of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// One query per title variant. Higher recall, more calls.
    #[default]
    Expanded,
    /// One query per distinct title. Fewer calls.
    Reduced,
}

/// A query ready for the indexer transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedQuery {
    pub query: String,
    pub languages: Option<Vec<String>>,
}

/// Ordered, deduplicated set of searches for one book.
///
/// Built once per search request; consumers try `isbn_candidates` first, then
/// either `title_variants` or `grouped_title_variants`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSearchPlan {
    /// Resolved preference order; `None` means unrestricted.
    pub languages: Option<Vec<String>>,
    /// Identifier queries, ISBN-13 before ISBN-10.
    pub isbn_candidates: Vec<String>,
    /// Caller-forced query, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_query: Option<String>,
    /// Author text appended to every derived title query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub title_variants: Vec<TitleVariant>,
    pub grouped_title_variants: Vec<TitleGroup>,
}

impl ReleaseSearchPlan {
    pub fn is_manual(&self) -> bool {
        self.manual_query.is_some()
    }

    /// Free-text queries in language-preference order.
    pub fn text_queries(&self, strategy: SearchStrategy) -> Vec<PlannedQuery> {
        match strategy {
            SearchStrategy::Expanded => self
                .title_variants
                .iter()
                .map(|variant| PlannedQuery {
                    query: variant.query.clone(),
                    languages: variant.languages.clone(),
                })
                .collect(),
            SearchStrategy::Reduced => self
                .grouped_title_variants
                .iter()
                .map(|group| PlannedQuery {
                    query: compose_query(&group.title, self.author.as_deref()),
                    languages: group.languages.clone(),
                })
                .collect(),
        }
    }

    /// Number of indexer calls a consumer issues with `strategy`.
    pub fn call_count(&self, strategy: SearchStrategy) -> usize {
        let text = match strategy {
            SearchStrategy::Expanded => self.title_variants.len(),
            SearchStrategy::Reduced => self.grouped_title_variants.len(),
        };
        self.isbn_candidates.len() + text
    }
}

pub(crate) fn compose_query(title: &str, author: Option<&str>) -> String {
    match author {
        Some(author) if !author.is_empty() => format!("{} {}", title, author),
        _ => title.to_string(),
    }
}
