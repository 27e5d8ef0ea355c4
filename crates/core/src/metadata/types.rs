//! Book metadata as supplied by a metadata provider.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

use crate::simplify::Simplifier;

/// Catalog metadata for a single book.
///
/// `search_title` and `search_author` carry the simplified search forms;
/// `None` means the plain `title` / first author is used as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookMetadata {
    /// Canonical catalog title.
    pub title: String,
    /// Catalog subtitle, if the provider separates it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Series the book belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    /// Simplified title for the primary language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_title: Option<String>,
    /// Authors in credit order.
    #[serde(default)]
    pub authors: Vec<String>,
    /// Simplified primary-author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_author: Option<String>,
    /// Titles of translated editions keyed by lowercase language code.
    #[serde(default, deserialize_with = "deserialize_language_keys")]
    pub titles_by_language: HashMap<String, String>,
    /// Lowercase language code of `title`.
    #[serde(
        default,
        deserialize_with = "deserialize_language",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn_13: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn_10: Option<String>,
}

impl BookMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_series_name(mut self, series_name: impl Into<String>) -> Self {
        self.series_name = Some(series_name.into());
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title_in(mut self, language: impl Into<String>, title: impl Into<String>) -> Self {
        let language: String = language.into();
        self.titles_by_language
            .insert(normalize_language(&language), title.into());
        self
    }

    pub fn with_primary_language(mut self, language: impl Into<String>) -> Self {
        let language: String = language.into();
        self.primary_language = Some(normalize_language(&language));
        self
    }

    pub fn with_search_title(mut self, search_title: impl Into<String>) -> Self {
        self.search_title = Some(search_title.into());
        self
    }

    pub fn with_search_author(mut self, search_author: impl Into<String>) -> Self {
        self.search_author = Some(search_author.into());
        self
    }

    pub fn with_isbn_13(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_13 = Some(isbn.into());
        self
    }

    pub fn with_isbn_10(mut self, isbn: impl Into<String>) -> Self {
        self.isbn_10 = Some(isbn.into());
        self
    }

    /// Fill unset search terms from the simplifier.
    ///
    /// Terms the provider already set are left alone, and a term stays `None`
    /// when the simplifier finds nothing to improve.
    pub fn with_search_terms(mut self, simplifier: &Simplifier) -> Self {
        if self.search_title.is_none() {
            self.search_title = simplifier
                .simplify_title(
                    &self.title,
                    self.subtitle.as_deref(),
                    self.series_name.as_deref(),
                )
                .into_option();
        }
        if self.search_author.is_none() {
            self.search_author = self
                .authors
                .first()
                .and_then(|author| simplifier.simplify_author(author).into_option());
        }
        self
    }

    /// Title to search for in the primary language.
    pub fn primary_search_title(&self) -> &str {
        non_blank(self.search_title.as_deref()).unwrap_or(self.title.trim())
    }

    /// Author text appended to title queries, if any.
    pub fn primary_search_author(&self) -> Option<&str> {
        non_blank(self.search_author.as_deref())
            .or_else(|| non_blank(self.authors.first().map(String::as_str)))
    }

    /// Title of the edition in `language`, if one is known.
    ///
    /// Codes match case-insensitively, so entries inserted directly into
    /// `titles_by_language` with mixed-case keys are still found.
    pub fn title_in(&self, language: &str) -> Option<&str> {
        let language = normalize_language(language);
        let title = self.titles_by_language.get(&language).or_else(|| {
            self.titles_by_language
                .iter()
                .find(|(code, _)| normalize_language(code) == language)
                .map(|(_, title)| title)
        });
        non_blank(title.map(String::as_str))
    }

    /// Title to search for when `language` is the book's primary language.
    ///
    /// The simplified search title wins over the catalog entry for that
    /// language, which is usually the unsimplified title again.
    pub fn primary_title_in(&self, language: &str) -> &str {
        non_blank(self.search_title.as_deref())
            .or_else(|| self.title_in(language))
            .unwrap_or(self.title.trim())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Language codes are compared trimmed and lowercased.
pub(crate) fn normalize_language(code: &str) -> String {
    code.trim().to_lowercase()
}

fn deserialize_language_keys<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(code, title)| (normalize_language(&code), title))
        .filter(|(code, _)| !code.is_empty())
        .collect())
}

fn deserialize_language<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|code| normalize_language(&code))
        .filter(|code| !code.is_empty()))
}

/// Strip separators from an ISBN.
///
/// Keeps digits and a trailing check character `X` (uppercased). Returns
/// `None` when nothing usable remains.
pub fn normalize_isbn(raw: &str) -> Option<String> {
    let normalized: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}
