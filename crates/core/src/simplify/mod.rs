//! Search-term simplification.
//!
//! Catalog titles and author names are often noisier than what indexers
//! list: full subtitles, series prefixes, edition annotations, middle
//! initials, `Last, First` ordering. The [`Simplifier`] reduces them to forms
//! more likely to appear verbatim in a release name.
//!
//! Every heuristic answers with a [`Simplification`]: either a cleaner,
//! non-empty text or [`Simplification::Unchanged`], meaning the original
//! should be used as-is.
//!
//! # Example
//!
//! ```
//! use bookseek_core::simplify::{simplify_author, simplify_title};
//!
//! assert_eq!(
//!     simplify_title("The Martian (Unabridged)", None, None).as_deref(),
//!     Some("The Martian")
//! );
//! assert_eq!(
//!     simplify_author("McCammon, Robert R.").as_deref(),
//!     Some("Robert McCammon")
//! );
//! ```

mod author;
mod rules;
mod title;

pub use rules::SimplifierRules;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building a [`Simplifier`] from a rule table.
#[derive(Debug, Error)]
pub enum SimplifyError {
    #[error("Invalid {rule} pattern: {message}")]
    InvalidPattern { rule: &'static str, message: String },

    #[error("Rule vocabulary is empty: {0}")]
    EmptyVocabulary(&'static str),
}

/// Outcome of a simplification heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "text", rename_all = "snake_case")]
pub enum Simplification {
    /// A cleaner search form. Never empty.
    Simplified(String),
    /// No improvement found; use the original text.
    Unchanged,
}

impl Simplification {
    /// Wrap a candidate, falling back to `Unchanged` when it is empty or
    /// identical to the original.
    pub(crate) fn from_candidate(candidate: &str, original: &str) -> Self {
        let candidate = candidate.trim();
        if candidate.is_empty() || candidate == original.trim() {
            Self::Unchanged
        } else {
            Self::Simplified(candidate.to_string())
        }
    }

    pub fn is_simplified(&self) -> bool {
        matches!(self, Self::Simplified(_))
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Simplified(text) => Some(text),
            Self::Unchanged => None,
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Simplified(text) => Some(text),
            Self::Unchanged => None,
        }
    }

    /// The simplified text, or `original` when nothing changed.
    pub fn or_original(self, original: &str) -> String {
        self.into_option().unwrap_or_else(|| original.to_string())
    }
}

/// Title and author simplifier driven by a [`SimplifierRules`] table.
#[derive(Debug, Clone)]
pub struct Simplifier {
    rules: SimplifierRules,
    series_marker: Regex,
    forward_name: Regex,
    inverted_name: Regex,
    trailing_annotation: Regex,
}

impl Simplifier {
    /// Compile the patterns described by `rules`.
    pub fn new(rules: SimplifierRules) -> Result<Self, SimplifyError> {
        if rules.series_markers.is_empty() {
            return Err(SimplifyError::EmptyVocabulary("series_markers"));
        }

        let series_marker = compile("series marker", &rules.series_marker_pattern())?;
        let forward_name = compile("forward name", &rules.forward_name_pattern())?;
        let inverted_name = compile("inverted name", &rules.inverted_name_pattern())?;
        let trailing_annotation =
            compile("trailing annotation", rules.trailing_annotation_pattern())?;

        Ok(Self {
            rules,
            series_marker,
            forward_name,
            inverted_name,
            trailing_annotation,
        })
    }

    pub fn rules(&self) -> &SimplifierRules {
        &self.rules
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, SimplifyError> {
    Regex::new(pattern).map_err(|e| SimplifyError::InvalidPattern {
        rule,
        message: e.to_string(),
    })
}

static DEFAULT_SIMPLIFIER: Lazy<Simplifier> = Lazy::new(|| {
    Simplifier::new(SimplifierRules::default()).expect("default simplifier rules must compile")
});

/// The process-wide simplifier built from the default rule table.
pub fn default_simplifier() -> &'static Simplifier {
    &DEFAULT_SIMPLIFIER
}

/// Simplify a catalog title with the default rules.
///
/// Returns `None` when the title should be searched unmodified.
pub fn simplify_title(
    title: &str,
    subtitle: Option<&str>,
    series_name: Option<&str>,
) -> Option<String> {
    DEFAULT_SIMPLIFIER
        .simplify_title(title, subtitle, series_name)
        .into_option()
}

/// Simplify an author name with the default rules.
///
/// Returns `None` when the name should be searched unmodified.
pub fn simplify_author(author: &str) -> Option<String> {
    DEFAULT_SIMPLIFIER.simplify_author(author).into_option()
}
