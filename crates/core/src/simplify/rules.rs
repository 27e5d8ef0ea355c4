//! Rule table for the simplifier heuristics.

use crate::config::SimplifierConfig;

/// Vocabulary and thresholds consulted by the [`Simplifier`](super::Simplifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifierRules {
    /// Subtitles with more words than this are considered descriptive.
    pub max_short_subtitle_words: usize,
    /// Phrases that mark a subtitle as descriptive regardless of length.
    pub connecting_phrases: Vec<String>,
    /// Words that, followed by a number, mark a series/volume suffix.
    pub series_markers: Vec<String>,
    /// Generational suffixes kept at the end of author names.
    pub name_suffixes: Vec<String>,
}

impl Default for SimplifierRules {
    fn default() -> Self {
        Self::from(&SimplifierConfig::default())
    }
}

impl From<&SimplifierConfig> for SimplifierRules {
    fn from(config: &SimplifierConfig) -> Self {
        Self {
            max_short_subtitle_words: config.max_short_subtitle_words,
            connecting_phrases: config.connecting_phrases.clone(),
            series_markers: config.series_markers.clone(),
            name_suffixes: config.name_suffixes.clone(),
        }
    }
}

impl SimplifierRules {
    /// Whether a subtitle reads like a description rather than a title.
    pub fn is_descriptive(&self, subtitle: &str) -> bool {
        let words: Vec<String> = subtitle
            .split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();

        if words.len() > self.max_short_subtitle_words {
            return true;
        }

        self.connecting_phrases.iter().any(|phrase| {
            let needle: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
            !needle.is_empty() && words.windows(needle.len()).any(|w| w == needle.as_slice())
        })
    }

    /// `Book 1`, `Volume II`, `Vol.3` and friends, whole-string, case-insensitive.
    pub(crate) fn series_marker_pattern(&self) -> String {
        let markers = self
            .series_markers
            .iter()
            .map(|marker| marker.trim())
            .filter(|marker| !marker.is_empty())
            .map(|marker| {
                // "vol." may touch its number, bare words may not
                let gap = if marker.ends_with('.') { r"\s*" } else { r"\s+" };
                format!("{}{}", regex_lite::escape(marker), gap)
            })
            .collect::<Vec<_>>()
            .join("|");

        format!(r"(?i)^(?:{markers})(?:\d+|[ivxlcdm]+)$")
    }

    /// `First [Second] M. Last[ Suffix]`
    pub(crate) fn forward_name_pattern(&self) -> String {
        format!(
            r"^(?P<first>[^\s.,]{{2,}}(?:\s+[^\s.,]{{2,}})*)\s+(?P<middle>[A-Z])\.\s*(?P<last>[^\s,]+){}$",
            self.suffix_group()
        )
    }

    /// `Last, First [Second][ M.][ Suffix]`
    ///
    /// Extra first-name tokens are lazy so a bare suffix such as `Jr` is not
    /// taken for a second first name.
    pub(crate) fn inverted_name_pattern(&self) -> String {
        format!(
            r"^(?P<last>[^,]+?),\s*(?P<first>[^\s.,]{{2,}}(?:\s+[^\s.,]{{2,}})*?)(?:\s+(?P<middle>[A-Z])\.)?{}$",
            self.suffix_group()
        )
    }

    /// `Title (Annotation)` where the annotation holds no nested parentheses.
    pub(crate) fn trailing_annotation_pattern(&self) -> &'static str {
        r"^(?P<title>.*?)\s*\([^()]*\)$"
    }

    fn suffix_group(&self) -> String {
        let suffixes = self
            .name_suffixes
            .iter()
            .map(|suffix| suffix.trim())
            .filter(|suffix| !suffix.is_empty())
            .map(regex_lite::escape)
            .collect::<Vec<_>>();

        if suffixes.is_empty() {
            String::new()
        } else {
            format!(r"(?:,?\s+(?P<suffix>{}))?", suffixes.join("|"))
        }
    }
}
