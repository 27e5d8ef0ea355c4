use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub simplifier: SimplifierConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8080
}

/// Release search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Language preference used when a request does not name any languages.
    ///
    /// `["all"]` makes unrestricted search the default.
    #[serde(default = "default_languages")]
    pub default_languages: Vec<String>,
    /// Language assumed for metadata that does not declare its own.
    #[serde(default = "default_primary_language")]
    pub primary_language: String,
    /// Optional JSON file of `{ "id": ..., "book": ... }` entries served by the
    /// static metadata provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_languages: default_languages(),
            primary_language: default_primary_language(),
            catalog_path: None,
        }
    }
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_primary_language() -> String {
    "en".to_string()
}

/// Tunable vocabulary and thresholds for the search-term simplifier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimplifierConfig {
    /// Subtitles with more words than this are considered descriptive.
    #[serde(default = "default_max_short_subtitle_words")]
    pub max_short_subtitle_words: usize,
    /// Phrases that mark a subtitle as descriptive regardless of length.
    #[serde(default = "default_connecting_phrases")]
    pub connecting_phrases: Vec<String>,
    /// Words that, followed by a number, mark a series/volume suffix.
    #[serde(default = "default_series_markers")]
    pub series_markers: Vec<String>,
    /// Generational suffixes kept at the end of author names.
    #[serde(default = "default_name_suffixes")]
    pub name_suffixes: Vec<String>,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            max_short_subtitle_words: default_max_short_subtitle_words(),
            connecting_phrases: default_connecting_phrases(),
            series_markers: default_series_markers(),
            name_suffixes: default_name_suffixes(),
        }
    }
}

fn default_max_short_subtitle_words() -> usize {
    4
}

fn default_connecting_phrases() -> Vec<String> {
    ["through", "of the"].into_iter().map(String::from).collect()
}

fn default_series_markers() -> Vec<String> {
    [
        "book", "volume", "vol", "vol.", "part", "tome", "no", "no.", "number",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_name_suffixes() -> Vec<String> {
    ["Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV"]
        .into_iter()
        .map(String::from)
        .collect()
}
