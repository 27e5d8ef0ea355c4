use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Default language list is non-empty and has no blank codes
/// - Primary language is a concrete code
/// - Simplifier thresholds and vocabulary are usable
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    // Search validation
    if config.search.default_languages.is_empty() {
        return Err(ConfigError::ValidationError(
            "search.default_languages cannot be empty (use [\"all\"] for unrestricted)"
                .to_string(),
        ));
    }
    if config
        .search
        .default_languages
        .iter()
        .any(|code| code.trim().is_empty())
    {
        return Err(ConfigError::ValidationError(
            "search.default_languages cannot contain blank codes".to_string(),
        ));
    }
    let primary = config.search.primary_language.trim();
    if primary.is_empty() || primary.eq_ignore_ascii_case("all") {
        return Err(ConfigError::ValidationError(
            "search.primary_language must be a language code".to_string(),
        ));
    }

    // Simplifier validation
    if config.simplifier.max_short_subtitle_words == 0 {
        return Err(ConfigError::ValidationError(
            "simplifier.max_short_subtitle_words must be at least 1".to_string(),
        ));
    }
    if config.simplifier.series_markers.is_empty() {
        return Err(ConfigError::ValidationError(
            "simplifier.series_markers cannot be empty".to_string(),
        ));
    }

    Ok(())
}
