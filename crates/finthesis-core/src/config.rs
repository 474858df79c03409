use crate::app_config::{
    AppConfig, DEFAULT_LOG_LEVEL, DEFAULT_MAX_SENTENCES, DEFAULT_MIN_SENTENCE_WORDS,
    DEFAULT_OVERLAP_THRESHOLD, DEFAULT_TOP_N,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| invalid(var, e.to_string())),
            Err(_) => Ok(default),
        }
    };

    let log_level = lookup("FINTHESIS_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

    let categories_path = lookup("FINTHESIS_CATEGORIES_PATH")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from);

    let max_sentences = parse_usize("FINTHESIS_MAX_SENTENCES", DEFAULT_MAX_SENTENCES)?;
    let min_sentence_words =
        parse_usize("FINTHESIS_MIN_SENTENCE_WORDS", DEFAULT_MIN_SENTENCE_WORDS)?;
    let top_n = parse_usize("FINTHESIS_TOP_N", DEFAULT_TOP_N)?;

    let overlap_threshold = match lookup("FINTHESIS_OVERLAP_THRESHOLD") {
        Ok(raw) => parse_overlap_threshold(&raw)
            .map_err(|reason| invalid("FINTHESIS_OVERLAP_THRESHOLD", reason))?,
        Err(_) => DEFAULT_OVERLAP_THRESHOLD,
    };

    Ok(AppConfig {
        log_level,
        categories_path,
        max_sentences,
        overlap_threshold,
        min_sentence_words,
        top_n,
    })
}

/// Parse an overlap ratio, accepting only finite values in `[0, 1]`.
fn parse_overlap_threshold(raw: &str) -> Result<f64, String> {
    let value = raw.trim().parse::<f64>().map_err(|e| e.to_string())?;
    validate_overlap_threshold(value)
}

/// Check an overlap ratio already parsed elsewhere (e.g. from a CLI flag).
///
/// # Errors
///
/// Returns a human-readable reason when `value` is NaN or outside `[0, 1]`.
pub fn validate_overlap_threshold(value: f64) -> Result<f64, String> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside [0, 1]"))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
