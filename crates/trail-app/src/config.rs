//! Environment configuration.

use std::path::PathBuf;

use crate::error::AppError;

/// Host settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Timeline document path (`TRAIL_DOCUMENT`).
    pub document: PathBuf,
    /// Language version to show first (`TRAIL_VERSION`, default `en`).
    pub version: String,
    /// Overrides the document's cutoff year (`TRAIL_CUTOFF_YEAR`).
    pub cutoff_year: Option<i32>,
    /// Overrides the document's tick interval (`TRAIL_TICK_MS`).
    pub tick_ms: Option<u64>,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `TRAIL_DOCUMENT` is missing or a numeric
    /// override does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let document = lookup("TRAIL_DOCUMENT")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                AppError::Config("TRAIL_DOCUMENT environment variable must be set".to_owned())
            })?;
        let version = lookup("TRAIL_VERSION").unwrap_or_else(|| "en".to_owned());

        let cutoff_year = lookup("TRAIL_CUTOFF_YEAR")
            .map(|value| {
                value.trim().parse::<i32>().map_err(|e| {
                    AppError::Config(format!("TRAIL_CUTOFF_YEAR must be a year: {e}"))
                })
            })
            .transpose()?;

        let tick_ms = lookup("TRAIL_TICK_MS")
            .map(|value| match value.trim().parse::<u64>() {
                Ok(0) => Err(AppError::Config(
                    "TRAIL_TICK_MS must be at least 1".to_owned(),
                )),
                Ok(ms) => Ok(ms),
                Err(e) => Err(AppError::Config(format!(
                    "TRAIL_TICK_MS must be a valid u64: {e}"
                ))),
            })
            .transpose()?;

        Ok(Self {
            document,
            version,
            cutoff_year,
            tick_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_document_is_set() {
        // Arrange / Act
        let config = AppConfig::from_lookup(lookup(&[("TRAIL_DOCUMENT", "demos/timeline.yaml")]))
            .unwrap();

        // Assert
        assert_eq!(config.document, PathBuf::from("demos/timeline.yaml"));
        assert_eq!(config.version, "en");
        assert_eq!(config.cutoff_year, None);
        assert_eq!(config.tick_ms, None);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("TRAIL_DOCUMENT", "t.yaml"),
            ("TRAIL_VERSION", "gr"),
            ("TRAIL_CUTOFF_YEAR", "1990"),
            ("TRAIL_TICK_MS", "50"),
        ]))
        .unwrap();

        assert_eq!(config.version, "gr");
        assert_eq!(config.cutoff_year, Some(1990));
        assert_eq!(config.tick_ms, Some(50));
    }

    #[test]
    fn test_missing_document_is_config_error() {
        let result = AppConfig::from_lookup(lookup(&[]));

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("TRAIL_DOCUMENT")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_numbers_are_config_errors() {
        let bad_year = AppConfig::from_lookup(lookup(&[
            ("TRAIL_DOCUMENT", "t.yaml"),
            ("TRAIL_CUTOFF_YEAR", "soon"),
        ]));
        let zero_tick = AppConfig::from_lookup(lookup(&[
            ("TRAIL_DOCUMENT", "t.yaml"),
            ("TRAIL_TICK_MS", "0"),
        ]));

        assert!(matches!(bad_year, Err(AppError::Config(_))));
        assert!(matches!(zero_tick, Err(AppError::Config(_))));
    }
}
