//! The YAML timeline document.

use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use trail_core::error::DomainError;
use trail_path::{CheckpointSet, Coordinate};

use crate::localization::{CheckpointContent, Localization};

/// Which dots a renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerVisibility {
    /// Only dots strictly between the first and last checkpoint.
    #[default]
    BetweenCheckpoints,
    /// Every dot, including those before the first checkpoint.
    All,
}

fn default_dots_per_segment() -> u32 {
    7
}

fn default_tick_interval_ms() -> u64 {
    120
}

fn default_grid_size() -> u32 {
    3
}

/// Grid and animation settings shared by every version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// Where the token enters the timeline.
    pub start: Coordinate,
    /// Checkpoint coordinates in timeline order.
    #[serde(default)]
    pub checkpoints: Vec<Coordinate>,
    /// Dots per segment, counting the step onto the checkpoint.
    #[serde(default = "default_dots_per_segment")]
    pub dots_per_segment: u32,
    /// Delay between token steps.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Entries after this year are not shown.
    #[serde(default)]
    pub cutoff_year: Option<i32>,
    /// Which dots are rendered.
    #[serde(default)]
    pub marker_visibility: MarkerVisibility,
    /// Rows and columns of the square grid checkpoints sit on.
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,
}

impl TimelineSettings {
    /// Checks the numeric settings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `dots_per_segment` or
    /// `tick_interval_ms` is zero, or if `grid_size` is below 2.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.dots_per_segment == 0 {
            return Err(DomainError::Validation(
                "dots_per_segment must be at least 1".to_owned(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(DomainError::Validation(
                "tick_interval_ms must be at least 1".to_owned(),
            ));
        }
        if self.grid_size < 2 {
            return Err(DomainError::Validation(
                "grid_size must be at least 2".to_owned(),
            ));
        }
        Ok(())
    }

    /// The tick interval as a duration.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn dots(&self) -> Result<NonZeroU32, DomainError> {
        NonZeroU32::new(self.dots_per_segment).ok_or_else(|| {
            DomainError::Validation("dots_per_segment must be at least 1".to_owned())
        })
    }
}

/// A complete timeline: settings plus every language version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineDocument {
    /// Grid and animation settings.
    pub settings: TimelineSettings,
    /// Language versions keyed by name (`en`, `gr`, `easy`, ...).
    #[serde(default)]
    pub versions: BTreeMap<String, Localization>,
}

impl TimelineDocument {
    /// Parses and validates a document.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the YAML does not parse and
    /// `DomainError::Validation` if the settings are invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        let document: Self = serde_yaml::from_str(yaml)
            .map_err(|e| DomainError::Infrastructure(format!("invalid timeline document: {e}")))?;
        document.settings.validate()?;
        debug!(
            checkpoints = document.settings.checkpoints.len(),
            versions = document.versions.len(),
            "timeline document parsed"
        );
        Ok(document)
    }

    /// Reads a document from disk.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the file cannot be read or
    /// parsed and `DomainError::Validation` if the settings are invalid.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            DomainError::Infrastructure(format!("cannot read {}: {e}", path.display()))
        })?;
        let document = Self::from_yaml(&yaml)?;
        info!(path = %path.display(), "timeline document loaded");
        Ok(document)
    }

    /// The named language version.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the version does not exist.
    pub fn localization(&self, version: &str) -> Result<&Localization, DomainError> {
        self.versions
            .get(version)
            .ok_or_else(|| DomainError::Validation(format!("unknown version: {version}")))
    }

    /// Per-checkpoint content for `version`, honouring `cutoff_year` or, when
    /// that is `None`, the document's own cutoff.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the version does not exist.
    pub fn content(
        &self,
        version: &str,
        cutoff_year: Option<i32>,
    ) -> Result<CheckpointContent, DomainError> {
        let localization = self.localization(version)?;
        Ok(CheckpointContent::new(
            localization,
            cutoff_year.or(self.settings.cutoff_year),
        ))
    }

    /// The checkpoint set described by the settings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `dots_per_segment` is zero.
    pub fn checkpoint_set(&self) -> Result<CheckpointSet, DomainError> {
        Ok(CheckpointSet {
            start: self.settings.start,
            checkpoints: self.settings.checkpoints.clone(),
            dots_per_segment: self.settings.dots()?,
        })
    }

    /// The checkpoint set limited to as many checkpoints as `content` has
    /// entries, so a cutoff that drops entries also drops their checkpoints.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `dots_per_segment` is zero.
    pub fn checkpoint_set_for(
        &self,
        content: &CheckpointContent,
    ) -> Result<CheckpointSet, DomainError> {
        let mut set = self.checkpoint_set()?;
        set.checkpoints.truncate(content.len());
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trail_test_support::SAMPLE_TIMELINE_YAML;

    #[test]
    fn test_from_yaml_reads_settings_and_versions() {
        // Arrange / Act
        let document = TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML).unwrap();

        // Assert
        assert_eq!(document.settings.checkpoints.len(), 3);
        assert_eq!(document.settings.dots_per_segment, 4);
        assert_eq!(document.settings.tick_interval(), Duration::from_millis(120));
        assert_eq!(document.settings.cutoff_year, Some(2007));
        assert_eq!(
            document.settings.marker_visibility,
            MarkerVisibility::BetweenCheckpoints
        );
        assert_eq!(document.settings.grid_size, 3);
        assert_eq!(
            document.versions.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["en", "gr"]
        );
    }

    #[test]
    fn test_from_yaml_rejects_zero_dots() {
        // Arrange
        let yaml = "settings:\n  start: { row: 0.0, col: 0.0 }\n  dots_per_segment: 0\n";

        // Act
        let result = TimelineDocument::from_yaml(yaml);

        // Assert
        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("dots_per_segment")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_zero_tick_interval() {
        let yaml = "settings:\n  start: { row: 0.0, col: 0.0 }\n  tick_interval_ms: 0\n";

        let result = TimelineDocument::from_yaml(yaml);

        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("tick_interval_ms")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_rejects_single_line_grid() {
        let yaml = "settings:\n  start: { row: 0.0, col: 0.0 }\n  grid_size: 1\n";

        let result = TimelineDocument::from_yaml(yaml);

        match result {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("grid_size")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_yaml_reports_parse_failure_as_infrastructure() {
        let result = TimelineDocument::from_yaml("settings: [not, a, map]");

        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_load_missing_file_is_infrastructure_error() {
        let result = TimelineDocument::load("/nonexistent/timeline.yaml");

        match result {
            Err(DomainError::Infrastructure(msg)) => assert!(msg.contains("timeline.yaml")),
            other => panic!("expected Infrastructure error, got {other:?}"),
        }
    }

    #[test]
    fn test_content_applies_document_cutoff_unless_overridden() {
        // Arrange
        let document = TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML).unwrap();

        // Act
        let default_cutoff = document.content("en", None).unwrap();
        let widened = document.content("en", Some(2020)).unwrap();

        // Assert
        assert_eq!(default_cutoff.len(), 3);
        assert_eq!(widened.len(), 4);
    }

    #[test]
    fn test_unknown_version_is_validation_error() {
        let document = TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML).unwrap();

        let result = document.content("fr", None);

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_checkpoint_set_matches_settings() {
        // Arrange
        let document = TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML).unwrap();

        // Act
        let set = document.checkpoint_set().unwrap();

        // Assert
        assert_eq!(set, trail_test_support::scenario_set());
    }

    #[test]
    fn test_checkpoint_set_for_truncates_to_content() {
        // Arrange
        let document = TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML).unwrap();
        let short = document.content("en", Some(1971)).unwrap();

        // Act
        let set = document.checkpoint_set_for(&short).unwrap();

        // Assert
        assert_eq!(set.checkpoints.len(), 2);
        assert_ne!(
            set.fingerprint(),
            document.checkpoint_set().unwrap().fingerprint()
        );
    }
}
