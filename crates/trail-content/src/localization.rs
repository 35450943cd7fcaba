//! Localized timeline versions and per-checkpoint content lookup.

use serde::{Deserialize, Serialize};

use crate::entry::TimelineEntry;

fn default_close_label() -> String {
    "Close".to_owned()
}

/// One language version of the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Localization {
    /// Label of the overlay's close button.
    #[serde(default = "default_close_label")]
    pub close_label: String,
    /// Hint shown above the timeline.
    #[serde(default)]
    pub instruction: String,
    /// Entries in timeline order.
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl Localization {
    /// Entries whose year is at most `cutoff_year`, in order. Entries without
    /// a numeric year are left out when a cutoff is given. `None` keeps all.
    pub fn entries_until(&self, cutoff_year: Option<i32>) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline.iter().filter(move |entry| match cutoff_year {
            Some(cutoff) => entry.year.value().is_some_and(|year| year <= cutoff),
            None => true,
        })
    }
}

/// Content for each checkpoint of a path: checkpoint `k` shows the `k`-th
/// entry that survived the cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointContent {
    close_label: String,
    instruction: String,
    entries: Vec<TimelineEntry>,
}

impl CheckpointContent {
    /// Selects the entries of `localization` up to `cutoff_year`.
    #[must_use]
    pub fn new(localization: &Localization, cutoff_year: Option<i32>) -> Self {
        Self {
            close_label: localization.close_label.clone(),
            instruction: localization.instruction.clone(),
            entries: localization.entries_until(cutoff_year).cloned().collect(),
        }
    }

    /// The entry for checkpoint `k`, if there is one.
    #[must_use]
    pub fn get(&self, k: usize) -> Option<&TimelineEntry> {
        self.entries.get(k)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry survived the cutoff.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Close button label.
    #[must_use]
    pub fn close_label(&self) -> &str {
        &self.close_label
    }

    /// Instruction text.
    #[must_use]
    pub fn instruction(&self) -> &str {
        &self.instruction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Year;

    fn entry(year: &str, title: &str) -> TimelineEntry {
        TimelineEntry {
            year: Year::new(year),
            title: title.to_owned(),
            icon: String::new(),
            image: None,
            description: String::new(),
            extra: None,
        }
    }

    fn localization() -> Localization {
        Localization {
            close_label: "Close".to_owned(),
            instruction: String::new(),
            timeline: vec![
                entry("1946", "ENIAC"),
                entry("2010", "Tablet"),
                entry("unknown", "Mystery"),
                entry("2007", "Smartphone"),
            ],
        }
    }

    #[test]
    fn test_entries_until_keeps_order_and_inclusive_cutoff() {
        // Arrange
        let localization = localization();

        // Act
        let titles: Vec<&str> = localization
            .entries_until(Some(2007))
            .map(|e| e.title.as_str())
            .collect();

        // Assert
        assert_eq!(titles, vec!["ENIAC", "Smartphone"]);
    }

    #[test]
    fn test_entries_until_without_cutoff_keeps_everything() {
        let localization = localization();

        assert_eq!(localization.entries_until(None).count(), 4);
    }

    #[test]
    fn test_checkpoint_content_maps_k_to_filtered_entry() {
        // Arrange
        let content = CheckpointContent::new(&localization(), Some(2007));

        // Act / Assert
        assert_eq!(content.len(), 2);
        assert_eq!(content.get(1).map(|e| e.title.as_str()), Some("Smartphone"));
        assert!(content.get(2).is_none());
    }

    #[test]
    fn test_close_label_defaults_when_missing() {
        let localization: Localization = serde_yaml::from_str("timeline: []").unwrap();

        assert_eq!(localization.close_label, "Close");
        assert!(localization.timeline.is_empty());
    }
}
