//! Timeline entries and their optional media.

use serde::{Deserialize, Deserializer, Serialize};

/// The year label of an entry, as authored.
///
/// Authors write either `1946` or `"1946"`; both are kept as text. The
/// numeric value is the leading run of digits, so `"1940s"` counts as 1940
/// and a label with no leading digits has no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Year(String);

impl Year {
    /// Wraps a year label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric year, if the label starts with one.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        let label = self.0.trim_start();
        let (sign, digits) = match label.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, label),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits[..end].parse::<i32>().ok().map(|year| sign * year)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(year) => Self(year.to_string()),
            Raw::Text(label) => Self(label),
        })
    }
}

/// Optional media attached to an entry. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    /// Audio clip URL.
    #[serde(default)]
    pub sound: Option<String>,
    /// Embeddable video URL.
    #[serde(default)]
    pub video: Option<String>,
    /// "Learn more" link.
    #[serde(default)]
    pub link: Option<String>,
    /// Quiz prompt text.
    #[serde(default)]
    pub quiz: Option<String>,
}

/// The single media item an overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Media {
    /// Audio clip URL.
    Sound(String),
    /// Video URL.
    Video(String),
    /// External link.
    Link(String),
    /// Quiz prompt.
    Quiz(String),
}

impl Extra {
    /// Picks the media to show: sound, then video, then link, then quiz.
    #[must_use]
    pub fn primary(&self) -> Option<Media> {
        fn present(value: Option<&String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty()).cloned()
        }

        present(self.sound.as_ref())
            .map(Media::Sound)
            .or_else(|| present(self.video.as_ref()).map(Media::Video))
            .or_else(|| present(self.link.as_ref()).map(Media::Link))
            .or_else(|| present(self.quiz.as_ref()).map(Media::Quiz))
    }
}

/// One event on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Year label.
    pub year: Year,
    /// Event title.
    pub title: String,
    /// Short glyph shown on the checkpoint marker.
    #[serde(default)]
    pub icon: String,
    /// Image URL for the overlay.
    #[serde(default)]
    pub image: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Optional media.
    #[serde(default)]
    pub extra: Option<Extra>,
}

impl TimelineEntry {
    /// The entry's primary media, if any.
    #[must_use]
    pub fn primary_media(&self) -> Option<Media> {
        self.extra.as_ref().and_then(Extra::primary)
    }
}
