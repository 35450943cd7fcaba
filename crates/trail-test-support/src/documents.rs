//! Timeline documents used across content and presentation suites.

/// A three-checkpoint document laid out like [`crate::scenario_set`].
///
/// The `en` version has four entries, the last one past the 2007 cutoff.
/// The `gr` version is short by one entry so its third checkpoint has no
/// content.
pub const SAMPLE_TIMELINE_YAML: &str = r#"
settings:
  start: { row: 0.0, col: -1.0 }
  checkpoints:
    - { row: 0.0, col: 0.0 }
    - { row: 0.0, col: 1.0 }
    - { row: 0.0, col: 2.0 }
  dots_per_segment: 4
  tick_interval_ms: 120
  cutoff_year: 2007
versions:
  en:
    close_label: Close
    instruction: Pick an event and the token will walk there.
    timeline:
      - year: 1946
        title: ENIAC
        icon: "🧮"
        image: /img/eniac.png
        description: "The first **general-purpose** electronic computer."
        extra:
          sound: /audio/eniac.mp3
          link: https://example.org/eniac
      - year: "1971"
        title: Intel 4004
        icon: "🔲"
        image: /img/4004.png
        description: "A CPU on a *single* chip."
        extra:
          video: https://example.org/4004
          quiz: How many transistors did it have?
      - year: 1981
        title: IBM PC
        icon: "🖥️"
        image: /img/ibm-pc.png
        description: The personal computer goes mainstream.
      - year: 2010
        title: Tablet
        icon: "📱"
        image: /img/tablet.png
        description: Past the cutoff.
  gr:
    close_label: Κλείσιμο
    instruction: Διάλεξε ένα γεγονός.
    timeline:
      - year: 1946
        title: ENIAC
        icon: "🧮"
        image: /img/eniac.png
        description: Ο πρώτος ηλεκτρονικός υπολογιστής.
      - year: 1971
        title: Intel 4004
        icon: "🔲"
        image: /img/4004.png
        description: Επεξεργαστής σε ένα τσιπ.
"#;
