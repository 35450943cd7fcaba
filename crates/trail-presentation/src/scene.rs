//! The render model produced for every navigation snapshot.

use serde::Serialize;
use trail_content::{CheckpointContent, Media, MarkerVisibility, render_description};
use trail_navigation::application::service::TimelineSnapshot;
use trail_path::{Heading, PathPoint};

use crate::layout::{GridLayout, Position};

/// Rendering switches that do not come from the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneOptions {
    /// Which dots are visible.
    pub marker_visibility: MarkerVisibility,
    /// Grid every point is placed on.
    pub layout: GridLayout,
}

/// The moving token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenView {
    /// Where the token is drawn.
    pub position: Position,
    /// Direction it faces.
    pub heading: Heading,
    /// Sprite rotation for the heading.
    pub rotation: i16,
    /// Whether a move is in flight.
    pub animating: bool,
}

/// One dot on the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    /// Stable dot id (`segment-step`).
    pub id: String,
    /// Where the dot is drawn.
    pub position: Position,
    /// Whether the token has eaten it.
    pub eaten: bool,
    /// Whether it is drawn at all.
    pub visible: bool,
}

/// One checkpoint marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointView {
    /// Checkpoint ordinal.
    pub index: usize,
    /// Where the marker is drawn.
    pub position: Position,
    /// Entry title.
    pub title: String,
    /// Entry year label.
    pub year: String,
    /// Entry icon.
    pub icon: String,
    /// Whether its overlay is open.
    pub selected: bool,
    /// Whether it accepts activation.
    pub interactive: bool,
}

/// The line joining start and checkpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteView {
    /// Vertices in `0..100` units.
    pub vertices: Vec<Position>,
    /// Vertices formatted as an SVG `points` attribute.
    pub points: String,
}

/// Detail card for the selected checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    /// Checkpoint the card belongs to.
    pub checkpoint: usize,
    /// Entry title.
    pub title: String,
    /// Entry image.
    pub image: Option<String>,
    /// Description rendered to HTML.
    pub description_html: String,
    /// The one media item to show.
    pub media: Option<Media>,
    /// Close button label.
    pub close_label: String,
    /// Where the card is anchored.
    pub anchor: Position,
}

/// Everything a renderer draws for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Hint text above the timeline.
    pub instruction: String,
    /// The token; absent when the path is empty.
    pub token: Option<TokenView>,
    /// Dots in path order.
    pub markers: Vec<MarkerView>,
    /// Checkpoints that have content, in order.
    pub checkpoints: Vec<CheckpointView>,
    /// Route polyline.
    pub route: RouteView,
    /// Open detail card.
    pub overlay: Option<OverlayView>,
}

/// Builds the scene for `snapshot`. Checkpoints without an entry in
/// `content` get no marker and no overlay.
#[must_use]
pub fn render_scene(
    snapshot: &TimelineSnapshot,
    content: &CheckpointContent,
    options: &SceneOptions,
) -> Scene {
    let path = &snapshot.path;
    let state = &snapshot.view.state;
    let layout = options.layout;

    let token = path.point(state.current_path_index).map(|point| TokenView {
        position: layout.position(point.coordinate()),
        heading: snapshot.view.heading,
        rotation: snapshot.view.heading.rotation_degrees(),
        animating: state.animating,
    });

    let checkpoint_indices = path.checkpoint_path_indices();
    let visible_range = match options.marker_visibility {
        MarkerVisibility::All => 0..path.len(),
        MarkerVisibility::BetweenCheckpoints => match checkpoint_indices {
            [first, .., last] => first + 1..*last,
            _ => 0..0,
        },
    };
    let markers = path
        .dots()
        .filter_map(|(path_index, id)| {
            let point = path.point(path_index)?;
            Some(MarkerView {
                id: id.to_string(),
                position: layout.position(point.coordinate()),
                eaten: state.eaten_markers.contains(&id),
                visible: visible_range.contains(&path_index),
            })
        })
        .collect();

    let checkpoints = checkpoint_indices
        .iter()
        .enumerate()
        .filter_map(|(index, &path_index)| {
            let entry = content.get(index)?;
            let point = path.point(path_index)?;
            Some(CheckpointView {
                index,
                position: layout.position(point.coordinate()),
                title: entry.title.clone(),
                year: entry.year.as_str().to_owned(),
                icon: entry.icon.clone(),
                selected: state.target_checkpoint == Some(index),
                interactive: !state.animating,
            })
        })
        .collect();

    let overlay = state.target_checkpoint.and_then(|k| {
        let entry = content.get(k)?;
        let point = path.point(path.path_index_of(k)?)?;
        Some(OverlayView {
            checkpoint: k,
            title: entry.title.clone(),
            image: entry.image.clone(),
            description_html: render_description(&entry.description),
            media: entry.primary_media(),
            close_label: content.close_label().to_owned(),
            anchor: layout.position(point.coordinate()),
        })
    });

    Scene {
        instruction: content.instruction().to_owned(),
        token,
        markers,
        checkpoints,
        route: route(path.points(), &layout),
        overlay,
    }
}

fn route(points: &[PathPoint], layout: &GridLayout) -> RouteView {
    let vertices: Vec<Position> = points
        .iter()
        .filter(|point| !point.is_dot())
        .map(|point| layout.position(point.coordinate()).percent())
        .collect();

    let points = vertices
        .iter()
        .map(|v| format!("{},{}", v.x, v.y))
        .collect::<Vec<_>>()
        .join(" ");

    RouteView { vertices, points }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use trail_content::TimelineDocument;
    use trail_navigation::application::query_handlers::NavigationView;
    use trail_navigation::domain::state::NavigationState;
    use trail_path::DotId;
    use trail_test_support::{SAMPLE_TIMELINE_YAML, scenario_set};
    use uuid::Uuid;

    use super::*;

    fn snapshot(state: NavigationState) -> TimelineSnapshot {
        let set = scenario_set();
        TimelineSnapshot {
            path: Arc::new(set.build()),
            fingerprint: set.fingerprint().into(),
            view: NavigationView {
                engine_id: Uuid::nil(),
                state,
                resting_checkpoint: None,
                heading: Heading::Right,
                version: 0,
            },
        }
    }

    fn content(version: &str) -> CheckpointContent {
        TimelineDocument::from_yaml(SAMPLE_TIMELINE_YAML)
            .unwrap()
            .content(version, None)
            .unwrap()
    }

    #[test]
    fn test_fresh_scene_has_token_on_first_dot_and_no_overlay() {
        // Arrange
        let snapshot = snapshot(NavigationState::resting_at(1));

        // Act
        let scene = render_scene(&snapshot, &content("en"), &SceneOptions::default());

        // Assert
        let token = scene.token.unwrap();
        assert!(!token.animating);
        assert_eq!(token.rotation, 0);
        assert_eq!(scene.markers.len(), 9);
        assert!(scene.markers.iter().all(|m| !m.eaten));
        assert_eq!(scene.checkpoints.len(), 3);
        assert!(scene.checkpoints.iter().all(|c| c.interactive && !c.selected));
        assert!(scene.overlay.is_none());
    }

    #[test]
    fn test_markers_before_first_checkpoint_are_hidden_by_default() {
        // Arrange
        let snapshot = snapshot(NavigationState::resting_at(1));

        // Act
        let between = render_scene(&snapshot, &content("en"), &SceneOptions::default());
        let all = render_scene(
            &snapshot,
            &content("en"),
            &SceneOptions {
                marker_visibility: MarkerVisibility::All,
                ..SceneOptions::default()
            },
        );

        // Assert
        let visible: Vec<&str> = between
            .markers
            .iter()
            .filter(|m| m.visible)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(visible, vec!["1-1", "1-2", "1-3", "2-1", "2-2", "2-3"]);
        assert!(all.markers.iter().all(|m| m.visible));
    }

    #[test]
    fn test_eaten_markers_are_flagged() {
        // Arrange
        let mut state = NavigationState::resting_at(4);
        state.eaten_markers = BTreeSet::from([DotId::new(0, 1), DotId::new(0, 2)]);

        // Act
        let scene = render_scene(&snapshot(state), &content("en"), &SceneOptions::default());

        // Assert
        let eaten: Vec<&str> = scene
            .markers
            .iter()
            .filter(|m| m.eaten)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(eaten, vec!["0-1", "0-2"]);
    }

    #[test]
    fn test_overlay_shows_selected_entry() {
        // Arrange
        let mut state = NavigationState::resting_at(4);
        state.target_checkpoint = Some(0);

        // Act
        let scene = render_scene(&snapshot(state), &content("en"), &SceneOptions::default());

        // Assert
        let overlay = scene.overlay.unwrap();
        assert_eq!(overlay.checkpoint, 0);
        assert_eq!(overlay.title, "ENIAC");
        assert_eq!(overlay.close_label, "Close");
        assert_eq!(
            overlay.media,
            Some(Media::Sound("/audio/eniac.mp3".to_owned()))
        );
        assert!(overlay.description_html.contains("<strong>general-purpose</strong>"));
        assert_eq!(overlay.anchor, scene.checkpoints[0].position);
        assert!(scene.checkpoints[0].selected);
    }

    #[test]
    fn test_missing_content_suppresses_marker_and_overlay() {
        // Arrange
        let mut state = NavigationState::resting_at(12);
        state.target_checkpoint = Some(2);

        // Act
        let scene = render_scene(&snapshot(state), &content("gr"), &SceneOptions::default());

        // Assert
        assert_eq!(
            scene.checkpoints.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert!(scene.overlay.is_none());
        assert!(scene.token.is_some());
    }

    #[test]
    fn test_checkpoints_are_not_interactive_while_animating() {
        let mut state = NavigationState::resting_at(5);
        state.animating = true;

        let scene = render_scene(&snapshot(state), &content("en"), &SceneOptions::default());

        assert!(scene.token.unwrap().animating);
        assert!(scene.checkpoints.iter().all(|c| !c.interactive));
    }

    #[test]
    fn test_route_runs_through_start_and_checkpoints() {
        let scene = render_scene(
            &snapshot(NavigationState::resting_at(1)),
            &content("en"),
            &SceneOptions::default(),
        );

        assert_eq!(scene.route.vertices.len(), 4);
        let xs: Vec<f64> = scene.route.vertices.iter().map(|v| v.x).collect();
        for (x, expected) in xs.iter().zip([-50.0, 0.0, 50.0, 100.0]) {
            assert!((x - expected).abs() < 1e-9, "{xs:?}");
        }
        assert!(scene.route.vertices.iter().all(|v| v.y.abs() < 1e-9));
        assert_eq!(scene.route.points, "-50,0 0,0 50,0 100,0");
    }
}
