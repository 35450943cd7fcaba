//! Navigation properties observed through the service's snapshots.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::task::JoinHandle;
use trail_core::scheduler::TickScheduler;
use trail_navigation::application::service::{NavigationHandle, NavigationService, TimelineSnapshot};
use trail_path::{CheckpointSet, DotId};
use trail_test_support::{
    FixedClock, GatedScheduler, InstantScheduler, fixed_now, scenario_set, zigzag_set,
};

fn spawn(set: &CheckpointSet, scheduler: Arc<dyn TickScheduler>) -> (NavigationHandle, JoinHandle<()>) {
    NavigationService::spawn(set, scheduler, Arc::new(FixedClock(fixed_now())))
}

fn dots_at(snapshot: &TimelineSnapshot, indices: &[usize]) -> BTreeSet<DotId> {
    indices
        .iter()
        .map(|&i| snapshot.path.point(i).and_then(|p| p.dot_id()).unwrap())
        .collect()
}

fn assert_at_rest(snapshot: &TimelineSnapshot) {
    let state = &snapshot.view.state;
    assert!(!state.animating);
    for (index, id) in snapshot.path.dots() {
        assert_eq!(
            index < state.current_path_index,
            state.eaten_markers.contains(&id),
            "dot {id} at {index}, token at {}",
            state.current_path_index
        );
    }
}

#[tokio::test]
async fn test_forward_then_backward_scenario_one_index_per_tick() {
    // Arrange
    let scheduler = Arc::new(GatedScheduler::new());
    let (handle, _task) = spawn(&scenario_set(), scheduler.clone());
    let mut snapshots = handle.subscribe();

    // Act: forward to checkpoint 2
    handle.request_navigation(2).unwrap();
    let started = snapshots
        .wait_for(|s| s.view.state.animating)
        .await
        .unwrap()
        .clone();

    // Assert: markers are reconciled before the token moves
    assert_eq!(started.view.state.current_path_index, 1);
    assert!(
        dots_at(&started, &[2, 3, 5, 6, 7, 9, 10, 11]).is_subset(&started.view.state.eaten_markers)
    );

    for expected in 2..=12 {
        scheduler.release(1);
        let stepped = snapshots
            .wait_for(|s| s.view.state.current_path_index == expected)
            .await
            .unwrap()
            .clone();
        assert_eq!(stepped.view.state.animating, expected != 12);
    }
    let rested = handle.snapshot();
    assert_eq!(rested.view.state.target_checkpoint, Some(2));
    assert_eq!(rested.view.resting_checkpoint, Some(2));
    assert_eq!(scheduler.requested(), 11);
    assert_at_rest(&rested);

    // Act: back to checkpoint 0
    handle.request_navigation(0).unwrap();
    let reversing = snapshots
        .wait_for(|s| s.view.state.animating)
        .await
        .unwrap()
        .clone();
    scheduler.release(8);
    let back = snapshots
        .wait_for(|s| !s.view.state.animating)
        .await
        .unwrap()
        .clone();

    // Assert
    assert_eq!(reversing.view.state.eaten_markers, dots_at(&reversing, &[1, 2, 3]));
    assert_eq!(back.view.state.current_path_index, 4);
    assert_eq!(back.view.state.target_checkpoint, Some(0));
    assert!(dots_at(&back, &[2, 3]).is_subset(&back.view.state.eaten_markers));
    assert_eq!(scheduler.requested(), 19);
    assert_at_rest(&back);
}

#[tokio::test]
async fn test_every_checkpoint_is_reachable_from_every_other() {
    // Arrange
    let set = zigzag_set();
    let count = set.checkpoints.len();
    let (handle, _task) = spawn(&set, Arc::new(InstantScheduler::new()));
    let mut snapshots = handle.subscribe();
    let order: Vec<usize> = (0..count).chain((0..count).rev()).chain([0, count - 1, 3]).collect();

    for k in order {
        // Act
        if handle.snapshot().view.resting_checkpoint == Some(k) {
            continue;
        }
        handle.request_navigation(k).unwrap();
        let rested = snapshots
            .wait_for(|s| !s.view.state.animating && s.view.state.target_checkpoint == Some(k))
            .await
            .unwrap()
            .clone();

        // Assert
        assert_eq!(
            Some(rested.view.state.current_path_index),
            rested.path.path_index_of(k)
        );
        assert_at_rest(&rested);
    }
}

#[tokio::test]
async fn test_close_overlay_keeps_position_and_markers() {
    // Arrange
    let (handle, _task) = spawn(&scenario_set(), Arc::new(InstantScheduler::new()));
    let mut snapshots = handle.subscribe();
    handle.request_navigation(2).unwrap();
    let open = snapshots
        .wait_for(|s| s.view.state.target_checkpoint == Some(2))
        .await
        .unwrap()
        .clone();

    // Act
    handle.close_overlay().unwrap();
    let closed = snapshots
        .wait_for(|s| s.view.state.target_checkpoint.is_none())
        .await
        .unwrap()
        .clone();

    // Assert
    assert_eq!(closed.view.state.current_path_index, open.view.state.current_path_index);
    assert_eq!(closed.view.state.eaten_markers, open.view.state.eaten_markers);
}

#[tokio::test]
async fn test_request_for_resting_checkpoint_changes_nothing() {
    // Arrange
    let (handle, _task) = spawn(&scenario_set(), Arc::new(InstantScheduler::new()));
    let mut snapshots = handle.subscribe();
    handle.request_navigation(1).unwrap();
    let rested = snapshots
        .wait_for(|s| s.view.resting_checkpoint == Some(1))
        .await
        .unwrap()
        .clone();

    // Act
    handle.request_navigation(1).unwrap();
    handle.close_overlay().unwrap();
    let after = snapshots
        .wait_for(|s| s.view.state.target_checkpoint.is_none())
        .await
        .unwrap()
        .clone();

    // Assert: only the close was recorded
    assert_eq!(after.view.version, rested.view.version + 1);
    assert_eq!(after.view.state.current_path_index, 8);
}

#[tokio::test]
async fn test_single_dot_segments_have_no_markers() {
    let mut set = scenario_set();
    set.dots_per_segment = std::num::NonZeroU32::MIN;
    let (handle, _task) = spawn(&set, Arc::new(InstantScheduler::new()));
    let mut snapshots = handle.subscribe();

    handle.request_navigation(2).unwrap();
    let rested = snapshots
        .wait_for(|s| s.view.state.target_checkpoint == Some(2))
        .await
        .unwrap()
        .clone();

    assert_eq!(rested.path.dots().count(), 0);
    assert!(rested.view.state.eaten_markers.is_empty());
    assert_eq!(rested.view.state.current_path_index, 3);
}
