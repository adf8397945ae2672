use ghost_maze_core::ScoreEvent;
use ghost_maze_system_scoring::ScoreTracker;

#[test]
fn starts_with_zero_score_and_unit_combo() {
    let tracker = ScoreTracker::new();
    assert_eq!(tracker.score(), 0);
    assert_eq!(tracker.combo(), 1);
    assert_eq!(tracker, ScoreTracker::default());
}

#[test]
fn reset_restores_initial_state() {
    let mut tracker = ScoreTracker::new();
    tracker.add_pellet_score();
    tracker.add_ghost_score();
    tracker.add_ghost_score();
    tracker.add_ghost_score();

    tracker.reset();

    assert_eq!(tracker.score(), 0);
    assert_eq!(tracker.combo(), 1);
}

#[test]
fn pellets_add_ten_without_touching_combo() {
    let mut tracker = ScoreTracker::new();
    tracker.add_ghost_score();
    tracker.add_pellet_score();
    tracker.add_pellet_score();

    assert_eq!(tracker.score(), 220);
    assert_eq!(tracker.combo(), 2);
}

#[test]
fn power_pellet_adds_fifty_and_restarts_combo() {
    let mut tracker = ScoreTracker::new();
    tracker.add_power_pellet_score();
    assert_eq!(tracker.score(), 50);
    assert_eq!(tracker.combo(), 1);

    tracker.add_ghost_score();
    tracker.add_power_pellet_score();
    tracker.add_ghost_score();

    assert_eq!(tracker.score(), 50 + 200 + 50 + 200);
    assert_eq!(tracker.combo(), 2);
}

#[test]
fn consecutive_ghosts_escalate() {
    let mut tracker = ScoreTracker::new();
    let mut scores = Vec::new();

    for _ in 0..4 {
        tracker.add_ghost_score();
        scores.push(tracker.score());
    }

    assert_eq!(scores, vec![200, 600, 1400, 3000]);
    assert_eq!(tracker.combo(), 5);
}

#[test]
fn mixed_gameplay_sequence() {
    let mut tracker = ScoreTracker::new();
    let events = [
        ScoreEvent::Pellet,
        ScoreEvent::Pellet,
        ScoreEvent::PowerPellet,
        ScoreEvent::GhostEaten,
        ScoreEvent::GhostEaten,
        ScoreEvent::Pellet,
    ];

    let mut trace = Vec::new();
    for event in events {
        tracker.apply(event);
        trace.push((tracker.score(), tracker.combo()));
    }

    assert_eq!(
        trace,
        vec![(10, 1), (20, 1), (70, 1), (270, 2), (670, 3), (680, 3)]
    );
}

#[test]
fn reset_event_clears_running_game() {
    let mut tracker = ScoreTracker::new();
    for event in [ScoreEvent::GhostEaten, ScoreEvent::Reset, ScoreEvent::GhostEaten] {
        tracker.apply(event);
    }

    assert_eq!(tracker.score(), 200);
    assert_eq!(tracker.combo(), 2);
}
