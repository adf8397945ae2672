use ghost_maze_core::{Direction, GhostState, TilePosition};
use ghost_maze_system_navigation::{simulate_path, GhostNavigator, Walk, DEFAULT_MAX_STEPS};
use ghost_maze_world::MazeGrid;

const LAYOUT: &str = "
#########
#...#...#
#.#.#.#.#
#.......#
#.##.##.#
#.......#
#########
";

fn maze() -> MazeGrid {
    MazeGrid::parse(LAYOUT).expect("fixture layout")
}

fn state(x: i32, y: i32, heading: Direction) -> GhostState {
    GhostState::new(TilePosition::new(x, y), heading)
}

#[test]
fn replay_reaches_far_corner() {
    use Direction::{Down, Left, Right};

    let maze = maze();
    let outcome = simulate_path(
        GhostNavigator::new(&maze),
        state(1, 1, Right),
        TilePosition::new(7, 5),
        DEFAULT_MAX_STEPS,
    );

    assert!(outcome.reached_target);
    assert_eq!(outcome.steps(), 10);
    assert_eq!(
        outcome.path,
        vec![
            state(1, 1, Right),
            state(2, 1, Right),
            state(3, 1, Down),
            state(3, 2, Down),
            state(3, 3, Right),
            state(4, 3, Right),
            state(5, 3, Right),
            state(6, 3, Right),
            state(7, 3, Down),
            state(7, 4, Down),
            state(7, 5, Left),
        ]
    );
}

#[test]
fn replay_climbs_back_over_the_divider() {
    use Direction::{Down, Right, Up};

    let maze = maze();
    let outcome = simulate_path(
        GhostNavigator::new(&maze),
        state(1, 1, Down),
        TilePosition::new(7, 1),
        DEFAULT_MAX_STEPS,
    );

    assert!(outcome.reached_target);
    assert_eq!(
        outcome.positions().collect::<Vec<_>>(),
        vec![
            TilePosition::new(1, 1),
            TilePosition::new(1, 2),
            TilePosition::new(1, 3),
            TilePosition::new(2, 3),
            TilePosition::new(3, 3),
            TilePosition::new(4, 3),
            TilePosition::new(5, 3),
            TilePosition::new(5, 2),
            TilePosition::new(5, 1),
            TilePosition::new(6, 1),
            TilePosition::new(7, 1),
        ]
    );
    assert_eq!(outcome.path[6], state(5, 3, Up));
    assert_eq!(outcome.path[10], state(7, 1, Down));
    assert_eq!(outcome.path[8], state(5, 1, Right));
}

#[test]
fn heading_into_a_wall_steps_in_then_reverses() {
    use Direction::{Down, Up};

    let maze = maze();
    let outcome = simulate_path(
        GhostNavigator::new(&maze),
        state(3, 1, Up),
        TilePosition::new(7, 5),
        3,
    );

    assert!(!outcome.reached_target);
    assert_eq!(
        outcome.path,
        vec![
            state(3, 1, Up),
            state(3, 0, Down),
            state(3, 1, Down),
            state(3, 2, Down),
        ]
    );
}

#[test]
fn replays_are_identical_across_runs() {
    let maze = maze();
    let navigator = GhostNavigator::new(&maze);
    let start = state(1, 5, Direction::Up);
    let target = TilePosition::new(7, 1);

    let first: Vec<_> = Walk::new(navigator, start, target, 64).collect();
    let second: Vec<_> = Walk::new(navigator, start, target, 64).collect();
    assert_eq!(first, second);
    assert!(first.len() <= 65);
}
