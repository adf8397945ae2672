#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic ghost navigation using one-tile lookahead.
//!
//! The navigator never searches the maze. At each tick it inspects the tile
//! the ghost is about to enter, lists the non-reversing exits from there, and
//! picks the exit whose follow-up tile lies closest to the target in a straight
//! line. Ties fall back to the fixed [`Direction::PREFERENCE`] order.

use ghost_maze_core::{Direction, TilePosition};
use ghost_maze_world::MazeGrid;
use tracing::{debug, trace};

pub mod walk;

pub use walk::{simulate_path, Walk, WalkOutcome, DEFAULT_MAX_STEPS};

/// Exits leaving a tile, stored in [`Direction::PREFERENCE`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exits {
    directions: [Direction; 4],
    len: usize,
}

impl Exits {
    fn from_candidates(candidates: impl IntoIterator<Item = Direction>) -> Self {
        let mut exits = Self {
            directions: Direction::PREFERENCE,
            len: 0,
        };
        for direction in candidates {
            exits.directions[exits.len] = direction;
            exits.len += 1;
        }
        exits
    }

    /// Exits as an ordered slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Direction] {
        &self.directions[..self.len]
    }

    /// Number of exits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Reports whether every non-reversing exit is blocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reports whether `direction` is one of the exits.
    #[must_use]
    pub fn contains(&self, direction: Direction) -> bool {
        self.as_slice().contains(&direction)
    }

    /// Iterator over the exits in preference order.
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Stateless navigator borrowing a read-only maze.
///
/// The navigator is `Copy`, so many ghosts can share one [`MazeGrid`] without
/// any synchronisation.
#[derive(Clone, Copy, Debug)]
pub struct GhostNavigator<'maze> {
    maze: &'maze MazeGrid,
}

impl<'maze> GhostNavigator<'maze> {
    /// Creates a navigator over the provided maze.
    #[must_use]
    pub const fn new(maze: &'maze MazeGrid) -> Self {
        Self { maze }
    }

    /// Reports whether `tile` lies within the maze and is walkable.
    #[must_use]
    pub fn is_valid_tile(&self, tile: TilePosition) -> bool {
        self.maze.is_walkable(tile)
    }

    /// Lists the headings that leave `tile` onto a walkable neighbour.
    ///
    /// The reverse of `heading` is always excluded, even when it is the only
    /// open neighbour.
    #[must_use]
    pub fn available_exits(&self, tile: TilePosition, heading: Direction) -> Exits {
        let reverse = heading.opposite();
        Exits::from_candidates(
            Direction::PREFERENCE
                .into_iter()
                .filter(|&direction| direction != reverse)
                .filter(|&direction| self.is_valid_tile(tile.step(direction))),
        )
    }

    /// Chooses the heading the ghost adopts once it enters the tile ahead.
    ///
    /// A single exit is taken as-is and an empty exit set forces a reversal.
    /// Otherwise the exit whose test tile (two tiles ahead of `ghost`) is
    /// closest to `target` wins, with ties going to the earlier heading in
    /// [`Direction::PREFERENCE`].
    #[must_use]
    pub fn choose_direction(
        &self,
        ghost: TilePosition,
        heading: Direction,
        target: TilePosition,
    ) -> Direction {
        let lookahead = ghost.step(heading);
        let exits = self.available_exits(lookahead, heading);

        let chosen = match exits.as_slice().split_first() {
            None => {
                debug!(?ghost, ?lookahead, ?heading, "dead end ahead, reversing");
                heading.opposite()
            }
            Some((&only, [])) => only,
            Some((&first, rest)) => closest_exit(lookahead, first, rest, target),
        };

        trace!(
            ?ghost,
            ?lookahead,
            goal = ?target,
            exits = exits.len(),
            ?chosen,
            "chose heading"
        );
        chosen
    }

    /// Translates `tile` one step along `direction` without any walkability check.
    #[must_use]
    pub const fn next_position(&self, tile: TilePosition, direction: Direction) -> TilePosition {
        tile.step(direction)
    }

    /// Translates `tile` one step along `direction`, or `None` when the
    /// destination is not walkable.
    #[must_use]
    pub fn checked_next_position(
        &self,
        tile: TilePosition,
        direction: Direction,
    ) -> Option<TilePosition> {
        let next = tile.step(direction);
        self.is_valid_tile(next).then_some(next)
    }
}

fn closest_exit(
    lookahead: TilePosition,
    first: Direction,
    rest: &[Direction],
    target: TilePosition,
) -> Direction {
    let distance_via = |direction: Direction| lookahead.step(direction).euclidean_distance(target);

    let (best, _) = rest.iter().copied().fold(
        (first, distance_via(first)),
        |(best, best_distance), candidate| {
            let distance = distance_via(candidate);
            let closer = distance < best_distance;
            let tie_won = distance == best_distance
                && candidate.preference_rank() < best.preference_rank();
            if closer || tie_won {
                (candidate, distance)
            } else {
                (best, best_distance)
            }
        },
    );
    best
}
