#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the ghost maze engine.
//!
//! This crate defines the value types that connect the maze grid, the pure
//! navigation and scoring systems, and the adapters that drive them. Nothing in
//! here owns mutable state: callers hold [`GhostState`] values themselves and
//! feed [`ScoreEvent`] triggers into the scoring system.

use serde::{Deserialize, Serialize};

/// Cardinal headings available to a ghost.
///
/// Variants are declared in tie-break preference order, so the derived
/// [`Ord`] ranks `Up < Left < Down < Right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Movement toward decreasing row indices.
    Up,
    /// Movement toward decreasing column indices.
    Left,
    /// Movement toward increasing row indices.
    Down,
    /// Movement toward increasing column indices.
    Right,
}

impl Direction {
    /// Every heading in tie-break preference order.
    pub const PREFERENCE: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit displacement `(dx, dy)` applied when moving one tile along the heading.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
        }
    }

    /// Heading pointing the other way along the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
        }
    }

    /// Zero-based rank within [`Direction::PREFERENCE`]; lower ranks win ties.
    #[must_use]
    pub const fn preference_rank(self) -> u8 {
        match self {
            Self::Up => 0,
            Self::Left => 1,
            Self::Down => 2,
            Self::Right => 3,
        }
    }

    /// Upper-case label used by text adapters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Left => "LEFT",
            Self::Down => "DOWN",
            Self::Right => "RIGHT",
        }
    }
}

/// Location of a single maze tile expressed as column (`x`) and row (`y`).
///
/// Coordinates are signed so that positions beside or beyond the grid edge can
/// be expressed; such positions are simply never walkable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TilePosition {
    /// Column index, growing to the right.
    pub x: i32,
    /// Row index, growing downward.
    pub y: i32,
}

impl TilePosition {
    /// Creates a new tile position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translates the position one tile along `direction`.
    ///
    /// Total over every coordinate: arithmetic wraps at the `i32` edges and no
    /// walkability check is performed.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Squared straight-line distance, computed in floating point.
    #[must_use]
    pub fn squared_distance(self, other: TilePosition) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx * dx + dy * dy
    }

    /// Straight-line distance between the two tile positions.
    #[must_use]
    pub fn euclidean_distance(self, other: TilePosition) -> f64 {
        self.squared_distance(other).sqrt()
    }
}

/// Caller-owned state of a single ghost, advanced once per simulation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GhostState {
    /// Tile currently occupied by the ghost.
    pub position: TilePosition,
    /// Heading the ghost will leave the current tile along.
    pub heading: Direction,
}

impl GhostState {
    /// Creates a ghost state at `position` travelling along `heading`.
    #[must_use]
    pub const fn new(position: TilePosition, heading: Direction) -> Self {
        Self { position, heading }
    }
}

/// Gameplay triggers consumed by the scoring system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreEvent {
    /// A regular pellet was eaten.
    Pellet,
    /// A power pellet was eaten, ending any running ghost combo.
    PowerPellet,
    /// A frightened ghost was eaten.
    GhostEaten,
    /// The game restarted.
    Reset,
}
