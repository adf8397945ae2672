//! Step-driven ghost walks built on top of [`GhostNavigator`].
//!
//! Each tick decides the heading for the tile ahead, moves one tile along the
//! heading chosen on the previous tick, and only then adopts the new heading.
//! A decision made while entering a tile therefore governs the move out of the
//! tile after it.

use ghost_maze_core::{GhostState, TilePosition};
use tracing::debug;

use crate::GhostNavigator;

/// Move budget applied when a caller has no preference.
pub const DEFAULT_MAX_STEPS: usize = 100;

/// Iterator yielding every state a ghost passes through on its way to a target.
///
/// The starting state is yielded first. Iteration stops after yielding a state
/// on the target tile or after `max_steps` moves, whichever happens first.
#[derive(Clone, Debug)]
pub struct Walk<'maze> {
    navigator: GhostNavigator<'maze>,
    state: GhostState,
    target: TilePosition,
    remaining_moves: usize,
    finished: bool,
}

impl<'maze> Walk<'maze> {
    /// Starts a walk from `start` toward `target` bounded by `max_steps` moves.
    #[must_use]
    pub const fn new(
        navigator: GhostNavigator<'maze>,
        start: GhostState,
        target: TilePosition,
        max_steps: usize,
    ) -> Self {
        Self {
            navigator,
            state: start,
            target,
            remaining_moves: max_steps,
            finished: false,
        }
    }

    fn advance(&mut self) {
        let GhostState { position, heading } = self.state;
        let next_heading = self.navigator.choose_direction(position, heading, self.target);
        self.state = GhostState::new(
            self.navigator.next_position(position, heading),
            next_heading,
        );
        self.remaining_moves -= 1;
    }
}

impl Iterator for Walk<'_> {
    type Item = GhostState;

    fn next(&mut self) -> Option<GhostState> {
        if self.finished {
            return None;
        }

        let current = self.state;
        if current.position == self.target {
            debug!(tile = ?current.position, "ghost reached target");
            self.finished = true;
        } else if self.remaining_moves == 0 {
            debug!(position = ?current.position, "step budget exhausted");
            self.finished = true;
        } else {
            self.advance();
        }

        Some(current)
    }
}

/// Result of running a [`Walk`] to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkOutcome {
    /// Every state visited, starting with the initial state.
    pub path: Vec<GhostState>,
    /// Whether the final state sits on the target tile.
    pub reached_target: bool,
}

impl WalkOutcome {
    /// Number of moves performed.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Visited tiles without headings.
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> + '_ {
        self.path.iter().map(|state| state.position)
    }
}

/// Runs a walk to completion and collects the visited states.
#[must_use]
pub fn simulate_path(
    navigator: GhostNavigator<'_>,
    start: GhostState,
    target: TilePosition,
    max_steps: usize,
) -> WalkOutcome {
    let path: Vec<_> = Walk::new(navigator, start, target, max_steps).collect();
    let reached_target = path.last().is_some_and(|state| state.position == target);
    WalkOutcome {
        path,
        reached_target,
    }
}
