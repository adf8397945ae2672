#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Score accumulation with an escalating ghost-eating combo.

use ghost_maze_core::ScoreEvent;

/// Points awarded for a regular pellet.
pub const PELLET_SCORE: u64 = 10;
/// Points awarded for a power pellet.
pub const POWER_PELLET_SCORE: u64 = 50;
/// Base multiplied by `2^combo` when a ghost is eaten.
pub const GHOST_BASE_SCORE: u64 = 100;

const INITIAL_COMBO: u32 = 1;

/// Single-owner accumulator for the game score and the ghost combo.
///
/// The combo starts at one and counts up with every ghost eaten; a power
/// pellet or a reset brings it back to one. Arithmetic saturates instead of
/// overflowing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u64,
    combo: u32,
}

impl ScoreTracker {
    /// Creates a tracker with a zero score and a combo of one.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            combo: INITIAL_COMBO,
        }
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Current combo multiplier.
    #[must_use]
    pub const fn combo(&self) -> u32 {
        self.combo
    }

    /// Restores the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Awards a regular pellet.
    pub fn add_pellet_score(&mut self) {
        self.award(PELLET_SCORE);
    }

    /// Awards a power pellet and restarts the ghost combo.
    pub fn add_power_pellet_score(&mut self) {
        self.award(POWER_PELLET_SCORE);
        self.combo = INITIAL_COMBO;
    }

    /// Awards an eaten ghost using the combo value before this call, then
    /// advances the combo.
    pub fn add_ghost_score(&mut self) {
        self.award(Self::ghost_reward(self.combo));
        self.combo = self.combo.saturating_add(1);
    }

    /// Dispatches a gameplay trigger to the matching operation.
    pub fn apply(&mut self, event: ScoreEvent) {
        match event {
            ScoreEvent::Pellet => self.add_pellet_score(),
            ScoreEvent::PowerPellet => self.add_power_pellet_score(),
            ScoreEvent::GhostEaten => self.add_ghost_score(),
            ScoreEvent::Reset => self.reset(),
        }
    }

    /// Points for eating a ghost at `combo`: `2^combo * 100`.
    #[must_use]
    pub fn ghost_reward(combo: u32) -> u64 {
        2u64.saturating_pow(combo).saturating_mul(GHOST_BASE_SCORE)
    }

    fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}
