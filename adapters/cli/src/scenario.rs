//! TOML scenario files describing a maze, a ghost, and a target.

use std::fmt::Write as _;

use ghost_maze_core::{GhostState, ScoreEvent, TilePosition};
use ghost_maze_system_navigation::{simulate_path, GhostNavigator, WalkOutcome, DEFAULT_MAX_STEPS};
use ghost_maze_system_scoring::ScoreTracker;
use ghost_maze_world::{MazeError, MazeGrid};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Maze rows written either as text or as `0`/`1` values.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum MazeLayout {
    /// One string per row using `#`/`1` for walls and `.`/`0`/space for open tiles.
    Text(Vec<String>),
    /// One array per row using `1` for walls and `0` for open tiles.
    Numeric(Vec<Vec<u8>>),
}

impl MazeLayout {
    fn build(&self) -> Result<MazeGrid, MazeError> {
        match self {
            Self::Text(rows) => MazeGrid::from_text_rows(rows),
            Self::Numeric(rows) => MazeGrid::from_numeric_rows(rows),
        }
    }
}

/// Scenario as written on disk.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    /// Maximum number of moves before the walk gives up.
    #[serde(default = "default_max_steps")]
    pub(crate) max_steps: usize,
    /// Scoring triggers replayed after the walk.
    #[serde(default)]
    pub(crate) events: Vec<ScoreEvent>,
    /// Maze layout.
    pub(crate) maze: MazeLayout,
    /// Starting ghost position and heading.
    pub(crate) ghost: GhostState,
    /// Tile the ghost steers toward.
    pub(crate) target: TilePosition,
}

const fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

/// Errors that can occur while loading a scenario.
#[derive(Debug, Error)]
pub(crate) enum ScenarioError {
    /// The file is not valid scenario TOML.
    #[error("could not parse scenario: {0}")]
    Syntax(#[from] toml::de::Error),
    /// The maze rows were rejected.
    #[error("invalid maze layout: {0}")]
    Maze(#[from] MazeError),
}

/// Scenario with its maze validated and ready to run.
#[derive(Debug)]
pub(crate) struct LoadedScenario {
    scenario: Scenario,
    maze: MazeGrid,
}

impl LoadedScenario {
    /// Parses and validates scenario TOML.
    pub(crate) fn parse(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = toml::from_str(source)?;
        let maze = scenario.maze.build()?;

        info!(
            width = maze.width(),
            height = maze.height(),
            walkable = maze.walkable_tiles().count(),
            "loaded maze"
        );
        if !maze.is_walkable(scenario.ghost.position) {
            warn!(position = ?scenario.ghost.position, "ghost starts on a blocked tile");
        }
        if !maze.contains(scenario.target) {
            warn!(target_tile = ?scenario.target, "target lies outside the maze");
        }

        Ok(Self { scenario, maze })
    }

    /// Runs the walk and the scoring replay, producing the printable report.
    pub(crate) fn run(&self, max_steps_override: Option<usize>) -> Report {
        let max_steps = max_steps_override.unwrap_or(self.scenario.max_steps);
        let navigator = GhostNavigator::new(&self.maze);
        let walk = simulate_path(
            navigator,
            self.scenario.ghost,
            self.scenario.target,
            max_steps,
        );
        info!(
            steps = walk.steps(),
            reached = walk.reached_target,
            "walk finished"
        );

        let mut score = ScoreTracker::new();
        for &event in &self.scenario.events {
            score.apply(event);
        }

        Report { walk, score }
    }
}

/// Outcome of a scenario run.
#[derive(Debug)]
pub(crate) struct Report {
    walk: WalkOutcome,
    score: ScoreTracker,
}

impl Report {
    /// Renders the report as plain text lines.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for (step, state) in self.walk.path.iter().enumerate() {
            let _ = writeln!(
                out,
                "step {step}: ({}, {}) heading {}",
                state.position.x,
                state.position.y,
                state.heading.name()
            );
        }

        if self.walk.reached_target {
            let _ = writeln!(out, "target reached in {} steps", self.walk.steps());
        } else {
            let _ = writeln!(
                out,
                "step budget exhausted after {} steps",
                self.walk.steps()
            );
        }
        let _ = writeln!(
            out,
            "score {} combo {}",
            self.score.score(),
            self.score.combo()
        );
        out
    }
}
