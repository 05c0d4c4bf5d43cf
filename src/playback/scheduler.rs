//! Playback scheduling.
//!
//! Converts a visitation trace into time-stamped frames and applies
//! them as simulated time advances. All computation happens before
//! playback starts; playback itself is a tick-driven state machine with
//! one deadline per frame (`index × speed`), strictly monotonic in
//! index by construction.
//!
//! Every playback carries a [`RunToken`]. Resetting or resizing the
//! grid invalidates the scheduler's current generation, turning every
//! outstanding playback's remaining frames into no-ops instead of
//! letting them mutate a grid they no longer belong to.

use std::time::Duration;

use log::debug;

use crate::core::{Grid, GridCoord};

use super::sweep::inflate_by_dust;
use super::{PlaybackConfig, PlaybackMode, StepBudget};

/// Opaque ticket tying a playback to the scheduler generation that
/// created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunToken {
    generation: u64,
}

/// One scheduled state transition.
#[derive(Clone, Copy, Debug)]
struct Frame {
    /// Deadline relative to playback start.
    at: Duration,
    coord: GridCoord,
    /// Whether this frame is a distinct-visit event that spends a step.
    spends_step: bool,
}

/// Playback lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Running,
    Finished,
}

/// Issues run tokens and invalidates them wholesale on reset.
#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
}

impl Scheduler {
    /// Create a scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a trace for playback, expanding it first in sweep mode.
    pub fn begin(
        &mut self,
        grid: &Grid,
        trace: &[GridCoord],
        mode: PlaybackMode,
        config: &PlaybackConfig,
    ) -> Playback {
        self.generation += 1;
        let expanded = match mode {
            PlaybackMode::Sweep => inflate_by_dust(grid, trace),
            PlaybackMode::Map => trace.to_vec(),
        };

        let speed = config.speed();
        let mut frames = Vec::with_capacity(expanded.len());
        for (index, &coord) in expanded.iter().enumerate() {
            let spends_step = index == 0 || expanded[index - 1] != coord;
            frames.push(Frame {
                at: speed * index as u32,
                coord,
                spends_step,
            });
        }
        // One extra step delay after the last frame, reserved for the
        // cleanup transition.
        let finished_at = speed * frames.len() as u32;

        debug!(
            "[Playback] scheduled {} frames ({:?} mode), done at {:?}",
            frames.len(),
            mode,
            finished_at
        );
        Playback {
            token: RunToken {
                generation: self.generation,
            },
            mode,
            frames,
            cursor: 0,
            finished_at,
            state: PlaybackState::Running,
        }
    }

    /// Invalidate every outstanding playback. Called on grid reset or
    /// resize while a run is in flight.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    fn is_current(&self, token: RunToken) -> bool {
        token.generation == self.generation
    }
}

/// An in-flight scheduled run.
#[derive(Clone, Debug)]
pub struct Playback {
    token: RunToken,
    mode: PlaybackMode,
    frames: Vec<Frame>,
    cursor: usize,
    finished_at: Duration,
    state: PlaybackState,
}

impl Playback {
    /// The token this playback was issued with.
    pub fn token(&self) -> RunToken {
        self.token
    }

    /// Has the running→finished transition happened?
    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    /// Frames applied so far.
    pub fn frames_applied(&self) -> usize {
        self.cursor
    }

    /// Apply every frame whose deadline has passed.
    ///
    /// `now` is time elapsed since the playback started. A playback
    /// whose token is no longer current finishes immediately without
    /// touching the grid, the robot map, or the budget. A spending
    /// frame that finds the budget empty stops the run early. The
    /// finished transition fires exactly once.
    pub fn advance(
        &mut self,
        scheduler: &Scheduler,
        grid: &mut Grid,
        robot_map: &mut Grid,
        budget: &mut StepBudget,
        now: Duration,
    ) -> PlaybackState {
        if self.state == PlaybackState::Finished {
            return self.state;
        }
        if !scheduler.is_current(self.token) {
            debug!("[Playback] stale token, dropping {} pending frames", self.frames.len() - self.cursor);
            self.state = PlaybackState::Finished;
            return self.state;
        }

        while self.cursor < self.frames.len() && self.frames[self.cursor].at <= now {
            let frame = self.frames[self.cursor];
            if frame.spends_step && !budget.try_spend() {
                debug!("[Playback] step budget exhausted at frame {}", self.cursor);
                return self.finish(robot_map);
            }
            if self.mode == PlaybackMode::Sweep {
                grid.clear_dust(frame.coord);
            }
            self.cursor += 1;
        }

        if self.cursor == self.frames.len() && now >= self.finished_at {
            return self.finish(robot_map);
        }
        self.state
    }

    /// Flip running→finished and commit the robot-map update for the
    /// frames actually applied.
    fn finish(&mut self, robot_map: &mut Grid) -> PlaybackState {
        if self.mode == PlaybackMode::Map {
            let visited: Vec<GridCoord> =
                self.frames[..self.cursor].iter().map(|f| f.coord).collect();
            robot_map.mark_mapped(&visited);
        }
        self.state = PlaybackState::Finished;
        self.state
    }
}
