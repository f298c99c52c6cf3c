//! The fixed-point driver.
//!
//! One [`Engine::step`] computes a whole next generation from the frozen
//! previous grid (Jacobi-style: read old, write new, then swap).
//! [`Engine::run`] iterates steps until two successive generations are
//! structurally equal.

use std::fmt;
use std::time::Instant;

use roost_grid::{Grid, GridError};

use crate::config::{ConfigError, EngineConfig};
use crate::metrics::RunMetrics;
use crate::rule::Rule;

// ── Stabilized ───────────────────────────────────────────────────

/// Result of a successful fixed-point run.
#[derive(Clone, Debug)]
pub struct Stabilized<C> {
    /// The stabilized grid. Applying the rule once more reproduces it.
    pub grid: Grid<C>,
    /// Number of advancing generations it took to reach the fixed point.
    /// 0 means the input grid was already stable.
    pub generations: u64,
    /// Timing and size data for the run.
    pub metrics: RunMetrics,
}

// ── EngineError ──────────────────────────────────────────────────

/// Errors returned by [`Engine::step`] and [`Engine::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A rule's neighbour query failed. Indicates a defect in the rule,
    /// not in the input.
    Rule {
        /// Name of the failing rule.
        name: String,
        /// The underlying grid error.
        source: GridError,
    },
    /// The generation cap was reached without finding a fixed point.
    Stagnation {
        /// The configured cap that was exceeded.
        limit: u64,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule { name, source } => write!(f, "rule '{name}' failed: {source}"),
            Self::Stagnation { limit } => {
                write!(f, "no fixed point after {limit} generations")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rule { source, .. } => Some(source),
            Self::Stagnation { .. } => None,
        }
    }
}

// ── Engine ───────────────────────────────────────────────────────

/// Drives a grid to a stable configuration under a [`Rule`].
///
/// The engine is a pure batch computation: single-threaded, no I/O, no
/// state beyond the grid it is handed. Each generation is a function of
/// the previous generation only; a cell's transition never observes a
/// value written in the current generation.
#[derive(Clone, Debug)]
pub struct Engine<R: Rule> {
    rule: R,
    config: EngineConfig,
}

impl<R: Rule> Engine<R> {
    /// Construct an engine from a rule and a validated configuration.
    pub fn new(rule: R, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { rule, config })
    }

    /// The rule this engine applies.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// The configuration this engine runs under.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Compute the next generation of `grid`.
    ///
    /// Every cell of the result is derived from `grid` alone, so a cell
    /// never sees a neighbour's *new* value. The input is untouched.
    pub fn step(&self, grid: &Grid<R::Cell>) -> Result<Grid<R::Cell>, EngineError> {
        let mut next = grid.clone();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let neighbours =
                    self.rule
                        .neighbours(grid, row, col)
                        .map_err(|source| EngineError::Rule {
                            name: self.rule.name().to_string(),
                            source,
                        })?;
                let cell = grid
                    .get(row, col)
                    .expect("coordinates bounded by grid dimensions");
                let value = self.rule.transition(cell, &neighbours);
                next.set(row, col, value)
                    .expect("next grid has identical dimensions");
            }
        }
        Ok(next)
    }

    /// Step until two successive generations are identical, then return
    /// the fixed point.
    ///
    /// A grid already at its fixed point comes back with
    /// `generations == 0`. If the rule still has not converged after
    /// [`EngineConfig::max_generations`] advancing steps, the run fails
    /// with [`EngineError::Stagnation`].
    pub fn run(&self, mut grid: Grid<R::Cell>) -> Result<Stabilized<R::Cell>, EngineError> {
        let start = Instant::now();
        let mut generations = 0u64;
        loop {
            let next = self.step(&grid)?;
            if next == grid {
                let metrics = RunMetrics {
                    generations,
                    cell_count: grid.cell_count(),
                    total_us: start.elapsed().as_micros() as u64,
                };
                return Ok(Stabilized {
                    grid,
                    generations,
                    metrics,
                });
            }
            generations += 1;
            if generations > self.config.max_generations {
                return Err(EngineError::Stagnation {
                    limit: self.config.max_generations,
                });
            }
            grid = next;
        }
    }
}
