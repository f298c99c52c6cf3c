//! Text-in, count-out composition of parser, rule, and engine.

use crate::parse::{parse_layout, ParseError};
use crate::rule::SeatingRule;
use crate::seat::Seat;
use crate::strategy::Strategy;
use roost_engine::{ConfigError, Engine, EngineConfig, EngineError, Stabilized};
use roost_grid::Grid;
use std::fmt;

/// Errors from a full [`stabilize`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeatingError {
    /// The layout text failed to parse.
    Parse(ParseError),
    /// The engine configuration is invalid.
    Config(ConfigError),
    /// The engine failed while running.
    Engine(EngineError),
}

impl fmt::Display for SeatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

impl std::error::Error for SeatingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Engine(e) => Some(e),
        }
    }
}

impl From<ParseError> for SeatingError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ConfigError> for SeatingError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<EngineError> for SeatingError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

/// Number of occupied seats in a grid. Linear scan, no side effects.
pub fn occupied_seats(grid: &Grid<Seat>) -> usize {
    grid.count_matching(|seat| *seat == Seat::Occupied)
}

/// Parse `layout`, then drive it to its fixed point under `strategy`.
///
/// This is the whole pipeline in one call: the only externally
/// observable results are the stabilized grid (query it with
/// [`occupied_seats`]) and the run metadata on the returned
/// [`Stabilized`].
pub fn stabilize(
    layout: &str,
    strategy: Strategy,
    config: EngineConfig,
) -> Result<Stabilized<Seat>, SeatingError> {
    let grid = parse_layout(layout)?;
    let engine = Engine::new(SeatingRule::new(strategy), config)?;
    Ok(engine.run(grid)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_propagate() {
        let err = stabilize("L?\n", Strategy::Adjacent, EngineConfig::default()).unwrap_err();
        assert!(matches!(err, SeatingError::Parse(ParseError::UnknownSymbol { .. })));
    }

    #[test]
    fn config_errors_propagate() {
        let err = stabilize(
            "L\n",
            Strategy::Adjacent,
            EngineConfig { max_generations: 0 },
        )
        .unwrap_err();
        assert_eq!(err, SeatingError::Config(ConfigError::ZeroGenerationCap));
    }

    #[test]
    fn occupied_seats_counts_only_occupied() {
        let grid = parse_layout("#L.\n.#L\n").unwrap();
        assert_eq!(occupied_seats(&grid), 2);
    }

    #[test]
    fn error_chain_reports_the_source() {
        use std::error::Error;
        let err = SeatingError::from(ParseError::EmptyLayout);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("no rows"));
    }
}
