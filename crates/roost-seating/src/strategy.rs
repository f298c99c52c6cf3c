//! The two occupancy strategies.

use std::fmt;
use std::str::FromStr;

/// Which neighbourhood a seating run considers, and how crowded an
/// occupied seat must be before it empties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Immediate 8-neighbour adjacency; an occupied seat empties at 4
    /// or more occupied neighbours.
    Adjacent,
    /// First visible seat in each of the 8 compass directions, looking
    /// through floor; an occupied seat empties at 5 or more.
    Visible,
}

impl Strategy {
    /// Occupied-neighbour count at which an occupied seat empties.
    pub fn threshold(self) -> usize {
        match self {
            Strategy::Adjacent => 4,
            Strategy::Visible => 5,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Adjacent => write!(f, "adjacent"),
            Strategy::Visible => write!(f, "visible"),
        }
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(Strategy::Adjacent),
            "visible" => Ok(Strategy::Visible),
            _ => Err(ParseStrategyError { got: s.to_string() }),
        }
    }
}

/// Error for a strategy name that is neither `adjacent` nor `visible`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    got: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown strategy {:?}, expected \"adjacent\" or \"visible\"",
            self.got
        )
    }
}

impl std::error::Error for ParseStrategyError {}
