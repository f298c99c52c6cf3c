//! The three cell states of a seat layout.

use std::fmt;

/// State of a single position in a seat layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seat {
    /// Floor. Never occupiable; transparent to line-of-sight queries.
    Floor,
    /// A seat with nobody in it.
    Empty,
    /// A seat with somebody in it.
    Occupied,
}

impl Seat {
    /// Parse a layout symbol: `.` floor, `L` empty, `#` occupied.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Seat::Floor),
            'L' => Some(Seat::Empty),
            '#' => Some(Seat::Occupied),
            _ => None,
        }
    }

    /// The layout symbol for this state.
    pub fn symbol(self) -> char {
        match self {
            Seat::Floor => '.',
            Seat::Empty => 'L',
            Seat::Occupied => '#',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for seat in [Seat::Floor, Seat::Empty, Seat::Occupied] {
            assert_eq!(Seat::from_symbol(seat.symbol()), Some(seat));
        }
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        assert_eq!(Seat::from_symbol('x'), None);
        assert_eq!(Seat::from_symbol(' '), None);
        assert_eq!(Seat::from_symbol('0'), None);
    }

    #[test]
    fn display_uses_the_layout_symbol() {
        assert_eq!(Seat::Occupied.to_string(), "#");
    }
}
