//! The eight compass directions of a square lattice.

/// One of the eight compass directions around a cell.
///
/// Offsets are expressed as `(row, column)` deltas with north pointing
/// toward row 0. The order of [`Direction::ALL`] (cardinals first, then
/// diagonals) is the canonical enumeration order for every neighbour
/// query in this workspace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Away from row 0.
    South,
    /// Toward column 0.
    West,
    /// Away from column 0.
    East,
    /// Diagonal toward row 0 and column 0.
    NorthWest,
    /// Diagonal toward row 0, away from column 0.
    NorthEast,
    /// Diagonal away from row 0, toward column 0.
    SouthWest,
    /// Diagonal away from row 0 and column 0.
    SouthEast,
}

impl Direction {
    /// All eight directions in canonical order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Unit step for this direction as a `(row, column)` delta.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_direction_once() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(Direction::ALL.len(), 8);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
            assert!((dr, dc) != (0, 0));
        }
    }

    #[test]
    fn deltas_are_distinct() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }
}
