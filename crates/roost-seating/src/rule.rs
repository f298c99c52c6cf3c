//! The seating transition rule.

use crate::seat::Seat;
use crate::strategy::Strategy;
use roost_engine::Rule;
use roost_grid::{Grid, GridError};
use smallvec::SmallVec;

/// The occupancy rule of the seating system, parameterized by a
/// [`Strategy`].
///
/// Per generation, every cell transitions simultaneously:
///
/// - an empty seat with zero occupied neighbours becomes occupied;
/// - an occupied seat with at least [`Strategy::threshold`] occupied
///   neighbours empties;
/// - floor never changes, and every other cell keeps its state.
///
/// "Neighbours" are whatever the strategy observes: the adjacent cells,
/// or the first visible seat along each compass ray with floor
/// transparent.
#[derive(Clone, Copy, Debug)]
pub struct SeatingRule {
    strategy: Strategy,
}

impl SeatingRule {
    /// Create the rule for the given strategy.
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }

    /// The strategy this rule observes neighbours with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Rule for SeatingRule {
    type Cell = Seat;

    fn name(&self) -> &str {
        match self.strategy {
            Strategy::Adjacent => "seating_adjacent",
            Strategy::Visible => "seating_visible",
        }
    }

    fn neighbours<'a>(
        &self,
        grid: &'a Grid<Seat>,
        row: usize,
        col: usize,
    ) -> Result<SmallVec<[&'a Seat; 8]>, GridError> {
        match self.strategy {
            Strategy::Adjacent => grid.adjacent(row, col),
            Strategy::Visible => grid.visible(row, col, |seat| *seat == Seat::Floor),
        }
    }

    fn transition(&self, cell: &Seat, neighbours: &[&Seat]) -> Seat {
        let occupied = neighbours
            .iter()
            .filter(|&&&seat| seat == Seat::Occupied)
            .count();
        match cell {
            Seat::Empty if occupied == 0 => Seat::Occupied,
            Seat::Occupied if occupied >= self.strategy.threshold() => Seat::Empty,
            other => *other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_layout;

    #[test]
    fn empty_seat_fills_only_when_nobody_is_near() {
        let rule = SeatingRule::new(Strategy::Adjacent);
        assert_eq!(rule.transition(&Seat::Empty, &[]), Seat::Occupied);
        assert_eq!(
            rule.transition(&Seat::Empty, &[&Seat::Empty, &Seat::Floor]),
            Seat::Occupied
        );
        assert_eq!(
            rule.transition(&Seat::Empty, &[&Seat::Occupied]),
            Seat::Empty
        );
    }

    #[test]
    fn occupied_seat_empties_at_the_strategy_threshold() {
        let crowd = [&Seat::Occupied; 5];
        let adjacent = SeatingRule::new(Strategy::Adjacent);
        assert_eq!(adjacent.transition(&Seat::Occupied, &crowd[..3]), Seat::Occupied);
        assert_eq!(adjacent.transition(&Seat::Occupied, &crowd[..4]), Seat::Empty);
        let visible = SeatingRule::new(Strategy::Visible);
        assert_eq!(visible.transition(&Seat::Occupied, &crowd[..4]), Seat::Occupied);
        assert_eq!(visible.transition(&Seat::Occupied, &crowd[..5]), Seat::Empty);
    }

    #[test]
    fn floor_is_inert() {
        let rule = SeatingRule::new(Strategy::Adjacent);
        let crowd = [&Seat::Occupied; 8];
        assert_eq!(rule.transition(&Seat::Floor, &crowd), Seat::Floor);
        assert_eq!(rule.transition(&Seat::Floor, &[]), Seat::Floor);
    }

    #[test]
    fn visible_strategy_looks_through_floor() {
        // The empty seat at (4, 3) sees eight occupied seats, none of
        // them adjacent.
        let layout = "\
.......#.
...#.....
.#.......
.........
..#L....#
....#....
.........
#........
...#.....
";
        let grid = parse_layout(layout).unwrap();
        let rule = SeatingRule::new(Strategy::Visible);
        let neighbours = rule.neighbours(&grid, 4, 3).unwrap();
        assert_eq!(neighbours.len(), 8);
        assert!(neighbours.iter().all(|&&seat| seat == Seat::Occupied));
    }

    #[test]
    fn visible_strategy_stops_at_the_first_seat() {
        // The leftmost empty seat sees the other empty seat, which hides
        // every occupied seat beyond it.
        let layout = "\
.............
.L.L.#.#.#.#.
.............
";
        let grid = parse_layout(layout).unwrap();
        let rule = SeatingRule::new(Strategy::Visible);
        let neighbours = rule.neighbours(&grid, 1, 1).unwrap();
        assert_eq!(neighbours.len(), 1);
        assert_eq!(*neighbours[0], Seat::Empty);
    }

    #[test]
    fn visible_strategy_can_see_nothing() {
        // Every ray from the central empty seat leaves the grid before
        // meeting a seat.
        let layout = "\
.##.##.
#.#.#.#
##...##
...L...
##...##
#.#.#.#
.##.##.
";
        let grid = parse_layout(layout).unwrap();
        let rule = SeatingRule::new(Strategy::Visible);
        assert!(rule.neighbours(&grid, 3, 3).unwrap().is_empty());
    }

    #[test]
    fn adjacent_strategy_ignores_distant_seats() {
        let layout = "\
#....
.....
..L..
.....
....#
";
        let grid = parse_layout(layout).unwrap();
        let rule = SeatingRule::new(Strategy::Adjacent);
        let neighbours = rule.neighbours(&grid, 2, 2).unwrap();
        assert_eq!(neighbours.len(), 8);
        assert!(neighbours.iter().all(|&&seat| seat == Seat::Floor));
    }
}
