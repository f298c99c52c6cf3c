//! The [`Rule`] trait: the seam at which domain behaviour plugs into the
//! engine.

use roost_grid::{Grid, GridError};
use smallvec::SmallVec;

/// A per-cell transition rule applied simultaneously to a whole grid.
///
/// # Contract
///
/// - Both methods MUST be deterministic: identical inputs produce
///   identical outputs.
/// - `transition()` computes a cell's next state from the *previous*
///   generation only: the cell's old value and the neighbour values
///   observed by `neighbours()`. The engine never lets a rule see a
///   partially written next generation, and a rule must not smuggle in
///   other state.
///
/// # Examples
///
/// A rule under which every cell copies its first neighbour, with
/// lonely cells keeping their value:
///
/// ```
/// use roost_engine::Rule;
/// use roost_grid::{Grid, GridError};
/// use smallvec::SmallVec;
///
/// struct CopyFirst;
///
/// impl Rule for CopyFirst {
///     type Cell = u8;
///
///     fn name(&self) -> &str {
///         "copy_first"
///     }
///
///     fn neighbours<'a>(
///         &self,
///         grid: &'a Grid<u8>,
///         row: usize,
///         col: usize,
///     ) -> Result<SmallVec<[&'a u8; 8]>, GridError> {
///         grid.adjacent(row, col)
///     }
///
///     fn transition(&self, cell: &u8, neighbours: &[&u8]) -> u8 {
///         neighbours.first().map_or(*cell, |&&v| v)
///     }
/// }
///
/// let rule = CopyFirst;
/// assert_eq!(rule.transition(&3, &[&7, &1]), 7);
/// assert_eq!(rule.transition(&3, &[]), 3);
/// ```
pub trait Rule {
    /// The cell type this rule operates on.
    type Cell: Clone + PartialEq;

    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// The cells this rule observes around `(row, col)`.
    ///
    /// This is where a rule chooses its neighbourhood: immediate
    /// adjacency, line of sight, or anything else expressible against
    /// the grid's queries. Called once per cell per generation, always
    /// against the frozen previous generation.
    fn neighbours<'a>(
        &self,
        grid: &'a Grid<Self::Cell>,
        row: usize,
        col: usize,
    ) -> Result<SmallVec<[&'a Self::Cell; 8]>, GridError>;

    /// A cell's next state, given its previous state and the observed
    /// neighbour values.
    fn transition(&self, cell: &Self::Cell, neighbours: &[&Self::Cell]) -> Self::Cell;
}
