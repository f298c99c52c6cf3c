//! Dense 2-D cell storage and neighbour queries for roost simulations.
//!
//! This crate defines [`Grid`], a rectangular, bounds-checked container
//! over an arbitrary cell type, together with the two neighbour queries
//! every roost rule is built on:
//!
//! - [`Grid::adjacent`]: the up-to-8 cells at Chebyshev distance 1;
//! - [`Grid::visible`]: the first non-transparent cell along each of the
//!   eight compass rays.
//!
//! Both queries enumerate results in the fixed order of
//! [`Direction::ALL`], so callers that later become order-sensitive do
//! not silently change behaviour.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod grid;

pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
