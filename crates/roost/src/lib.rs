//! Roost: grid fixed-point simulation with pluggable neighbourhood rules.
//!
//! This is the facade crate that re-exports the public API from the
//! roost sub-crates. For most users, adding `roost` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use roost::prelude::*;
//!
//! // Four empty seats in a square. Everybody sits down at once, and
//! // nobody is crowded enough to leave again.
//! let out = stabilize("LL\nLL\n", Strategy::Adjacent, EngineConfig::default()).unwrap();
//! assert_eq!(occupied_seats(&out.grid), 4);
//! assert_eq!(out.generations, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `roost-grid` | [`grid::Grid`], compass directions, neighbour queries |
//! | [`engine`] | `roost-engine` | The [`engine::Rule`] trait and fixed-point [`engine::Engine`] |
//! | [`seating`] | `roost-seating` | Seat layouts, parsing, and the two occupancy strategies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Dense 2-D storage and neighbour queries (`roost-grid`).
pub use roost_grid as grid;

/// The transition-rule trait and the fixed-point driver (`roost-engine`).
pub use roost_engine as engine;

/// The seating domain: parsing, occupancy rules, and the end-to-end
/// [`seating::stabilize`] pipeline (`roost-seating`).
pub use roost_seating as seating;

/// Common imports for typical roost usage.
///
/// ```rust
/// use roost::prelude::*;
/// ```
pub mod prelude {
    pub use roost_engine::{Engine, EngineConfig, EngineError, RunMetrics, Rule, Stabilized};
    pub use roost_grid::{Direction, Grid, GridError};
    pub use roost_seating::{
        occupied_seats, parse_layout, stabilize, ParseError, Seat, SeatingError, SeatingRule,
        Strategy,
    };
}
