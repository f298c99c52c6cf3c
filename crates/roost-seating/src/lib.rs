//! The seating domain: layout parsing and occupancy rules.
//!
//! A seat layout is a block of text over a three-symbol alphabet
//! (`.` floor, `L` empty seat, `#` occupied seat). This crate parses
//! such text into a [`roost_grid::Grid`] of [`Seat`] cells, defines the
//! two occupancy rules ([`Strategy::Adjacent`] and [`Strategy::Visible`]),
//! and composes them with the fixed-point engine into the single
//! text-in, count-out operation [`stabilize`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod parse;
pub mod rule;
pub mod seat;
pub mod stabilize;
pub mod strategy;

pub use parse::{parse_layout, ParseError};
pub use rule::SeatingRule;
pub use seat::Seat;
pub use stabilize::{occupied_seats, stabilize, SeatingError};
pub use strategy::{ParseStrategyError, Strategy};
